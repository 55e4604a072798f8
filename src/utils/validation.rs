use crate::utils::error::{AssociatorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AssociatorError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Blank values are reported as missing, the same as unset ones.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AssociatorError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_no_surrounding_whitespace(field_name: &str, value: &str) -> Result<()> {
    if value.trim() != value {
        return Err(AssociatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not start or end with whitespace".to_string(),
        });
    }
    Ok(())
}
