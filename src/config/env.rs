use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_no_surrounding_whitespace, validate_non_empty_string, validate_required_field,
    Validate,
};
use std::env;

pub const SERVICE_NETWORK_ID_VAR: &str = "SERVICE_NETWORK_ID";
pub const REGISTRY_SECRET_ARN_VAR: &str = "REGISTRY_SECRET_ARN";

/// Invocation configuration read from the function environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub service_network_id: String,
    pub registry_secret_id: String,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_values(lookup(SERVICE_NETWORK_ID_VAR), lookup(REGISTRY_SECRET_ARN_VAR))
    }

    pub fn from_values(
        service_network_id: Option<String>,
        registry_secret_id: Option<String>,
    ) -> Result<Self> {
        let service_network_id =
            validate_required_field(SERVICE_NETWORK_ID_VAR, &service_network_id)?.clone();
        let registry_secret_id =
            validate_required_field(REGISTRY_SECRET_ARN_VAR, &registry_secret_id)?.clone();

        let config = Self {
            service_network_id,
            registry_secret_id,
        };
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for EnvConfig {
    fn service_network_id(&self) -> &str {
        &self.service_network_id
    }

    fn registry_secret_id(&self) -> &str {
        &self.registry_secret_id
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(SERVICE_NETWORK_ID_VAR, &self.service_network_id)?;
        validate_no_surrounding_whitespace(SERVICE_NETWORK_ID_VAR, &self.service_network_id)?;

        validate_non_empty_string(REGISTRY_SECRET_ARN_VAR, &self.registry_secret_id)?;
        validate_no_surrounding_whitespace(REGISTRY_SECRET_ARN_VAR, &self.registry_secret_id)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
