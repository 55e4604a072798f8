use std::fmt;
use thiserror::Error;

/// Boxed error kept as the source of an external-service fault.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// External calls that can fault during an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetSecretValue,
    ListAssociations,
    CreateAssociation,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::GetSecretValue => "secretsmanager:GetSecretValue",
            Operation::ListAssociations => "vpc-lattice:ListServiceNetworkServiceAssociations",
            Operation::CreateAssociation => "vpc-lattice:CreateServiceNetworkServiceAssociation",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AssociatorError {
    #[error("Configuration error: {field} is required")]
    MissingConfigError { field: String },

    #[error("Configuration error: invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed registry record: {0}")]
    MalformedRegistryRecord(#[source] serde_json::Error),

    #[error("Malformed registry record: service_id must be a string, got {value}")]
    InvalidServiceId { value: String },

    // Displays the source message as-is; the operation is kept for logging.
    #[error("{source}")]
    ExternalServiceError {
        operation: Operation,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    ExternalService,
}

impl AssociatorError {
    pub fn external<E>(operation: Operation, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AssociatorError::ExternalServiceError {
            operation,
            source: Box::new(source),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AssociatorError::MissingConfigError { .. }
            | AssociatorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AssociatorError::MalformedRegistryRecord(_)
            | AssociatorError::InvalidServiceId { .. } => ErrorCategory::Data,
            AssociatorError::ExternalServiceError { .. } => ErrorCategory::ExternalService,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AssociatorError::MissingConfigError { field } => {
                format!("Set {} in the function environment", field)
            }
            AssociatorError::InvalidConfigValueError { field, .. } => {
                format!("Check the value supplied for {}", field)
            }
            AssociatorError::MalformedRegistryRecord(_)
            | AssociatorError::InvalidServiceId { .. } => {
                "The registry secret must hold a JSON object such as {\"service_id\": \"svc-...\"}"
                    .to_string()
            }
            AssociatorError::ExternalServiceError { operation, .. } => format!(
                "Check IAM permissions and that the referenced resources exist ({})",
                operation
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssociatorError>;
