pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::EnvConfig;

pub use adapters::{AwsOptions, LatticeRegistry, SecretsManagerReader};
pub use core::associator::Associator;
pub use domain::model::{AssociationOutcome, AssociationSummary, HandlerResponse};
pub use utils::error::{AssociatorError, Result};
