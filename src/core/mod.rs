pub mod associator;

pub use crate::domain::model::{
    AssociationOutcome, AssociationSummary, HandlerResponse, RegistryRecord,
};
pub use crate::domain::ports::{AssociationRegistry, ConfigProvider, SecretReader};
pub use crate::utils::error::Result;
