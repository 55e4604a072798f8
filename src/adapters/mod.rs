// Adapters layer: concrete implementations of the domain ports.

pub mod memory;
pub mod secrets_manager;
pub mod vpc_lattice;

pub use secrets_manager::SecretsManagerReader;
pub use vpc_lattice::LatticeRegistry;

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Overrides applied on top of the default AWS provider chain.
#[derive(Debug, Clone, Default)]
pub struct AwsOptions {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

pub async fn load_sdk_config(options: &AwsOptions) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &options.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint_url) = &options.endpoint_url {
        tracing::debug!("Using custom AWS endpoint: {}", endpoint_url);
        loader = loader.endpoint_url(endpoint_url);
    }
    loader.load().await
}

/// Builds both AWS-backed collaborators from one shared SDK config.
pub fn aws_collaborators(config: &SdkConfig) -> (SecretsManagerReader, LatticeRegistry) {
    (
        SecretsManagerReader::new(config),
        LatticeRegistry::new(config),
    )
}
