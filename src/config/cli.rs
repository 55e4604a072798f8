use crate::adapters::AwsOptions;
use crate::config::env::{REGISTRY_SECRET_ARN_VAR, SERVICE_NETWORK_ID_VAR};
use crate::utils::error::{AssociatorError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "lattice-associator")]
#[command(about = "Attach the registry's service to a VPC Lattice service network")]
pub struct CliConfig {
    #[arg(long, env = SERVICE_NETWORK_ID_VAR)]
    pub service_network_id: Option<String>,

    #[arg(long, env = REGISTRY_SECRET_ARN_VAR)]
    pub registry_secret_arn: Option<String>,

    #[arg(long, help = "AWS region override")]
    pub region: Option<String>,

    #[arg(long, help = "Custom endpoint for both services (e.g. LocalStack)")]
    pub endpoint_url: Option<String>,

    #[arg(long, default_value = "{}", help = "Event payload to log, as JSON")]
    pub event: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves the function's environment variables from the parsed flags.
    pub fn lookup(&self, key: &str) -> Option<String> {
        match key {
            SERVICE_NETWORK_ID_VAR => self.service_network_id.clone(),
            REGISTRY_SECRET_ARN_VAR => self.registry_secret_arn.clone(),
            _ => None,
        }
    }

    pub fn aws_options(&self) -> AwsOptions {
        AwsOptions {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }

    pub fn event_payload(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.event).map_err(|e| AssociatorError::InvalidConfigValueError {
            field: "event".to_string(),
            value: self.event.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::EnvConfig;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "lattice-associator",
            "--service-network-id",
            "sn-1",
            "--registry-secret-arn",
            "registry",
            "--region",
            "eu-west-1",
            "--event",
            r#"{"source":"manual"}"#,
        ]);

        let config = EnvConfig::from_lookup(|key| cli.lookup(key)).unwrap();
        assert_eq!(config.service_network_id, "sn-1");
        assert_eq!(config.registry_secret_id, "registry");
        assert_eq!(cli.aws_options().region.as_deref(), Some("eu-west-1"));
        assert_eq!(cli.event_payload().unwrap()["source"], "manual");
    }

    #[test]
    fn test_invalid_event() {
        let cli = CliConfig::parse_from([
            "lattice-associator",
            "--service-network-id",
            "sn-1",
            "--registry-secret-arn",
            "registry",
            "--event",
            "{oops",
        ]);

        assert!(matches!(
            cli.event_payload(),
            Err(AssociatorError::InvalidConfigValueError { .. })
        ));
    }
}
