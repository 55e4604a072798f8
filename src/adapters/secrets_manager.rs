use crate::domain::ports::SecretReader;
use crate::utils::error::{AssociatorError, Operation, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_secretsmanager::error::ProvideErrorMetadata;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;

#[derive(Debug, Clone)]
pub struct SecretsManagerReader {
    client: SecretsManagerClient,
}

impl SecretsManagerReader {
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(SecretsManagerClient::new(config))
    }

    pub fn from_client(client: SecretsManagerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretReader for SecretsManagerReader {
    async fn read_secret(&self, secret_id: &str) -> Result<Option<String>> {
        tracing::debug!("Fetching secret value for {}", secret_id);

        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                tracing::debug!(
                    code = err.code().unwrap_or("Unknown"),
                    "GetSecretValue failed"
                );
                AssociatorError::external(Operation::GetSecretValue, err)
            })?;

        // Binary-only secrets have no string payload.
        Ok(output.secret_string().map(str::to_owned))
    }
}
