use crate::config::env::EnvConfig;
use crate::core::{
    AssociationOutcome, AssociationRegistry, ConfigProvider, HandlerResponse, RegistryRecord,
    SecretReader,
};
use crate::utils::error::Result;
use tracing::{error, info, warn};

/// Attaches the service named in the registry secret to a service network.
///
/// Each call performs at most one create. The list-then-create sequence is not
/// atomic: two concurrent invocations for the same pair can both see no
/// association and both issue a create. The networking API decides what happens
/// to the second one.
pub struct Associator<S: SecretReader, R: AssociationRegistry> {
    secrets: S,
    registry: R,
}

impl<S: SecretReader, R: AssociationRegistry> Associator<S, R> {
    pub fn new(secrets: S, registry: R) -> Self {
        Self { secrets, registry }
    }

    pub fn secrets(&self) -> &S {
        &self.secrets
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Handles one trigger event. `None` means there was nothing to do.
    pub async fn invoke<F>(
        &self,
        event: &serde_json::Value,
        lookup: F,
    ) -> Result<Option<HandlerResponse>>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(self.handle(event, lookup).await?.into_response())
    }

    /// Logs the event, then resolves configuration through `lookup`. A missing
    /// value fails here, before the secret store is touched.
    pub async fn handle<F>(
        &self,
        event: &serde_json::Value,
        lookup: F,
    ) -> Result<AssociationOutcome>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Received event: {}", event);

        let config = EnvConfig::from_lookup(lookup)?;
        self.associate(config.service_network_id(), config.registry_secret_id())
            .await
    }

    pub async fn associate(
        &self,
        service_network_id: &str,
        secret_id: &str,
    ) -> Result<AssociationOutcome> {
        self.reconcile(service_network_id, secret_id)
            .await
            .inspect_err(|e| error!("Error associating service: {}", e))
    }

    async fn reconcile(
        &self,
        service_network_id: &str,
        secret_id: &str,
    ) -> Result<AssociationOutcome> {
        let payload = match self.secrets.read_secret(secret_id).await? {
            Some(payload) if !payload.is_empty() => payload,
            _ => {
                warn!("Secret is empty.");
                return Ok(AssociationOutcome::SecretEmpty);
            }
        };

        let record = RegistryRecord::parse(&payload)?;
        let Some(service_id) = record.service_id() else {
            error!("No service_id found in secret payload.");
            return Ok(AssociationOutcome::ServiceIdMissing);
        };

        info!(
            "Attempting to associate Service {} with Network {}",
            service_id, service_network_id
        );

        let existing = self
            .registry
            .list_associations(service_network_id, service_id)
            .await?;
        if !existing.is_empty() {
            info!("Service {} is already associated.", service_id);
            return Ok(AssociationOutcome::AlreadyAssociated {
                service_id: service_id.to_string(),
            });
        }

        let association = self
            .registry
            .create_association(service_network_id, service_id)
            .await?;
        info!(
            association_id = association.id.as_deref().unwrap_or("-"),
            status = association.status.as_deref().unwrap_or("-"),
            "Successfully associated Service {}",
            service_id
        );

        Ok(AssociationOutcome::AssociationCreated {
            service_id: service_id.to_string(),
            association,
        })
    }
}
