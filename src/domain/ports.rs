use crate::domain::model::AssociationSummary;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the secret store.
#[async_trait]
pub trait SecretReader: Send + Sync {
    /// Returns `None` when the secret carries no string payload.
    async fn read_secret(&self, secret_id: &str) -> Result<Option<String>>;
}

/// The networking layer's service-network/service association API.
#[async_trait]
pub trait AssociationRegistry: Send + Sync {
    async fn list_associations(
        &self,
        service_network_id: &str,
        service_id: &str,
    ) -> Result<Vec<AssociationSummary>>;

    async fn create_association(
        &self,
        service_network_id: &str,
        service_id: &str,
    ) -> Result<AssociationSummary>;
}

pub trait ConfigProvider: Send + Sync {
    fn service_network_id(&self) -> &str;
    fn registry_secret_id(&self) -> &str;
}
