use crate::domain::model::AssociationSummary;
use crate::domain::ports::AssociationRegistry;
use crate::utils::error::{AssociatorError, Operation, Result};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_vpclattice::error::ProvideErrorMetadata;
use aws_sdk_vpclattice::types::ServiceNetworkServiceAssociationSummary;
use aws_sdk_vpclattice::Client as LatticeClient;

#[derive(Debug, Clone)]
pub struct LatticeRegistry {
    client: LatticeClient,
}

impl LatticeRegistry {
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(LatticeClient::new(config))
    }

    pub fn from_client(client: LatticeClient) -> Self {
        Self { client }
    }
}

impl From<&ServiceNetworkServiceAssociationSummary> for AssociationSummary {
    fn from(item: &ServiceNetworkServiceAssociationSummary) -> Self {
        Self {
            id: item.id().map(str::to_owned),
            arn: item.arn().map(str::to_owned),
            status: item.status().map(|s| s.as_str().to_owned()),
            service_id: item.service_id().map(str::to_owned),
            service_network_id: item.service_network_id().map(str::to_owned),
        }
    }
}

#[async_trait]
impl AssociationRegistry for LatticeRegistry {
    async fn list_associations(
        &self,
        service_network_id: &str,
        service_id: &str,
    ) -> Result<Vec<AssociationSummary>> {
        // A (network, service) pair has at most one association, so one page is enough.
        let output = self
            .client
            .list_service_network_service_associations()
            .service_network_identifier(service_network_id)
            .service_identifier(service_id)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                tracing::debug!(
                    code = err.code().unwrap_or("Unknown"),
                    "ListServiceNetworkServiceAssociations failed"
                );
                AssociatorError::external(Operation::ListAssociations, err)
            })?;

        Ok(output.items().iter().map(AssociationSummary::from).collect())
    }

    async fn create_association(
        &self,
        service_network_id: &str,
        service_id: &str,
    ) -> Result<AssociationSummary> {
        let output = self
            .client
            .create_service_network_service_association()
            .service_network_identifier(service_network_id)
            .service_identifier(service_id)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                tracing::debug!(
                    code = err.code().unwrap_or("Unknown"),
                    "CreateServiceNetworkServiceAssociation failed"
                );
                AssociatorError::external(Operation::CreateAssociation, err)
            })?;

        Ok(AssociationSummary {
            id: output.id().map(str::to_owned),
            arn: output.arn().map(str::to_owned),
            status: output.status().map(|s| s.as_str().to_owned()),
            service_id: Some(service_id.to_string()),
            service_network_id: Some(service_network_id.to_string()),
        })
    }
}
