//! In-memory collaborators that record every call. Used by the test suites.

use crate::domain::model::AssociationSummary;
use crate::domain::ports::{AssociationRegistry, SecretReader};
use crate::utils::error::{AssociatorError, Operation, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Fault raised by the in-memory collaborators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct InMemoryFault(pub String);

#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    secrets: HashMap<String, Option<String>>,
    failure: Option<String>,
    reads: AtomicUsize,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, secret_id: &str, payload: impl Into<String>) -> Self {
        self.secrets
            .insert(secret_id.to_string(), Some(payload.into()));
        self
    }

    /// A secret that exists but has no string payload.
    pub fn with_binary_secret(mut self, secret_id: &str) -> Self {
        self.secrets.insert(secret_id.to_string(), None);
        self
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretReader for InMemorySecretStore {
    async fn read_secret(&self, secret_id: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(AssociatorError::external(
                Operation::GetSecretValue,
                InMemoryFault(message.clone()),
            ));
        }

        match self.secrets.get(secret_id) {
            Some(payload) => Ok(payload.clone()),
            None => Err(AssociatorError::external(
                Operation::GetSecretValue,
                InMemoryFault(format!(
                    "ResourceNotFoundException: secret {} not found",
                    secret_id
                )),
            )),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryLattice {
    associations: Mutex<Vec<AssociationSummary>>,
    list_calls: Mutex<Vec<(String, String)>>,
    create_calls: Mutex<Vec<(String, String)>>,
    list_failure: Option<String>,
    create_failure: Option<String>,
}

impl InMemoryLattice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_association(self, service_network_id: &str, service_id: &str) -> Self {
        self.insert(service_network_id, service_id, "ACTIVE");
        self
    }

    pub fn failing_list(mut self, message: impl Into<String>) -> Self {
        self.list_failure = Some(message.into());
        self
    }

    pub fn failing_create(mut self, message: impl Into<String>) -> Self {
        self.create_failure = Some(message.into());
        self
    }

    pub fn list_calls(&self) -> Vec<(String, String)> {
        self.list_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn create_calls(&self) -> Vec<(String, String)> {
        self.create_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn associations(&self) -> Vec<AssociationSummary> {
        self.associations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn insert(&self, service_network_id: &str, service_id: &str, status: &str) -> AssociationSummary {
        let mut associations = self
            .associations
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let id = format!("snsa-{:017}", associations.len() + 1);
        let summary = AssociationSummary {
            arn: Some(format!(
                "arn:aws:vpc-lattice:us-east-1:123456789012:servicenetworkserviceassociation/{}",
                id
            )),
            id: Some(id),
            status: Some(status.to_string()),
            service_id: Some(service_id.to_string()),
            service_network_id: Some(service_network_id.to_string()),
        };
        associations.push(summary.clone());
        summary
    }
}

#[async_trait]
impl AssociationRegistry for InMemoryLattice {
    async fn list_associations(
        &self,
        service_network_id: &str,
        service_id: &str,
    ) -> Result<Vec<AssociationSummary>> {
        self.list_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((service_network_id.to_string(), service_id.to_string()));

        if let Some(message) = &self.list_failure {
            return Err(AssociatorError::external(
                Operation::ListAssociations,
                InMemoryFault(message.clone()),
            ));
        }

        Ok(self
            .associations()
            .into_iter()
            .filter(|a| {
                a.service_network_id.as_deref() == Some(service_network_id)
                    && a.service_id.as_deref() == Some(service_id)
            })
            .collect())
    }

    async fn create_association(
        &self,
        service_network_id: &str,
        service_id: &str,
    ) -> Result<AssociationSummary> {
        self.create_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((service_network_id.to_string(), service_id.to_string()));

        if let Some(message) = &self.create_failure {
            return Err(AssociatorError::external(
                Operation::CreateAssociation,
                InMemoryFault(message.clone()),
            ));
        }

        Ok(self.insert(service_network_id, service_id, "CREATE_IN_PROGRESS"))
    }
}
