use crate::utils::error::{AssociatorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registry record stored in the secret. Only `service_id` is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRecord {
    service_id: Option<String>,
}

impl RegistryRecord {
    /// The payload must be a JSON object. A `service_id` that is absent or
    /// falsy (`null`, `false`, `0`, `""`, `[]`, `{}`) reads as missing; any
    /// other non-string value is rejected.
    pub fn parse(payload: &str) -> Result<Self> {
        let object: Map<String, Value> =
            serde_json::from_str(payload).map_err(AssociatorError::MalformedRegistryRecord)?;

        let service_id = match object.get("service_id") {
            None => None,
            Some(value) if is_falsy(value) => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(other) => {
                return Err(AssociatorError::InvalidServiceId {
                    value: other.to_string(),
                })
            }
        };
        Ok(Self { service_id })
    }

    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationSummary {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub status: Option<String>,
    pub service_id: Option<String>,
    pub service_network_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssociationOutcome {
    SecretEmpty,
    ServiceIdMissing,
    AlreadyAssociated {
        service_id: String,
    },
    AssociationCreated {
        service_id: String,
        association: AssociationSummary,
    },
}

impl AssociationOutcome {
    /// The value handed back to the trigger. Both no-op branches return nothing.
    pub fn into_response(self) -> Option<HandlerResponse> {
        match self {
            AssociationOutcome::SecretEmpty | AssociationOutcome::ServiceIdMissing => None,
            AssociationOutcome::AlreadyAssociated { .. } => {
                Some(HandlerResponse::ok("Already associated"))
            }
            AssociationOutcome::AssociationCreated { .. } => {
                Some(HandlerResponse::ok("Association Created"))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_registry_record() {
        let record =
            RegistryRecord::parse(r#"{"service_id":"svc-42","owner":"payments"}"#).unwrap();
        assert_eq!(record.service_id(), Some("svc-42"));
    }

    #[test]
    fn test_falsy_service_id_is_missing() {
        for payload in [
            r#"{}"#,
            r#"{"service_id":null}"#,
            r#"{"service_id":""}"#,
            r#"{"service_id":false}"#,
            r#"{"service_id":0}"#,
            r#"{"service_id":0.0}"#,
            r#"{"service_id":[]}"#,
            r#"{"service_id":{}}"#,
        ] {
            let record = RegistryRecord::parse(payload).unwrap();
            assert_eq!(record.service_id(), None, "payload: {}", payload);
        }
    }

    #[test]
    fn test_truthy_non_string_service_id_is_rejected() {
        for payload in [
            r#"{"service_id":42}"#,
            r#"{"service_id":true}"#,
            r#"{"service_id":["svc-42"]}"#,
            r#"{"service_id":{"id":"svc-42"}}"#,
        ] {
            let err = RegistryRecord::parse(payload).unwrap_err();
            assert!(
                matches!(err, AssociatorError::InvalidServiceId { .. }),
                "payload: {}",
                payload
            );
        }
    }

    #[test]
    fn test_malformed_registry_record() {
        for payload in ["not json", "[\"svc-42\"]", "null", "\"svc-42\""] {
            let err = RegistryRecord::parse(payload).unwrap_err();
            assert!(
                matches!(err, AssociatorError::MalformedRegistryRecord(_)),
                "payload: {}",
                payload
            );
        }
    }

    #[test]
    fn test_outcome_responses() {
        assert_eq!(AssociationOutcome::SecretEmpty.into_response(), None);
        assert_eq!(AssociationOutcome::ServiceIdMissing.into_response(), None);

        let created = AssociationOutcome::AssociationCreated {
            service_id: "svc-42".to_string(),
            association: AssociationSummary::default(),
        };
        let json = serde_json::to_value(created.into_response()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"statusCode": 200, "body": "Association Created"})
        );

        let already = AssociationOutcome::AlreadyAssociated {
            service_id: "svc-42".to_string(),
        };
        assert_eq!(
            already.into_response(),
            Some(HandlerResponse::ok("Already associated"))
        );
    }
}
