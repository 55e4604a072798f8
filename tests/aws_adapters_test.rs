use httpmock::prelude::*;
use lattice_associator::core::{AssociationRegistry, SecretReader};
use lattice_associator::utils::error::{ErrorCategory, Operation};
use lattice_associator::{
    Associator, AssociatorError, HandlerResponse, LatticeRegistry, SecretsManagerReader,
};
use serde_json::json;

const SECRET_ARN: &str = "arn:aws:secretsmanager:us-east-1:123456789012:secret:registry-AbCdEf";
const ASSOCIATIONS_PATH: &str = "/servicenetworkserviceassociations";

fn secrets_reader(server: &MockServer) -> SecretsManagerReader {
    use aws_sdk_secretsmanager::config::{
        retry::RetryConfig, BehaviorVersion, Credentials, Region,
    };

    let config = aws_sdk_secretsmanager::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
        .retry_config(RetryConfig::disabled())
        .endpoint_url(server.base_url())
        .build();
    SecretsManagerReader::from_client(aws_sdk_secretsmanager::Client::from_conf(config))
}

fn lattice_registry(server: &MockServer) -> LatticeRegistry {
    use aws_sdk_vpclattice::config::{retry::RetryConfig, BehaviorVersion, Credentials, Region};

    let config = aws_sdk_vpclattice::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
        .retry_config(RetryConfig::disabled())
        .endpoint_url(server.base_url())
        .build();
    LatticeRegistry::from_client(aws_sdk_vpclattice::Client::from_conf(config))
}

#[tokio::test]
async fn test_reads_secret_string() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/").body_contains(SECRET_ARN);
            then.status(200)
                .header("content-type", "application/x-amz-json-1.1")
                .body(
                    json!({
                        "ARN": SECRET_ARN,
                        "Name": "registry",
                        "SecretString": "{\"service_id\":\"svc-42\"}"
                    })
                    .to_string(),
                );
        })
        .await;

    let payload = secrets_reader(&server)
        .read_secret(SECRET_ARN)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(payload.as_deref(), Some("{\"service_id\":\"svc-42\"}"));
}

#[tokio::test]
async fn test_binary_secret_has_no_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .header("content-type", "application/x-amz-json-1.1")
                .body(json!({"ARN": SECRET_ARN, "Name": "registry"}).to_string());
        })
        .await;

    let payload = secrets_reader(&server)
        .read_secret(SECRET_ARN)
        .await
        .unwrap();

    assert_eq!(payload, None);
}

#[tokio::test]
async fn test_secret_fault_is_external_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(400)
                .header("content-type", "application/x-amz-json-1.1")
                .body(
                    json!({
                        "__type": "ResourceNotFoundException",
                        "Message": "Secrets Manager can't find the specified secret."
                    })
                    .to_string(),
                );
        })
        .await;

    let err = secrets_reader(&server)
        .read_secret(SECRET_ARN)
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::ExternalService);
    assert!(matches!(
        err,
        AssociatorError::ExternalServiceError {
            operation: Operation::GetSecretValue,
            ..
        }
    ));
    assert!(err.to_string().contains("ResourceNotFoundException"));
}

#[tokio::test]
async fn test_lists_associations_for_pair() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(ASSOCIATIONS_PATH)
                .query_param("serviceNetworkIdentifier", "sn-1")
                .query_param("serviceIdentifier", "svc-42");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    json!({
                        "items": [{
                            "id": "snsa-0123456789abcdef0",
                            "status": "ACTIVE",
                            "serviceId": "svc-42",
                            "serviceNetworkId": "sn-1"
                        }]
                    })
                    .to_string(),
                );
        })
        .await;

    let items = lattice_registry(&server)
        .list_associations("sn-1", "svc-42")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id.as_deref(), Some("snsa-0123456789abcdef0"));
    assert_eq!(items[0].status.as_deref(), Some("ACTIVE"));
    assert_eq!(items[0].service_network_id.as_deref(), Some("sn-1"));
}

#[tokio::test]
async fn test_creates_association() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(ASSOCIATIONS_PATH)
                .json_body_partial(r#"{"serviceNetworkIdentifier":"sn-1","serviceIdentifier":"svc-42"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    json!({
                        "id": "snsa-0123456789abcdef0",
                        "status": "CREATE_IN_PROGRESS"
                    })
                    .to_string(),
                );
        })
        .await;

    let summary = lattice_registry(&server)
        .create_association("sn-1", "svc-42")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(summary.id.as_deref(), Some("snsa-0123456789abcdef0"));
    assert_eq!(summary.status.as_deref(), Some("CREATE_IN_PROGRESS"));
    assert_eq!(summary.service_id.as_deref(), Some("svc-42"));
}

#[tokio::test]
async fn test_lattice_fault_is_external_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(ASSOCIATIONS_PATH);
            then.status(404)
                .header("content-type", "application/json")
                .header("x-amzn-ErrorType", "ResourceNotFoundException")
                .body(
                    json!({
                        "message": "Service network not found",
                        "resourceId": "sn-1",
                        "resourceType": "SERVICE_NETWORK"
                    })
                    .to_string(),
                );
        })
        .await;

    let err = lattice_registry(&server)
        .list_associations("sn-1", "svc-42")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AssociatorError::ExternalServiceError {
            operation: Operation::ListAssociations,
            ..
        }
    ));
    assert!(err.to_string().contains("ResourceNotFoundException"));
}

#[tokio::test]
async fn test_end_to_end_creates_missing_association() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/").body_contains(SECRET_ARN);
            then.status(200)
                .header("content-type", "application/x-amz-json-1.1")
                .body(
                    json!({"ARN": SECRET_ARN, "SecretString": "{\"service_id\":\"svc-42\"}"})
                        .to_string(),
                );
        })
        .await;
    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(ASSOCIATIONS_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .body(json!({"items": []}).to_string());
        })
        .await;
    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(ASSOCIATIONS_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .body(json!({"id": "snsa-0123456789abcdef0"}).to_string());
        })
        .await;

    let associator = Associator::new(secrets_reader(&server), lattice_registry(&server));
    let response = associator
        .associate("sn-1", SECRET_ARN)
        .await
        .unwrap()
        .into_response();

    assert_eq!(response, Some(HandlerResponse::ok("Association Created")));
    list_mock.assert_async().await;
    create_mock.assert_hits_async(1).await;
}
