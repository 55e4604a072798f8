use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use lattice_associator::adapters::{self, AwsOptions, LatticeRegistry, SecretsManagerReader};
use lattice_associator::utils::logger::{self, LogFormat};
use lattice_associator::{Associator, HandlerResponse};
use serde_json::Value;
use std::env;

type LambdaAssociator = Associator<SecretsManagerReader, LatticeRegistry>;

async fn function_handler(
    associator: &LambdaAssociator,
    event: LambdaEvent<Value>,
) -> Result<Option<HandlerResponse>, Error> {
    // Environment is read per invocation, after the event is logged.
    let response = associator
        .invoke(&event.payload, |key| env::var(key).ok())
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_logger(LogFormat::Json, false);

    // Clients are built once per cold start and shared by every invocation.
    let sdk_config = adapters::load_sdk_config(&AwsOptions::default()).await;
    let (secrets, registry) = adapters::aws_collaborators(&sdk_config);
    let associator = Associator::new(secrets, registry);
    let associator = &associator;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(associator, event).await
    }))
    .await
}
