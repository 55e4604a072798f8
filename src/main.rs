use anyhow::Context;
use clap::Parser;
use lattice_associator::adapters;
use lattice_associator::utils::error::ErrorCategory;
use lattice_associator::utils::logger::{self, LogFormat};
use lattice_associator::{AssociationOutcome, Associator, AssociatorError, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(LogFormat::Compact, cli.verbose);
    tracing::info!("Starting lattice-associator CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli).await {
        Ok(outcome) => {
            println!("{}", describe(&outcome));
            if let Some(response) = outcome.into_response() {
                let json = serde_json::to_string(&response)
                    .context("Failed to serialise handler response")?;
                println!("{}", json);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "Association failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Data => 1,
                ErrorCategory::Configuration => 2,
                ErrorCategory::ExternalService => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig) -> Result<AssociationOutcome, AssociatorError> {
    let event = cli.event_payload()?;

    let sdk_config = adapters::load_sdk_config(&cli.aws_options()).await;
    let (secrets, registry) = adapters::aws_collaborators(&sdk_config);
    let associator = Associator::new(secrets, registry);

    associator.handle(&event, |key| cli.lookup(key)).await
}

fn describe(outcome: &AssociationOutcome) -> String {
    match outcome {
        AssociationOutcome::SecretEmpty => "⚠️  Registry secret is empty, nothing to do".to_string(),
        AssociationOutcome::ServiceIdMissing => {
            "⚠️  Registry secret has no service_id, nothing to do".to_string()
        }
        AssociationOutcome::AlreadyAssociated { service_id } => {
            format!("✅ Service {} is already associated", service_id)
        }
        AssociationOutcome::AssociationCreated {
            service_id,
            association,
        } => format!(
            "✅ Associated service {} ({}, status {})",
            service_id,
            association.id.as_deref().unwrap_or("unknown id"),
            association.status.as_deref().unwrap_or("unknown")
        ),
    }
}
