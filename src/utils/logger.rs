use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the global subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human output for terminals.
    Compact,
    /// One JSON object per line, flattened for CloudWatch Logs Insights.
    Json,
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "lattice_associator=debug,aws_config=info,warn"
    } else {
        "lattice_associator=info,warn"
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let layer = tracing_subscriber::fmt::layer().with_target(verbose);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        // Lambda stamps every line itself.
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.without_time().json().flatten_event(true))
            .init(),
    }
}
