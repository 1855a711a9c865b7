use std::process::ExitCode;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use component_updater::config::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_LOG_FILTER, UpdaterConfig};
use component_updater::descriptor::UpdateError;
use component_updater::version::listers::SmartHttpLister;
use component_updater::version::resolvers::{CachingResolver, TagResolver};

#[derive(Parser)]
#[command(name = "component-updater")]
#[command(
    version,
    about = "Pin git sources of component descriptors to their latest semver tag"
)]
struct Cli {
    /// Directories containing a component-descriptor.yaml; append `/...` to walk recursively
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<String>,

    /// Timeout in seconds for each ref advertisement request
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout: u64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: UpdaterConfig) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling");
            on_interrupt.cancel();
        }
    });

    let lister = SmartHttpLister::new(config.fetch_timeout, cancel)?;
    let resolver = CachingResolver::new(TagResolver::new(lister));

    component_updater::run::run(&config, &resolver).await
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = UpdaterConfig::new(cli.paths, cli.timeout)
        .map_err(anyhow::Error::from)
        .and_then(|config| {
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(run(config))
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let cancelled = e
                .chain()
                .filter_map(|cause| cause.downcast_ref::<UpdateError>())
                .any(UpdateError::is_cancelled);
            error!("{:#}", e);
            if cancelled {
                ExitCode::from(130)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
