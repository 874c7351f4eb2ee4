use super::enter_working_directory;
use crate::cli::RunArgs;
use crate::config::{build_config, builder::HostOverrides};
use crate::error::Result;
use crate::host::RestExecutor;
use crate::utils::progress::CliProgressHandler;
use cxbatch::{engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub fn run(args: RunArgs) -> Result<()> {
    let overrides = HostOverrides {
        url: args.url.clone(),
        timeout_secs: args.timeout_secs,
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.batch, &overrides)?;

    enter_working_directory(&config)?;

    info!("Connecting to ChimeraX at {}", config.host.url);
    let mut executor = RestExecutor::new(&config.host)?;
    executor.ping()?;
    println!("Connected to ChimeraX at {}", config.host.url);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the batch workflow...");
    let summary = workflows::batch::run_from_config(&config.batch, &mut executor, &reporter)
        .inspect_err(|_| progress_handler.abandon())?;

    if summary.processed.is_empty() {
        warn!("Manifest listed no structure files; nothing was analyzed.");
        println!("Warning: the manifest listed no structure files.");
    } else {
        println!(
            "Analyzed {} structure(s) with '{}' ({} commands sent).",
            summary.processed.len(),
            summary.plan_name,
            summary.commands_dispatched
        );
    }

    Ok(())
}
