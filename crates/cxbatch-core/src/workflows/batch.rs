use crate::core::command::Command;
use crate::core::manifest::{Manifest, ManifestEntry};
use crate::core::plan::AnalysisPlan;
use crate::engine::config::BatchConfig;
use crate::engine::error::EngineError;
use crate::engine::executor::CommandExecutor;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

pub const STATUS_MESSAGE: &str = "Processing file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedEntry {
    /// 1-based position in the manifest.
    pub index: usize,
    pub path: String,
    /// Log file the host was asked to write.
    pub output_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub plan_name: String,
    pub processed: Vec<ProcessedEntry>,
    pub commands_dispatched: usize,
}

/// Reads the manifest named by `config` and runs the batch over it.
pub fn run_from_config<E: CommandExecutor>(
    config: &BatchConfig,
    executor: &mut E,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Reading manifest",
    });
    let manifest = Manifest::read_from_path(&config.manifest_path)?;
    reporter.report(Progress::PhaseFinish);
    info!(
        "Manifest {:?} lists {} structure file(s).",
        config.manifest_path,
        manifest.len()
    );

    run(&manifest, &config.plan, executor, reporter)
}

/// Runs `plan` over every manifest entry, strictly in order.
///
/// Each entry gets one open → status → analysis → log save → log clear →
/// close all cycle. The first executor error aborts the batch; entries before
/// it keep their output, entries after it are never opened.
#[instrument(skip_all, name = "batch_workflow", fields(plan = %plan.name))]
pub fn run<E: CommandExecutor>(
    manifest: &Manifest,
    plan: &AnalysisPlan,
    executor: &mut E,
    reporter: &ProgressReporter,
) -> Result<BatchSummary, EngineError> {
    let mut summary = BatchSummary {
        plan_name: plan.name.clone(),
        ..BatchSummary::default()
    };

    if let Some(dir) = &plan.working_directory {
        info!("Changing host working directory to {:?}", dir);
        dispatch_session(executor, &Command::cd(dir), &mut summary)?;
    }

    reporter.report(Progress::PhaseStart {
        name: "Processing structures",
    });
    reporter.report(Progress::TaskStart {
        total_steps: manifest.len() as u64,
    });

    for (i, entry) in manifest.iter().enumerate() {
        let index = i + 1;
        reporter.report(Progress::EntryStart {
            index,
            path: entry.path.clone(),
        });
        info!(
            "[{}/{}] Processing '{}' (manifest line {})",
            index,
            manifest.len(),
            entry.path,
            entry.line
        );

        process_entry(index, entry, plan, executor, &mut summary)?;

        let output_path = plan.output_path_for(&entry.path);
        reporter.message(format!("{} -> {}", entry.path, output_path));
        summary.processed.push(ProcessedEntry {
            index,
            path: entry.path.clone(),
            output_path,
        });
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    if plan.exit_when_done {
        info!("All entries processed; asking the host to exit.");
        dispatch_session(executor, &Command::exit(), &mut summary)?;
    }

    info!(
        "Batch '{}' finished: {} entr(ies), {} command(s) dispatched.",
        summary.plan_name,
        summary.processed.len(),
        summary.commands_dispatched
    );
    Ok(summary)
}

fn process_entry<E: CommandExecutor>(
    index: usize,
    entry: &ManifestEntry,
    plan: &AnalysisPlan,
    executor: &mut E,
    summary: &mut BatchSummary,
) -> Result<(), EngineError> {
    let commands = plan.commands_for(&entry.path);
    let Some((open, rest)) = commands.split_first() else {
        return Ok(());
    };

    dispatch(index, entry, executor, open, summary)?;
    executor.status(STATUS_MESSAGE);
    for command in rest {
        dispatch(index, entry, executor, command, summary)?;
    }
    Ok(())
}

fn dispatch<E: CommandExecutor>(
    index: usize,
    entry: &ManifestEntry,
    executor: &mut E,
    command: &Command,
    summary: &mut BatchSummary,
) -> Result<(), EngineError> {
    debug!("-> {}", command);
    executor
        .execute(command)
        .map_err(|source| EngineError::Dispatch {
            entry: index,
            path: entry.path.clone(),
            command: command.clone(),
            source,
        })?;
    summary.commands_dispatched += 1;
    Ok(())
}

fn dispatch_session<E: CommandExecutor>(
    executor: &mut E,
    command: &Command,
    summary: &mut BatchSummary,
) -> Result<(), EngineError> {
    debug!("-> {}", command);
    executor
        .execute(command)
        .map_err(|source| EngineError::Session {
            command: command.clone(),
            source,
        })?;
    summary.commands_dispatched += 1;
    Ok(())
}
