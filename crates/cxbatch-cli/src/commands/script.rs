use super::enter_working_directory;
use crate::cli::ScriptArgs;
use crate::config::{build_config, builder::HostOverrides};
use crate::error::{CliError, Result};
use cxbatch::{
    core::{io::cxc::CxcScriptWriter, manifest::Manifest},
    engine::{error::EngineError, progress::ProgressReporter},
    workflows,
};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: ScriptArgs) -> Result<()> {
    let config = build_config(&args.batch, &HostOverrides::default())?;

    // Resolved against the launch directory, not the batch working directory.
    let output = absolute_output_path(&args.output)?;

    enter_working_directory(&config)?;

    // Nothing is written when the manifest cannot be read.
    let manifest =
        Manifest::read_from_path(&config.batch.manifest_path).map_err(EngineError::from)?;

    info!("Writing command script to {:?}", output);
    let mut writer = CxcScriptWriter::create(&output).map_err(|e| CliError::FileParsing {
        path: output.clone(),
        source: e.into(),
    })?;
    writer.write_header(&[
        format!("Generated by cxbatch v{}", env!("CARGO_PKG_VERSION")),
        format!("Plan: {}", config.batch.plan.name),
        format!("Manifest: {}", config.batch.manifest_path.display()),
    ])?;

    let summary = workflows::batch::run(
        &manifest,
        &config.batch.plan,
        &mut writer,
        &ProgressReporter::new(),
    )?;
    let lines = writer.lines_written();
    writer.finish()?;

    println!(
        "Wrote {} command(s) for {} structure(s) to {}",
        lines,
        summary.processed.len(),
        output.display()
    );
    println!("Replay it in ChimeraX with: open {}", output.display());

    Ok(())
}

fn absolute_output_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
