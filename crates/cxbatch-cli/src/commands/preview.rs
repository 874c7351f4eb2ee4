use super::enter_working_directory;
use crate::cli::PreviewArgs;
use crate::config::{build_config, builder::HostOverrides};
use crate::error::Result;
use cxbatch::{
    engine::executor::{DispatchEvent, RecordingExecutor},
    engine::progress::ProgressReporter,
    workflows,
};
use tracing::info;

pub fn run(args: PreviewArgs) -> Result<()> {
    let config = build_config(&args.batch, &HostOverrides::default())?;
    enter_working_directory(&config)?;

    let mut recorder = RecordingExecutor::new();
    let summary =
        workflows::batch::run_from_config(&config.batch, &mut recorder, &ProgressReporter::new())?;
    info!(
        "Preview recorded {} dispatch event(s) for {} entr(ies).",
        recorder.events().len(),
        summary.processed.len()
    );

    for line in render_events(recorder.events()) {
        println!("{}", line);
    }
    Ok(())
}

fn render_events(events: &[DispatchEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| match event {
            DispatchEvent::Command(command) => command.to_string(),
            DispatchEvent::Status(message) => format!("# {}", message),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cxbatch::core::command::Command;

    #[test]
    fn status_events_render_as_comments() {
        let events = vec![
            DispatchEvent::Command(Command::open("1abc.pdb")),
            DispatchEvent::Status("Processing file".to_string()),
            DispatchEvent::Command(Command::close_all()),
        ];
        assert_eq!(
            render_events(&events),
            vec!["open 1abc.pdb", "# Processing file", "close all"]
        );
    }
}
