use super::command::Command;
use super::selection::GroupPair;
use super::variant::AnalysisVariant;
use std::path::PathBuf;

/// Everything the batch driver needs to know about what to run per file.
///
/// A plan is either derived from one of the built-in [`AnalysisVariant`]s or
/// assembled from a user-supplied command list. The per-file session commands
/// (open, log save, log clear, close) are not part of the plan; the driver
/// wraps them around [`analysis`](Self::analysis).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPlan {
    pub name: String,
    pub output_suffix: String,
    pub analysis: Vec<Command>,
    pub executable_links: bool,
    pub working_directory: Option<PathBuf>,
    pub exit_when_done: bool,
}

impl AnalysisPlan {
    pub fn from_variant(variant: AnalysisVariant, groups: &GroupPair) -> Self {
        Self {
            name: variant.name().to_string(),
            output_suffix: variant.output_suffix().to_string(),
            analysis: variant.analysis_commands(groups),
            executable_links: false,
            working_directory: None,
            exit_when_done: false,
        }
    }

    pub fn custom(name: &str, output_suffix: &str, analysis: Vec<Command>) -> Self {
        Self {
            name: name.to_string(),
            output_suffix: output_suffix.to_string(),
            analysis,
            executable_links: false,
            working_directory: None,
            exit_when_done: false,
        }
    }

    pub fn with_output_suffix(mut self, suffix: String) -> Self {
        self.output_suffix = suffix;
        self
    }

    pub fn with_working_directory(mut self, dir: Option<PathBuf>) -> Self {
        self.working_directory = dir;
        self
    }

    pub fn with_exit_when_done(mut self, exit: bool) -> Self {
        self.exit_when_done = exit;
        self
    }

    pub fn with_executable_links(mut self, enabled: bool) -> Self {
        self.executable_links = enabled;
        self
    }

    /// Name of the log file the host writes for `input_path`.
    pub fn output_path_for(&self, input_path: &str) -> String {
        format!("{}{}", input_path, self.output_suffix)
    }

    /// The full ordered command list for one manifest entry.
    pub fn commands_for(&self, input_path: &str) -> Vec<Command> {
        let mut commands = Vec::with_capacity(self.analysis.len() + 4);
        commands.push(Command::open(input_path));
        commands.extend(self.analysis.iter().cloned());
        commands.push(Command::log_save(
            &self.output_path_for(input_path),
            self.executable_links,
        ));
        commands.push(Command::log_clear());
        commands.push(Command::close_all());
        commands
    }
}
