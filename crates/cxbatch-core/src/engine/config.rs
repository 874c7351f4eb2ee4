use crate::core::command::Command;
use crate::core::plan::AnalysisPlan;
use crate::core::selection::GroupPair;
use crate::core::variant::AnalysisVariant;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomPlanConfig {
    pub name: String,
    pub output_suffix: String,
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub manifest_path: PathBuf,
    pub plan: AnalysisPlan,
}

#[derive(Default)]
pub struct BatchConfigBuilder {
    manifest_path: Option<PathBuf>,
    variant: Option<AnalysisVariant>,
    groups: Option<GroupPair>,
    custom_plan: Option<CustomPlanConfig>,
    output_suffix: Option<String>,
    working_directory: Option<PathBuf>,
    exit_when_done: bool,
    executable_links: bool,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manifest_path(mut self, path: PathBuf) -> Self {
        self.manifest_path = Some(path);
        self
    }
    pub fn variant(mut self, variant: AnalysisVariant) -> Self {
        self.variant = Some(variant);
        self
    }
    pub fn groups(mut self, groups: GroupPair) -> Self {
        self.groups = Some(groups);
        self
    }
    pub fn custom_plan(mut self, plan: Option<CustomPlanConfig>) -> Self {
        self.custom_plan = plan;
        self
    }
    /// Replaces the built-in variant's output suffix. Ignored by custom plans,
    /// which carry their own.
    pub fn output_suffix(mut self, suffix: Option<String>) -> Self {
        self.output_suffix = suffix;
        self
    }
    pub fn working_directory(mut self, dir: Option<PathBuf>) -> Self {
        self.working_directory = dir;
        self
    }
    pub fn exit_when_done(mut self, exit: bool) -> Self {
        self.exit_when_done = exit;
        self
    }
    pub fn executable_links(mut self, enabled: bool) -> Self {
        self.executable_links = enabled;
        self
    }

    pub fn build(self) -> Result<BatchConfig, ConfigError> {
        let manifest_path = self
            .manifest_path
            .ok_or(ConfigError::MissingParameter("manifest_path"))?;

        let plan = match self.custom_plan {
            Some(custom) => Self::build_custom_plan(custom)?,
            None => {
                let variant = self
                    .variant
                    .ok_or(ConfigError::MissingParameter("variant"))?;
                let plan = AnalysisPlan::from_variant(variant, &self.groups.unwrap_or_default());
                match self.output_suffix {
                    Some(suffix) => plan.with_output_suffix(Self::checked_suffix(suffix)?),
                    None => plan,
                }
            }
        };

        Ok(BatchConfig {
            manifest_path,
            plan: plan
                .with_working_directory(self.working_directory)
                .with_exit_when_done(self.exit_when_done)
                .with_executable_links(self.executable_links),
        })
    }

    fn checked_suffix(suffix: String) -> Result<String, ConfigError> {
        if suffix.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "output_suffix",
                reason: "the output suffix cannot be empty".to_string(),
            });
        }
        Ok(suffix)
    }

    fn build_custom_plan(custom: CustomPlanConfig) -> Result<AnalysisPlan, ConfigError> {
        let output_suffix = Self::checked_suffix(custom.output_suffix)?;
        let commands: Vec<Command> = custom
            .commands
            .iter()
            .map(Command::raw)
            .filter(|c| !c.as_str().is_empty())
            .collect();
        if commands.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "commands",
                reason: "a custom plan needs at least one analysis command".to_string(),
            });
        }
        Ok(AnalysisPlan::custom(&custom.name, &output_suffix, commands))
    }
}
