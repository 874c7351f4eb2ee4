use crate::error::{CliError, Result};
use cxbatch::core::selection::ChainGroup;
use cxbatch::core::variant::AnalysisVariant;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGroupsConfig {
    pub a: Option<ChainGroup>,
    pub b: Option<ChainGroup>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileHostConfig {
    pub url: Option<String>,
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePlanConfig {
    pub name: Option<String>,
    #[serde(rename = "output-suffix")]
    pub output_suffix: Option<String>,
    #[serde(default)]
    pub commands: Vec<String>,
    #[serde(rename = "executable-links")]
    pub executable_links: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub manifest: Option<PathBuf>,
    #[serde(rename = "working-directory")]
    pub working_directory: Option<PathBuf>,
    pub variant: Option<AnalysisVariant>,
    #[serde(rename = "exit-when-done")]
    pub exit_when_done: Option<bool>,
    pub groups: Option<FileGroupsConfig>,
    pub host: Option<FileHostConfig>,
    pub plan: Option<FilePlanConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
