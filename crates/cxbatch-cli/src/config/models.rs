use cxbatch::engine::config::BatchConfig;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory the process moves into before the manifest is read.
    pub working_directory: Option<PathBuf>,
    pub host: HostConfig,
    pub batch: BatchConfig,
}
