use thiserror::Error;

use super::config::ConfigError;
use super::executor::ExecutorError;
use crate::core::command::Command;
use crate::core::manifest::ManifestError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Invalid batch configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Entry {entry} ('{path}') failed on `{command}`: {source}")]
    Dispatch {
        entry: usize,
        path: String,
        command: Command,
        #[source]
        source: ExecutorError,
    },

    #[error("Failed to dispatch session command `{command}`: {source}")]
    Session {
        command: Command,
        #[source]
        source: ExecutorError,
    },
}
