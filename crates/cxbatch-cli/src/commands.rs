pub mod preview;
pub mod run;
pub mod script;
pub mod variants;

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use tracing::info;

/// Moves this process into the configured working directory so the manifest
/// and every relative entry resolve the same way the host will see them.
pub(crate) fn enter_working_directory(config: &AppConfig) -> Result<()> {
    if let Some(dir) = &config.working_directory {
        info!("Changing working directory to {:?}", dir);
        std::env::set_current_dir(dir).map_err(|e| {
            CliError::Io(std::io::Error::new(
                e.kind(),
                format!("Cannot change into {:?}: {}", dir, e),
            ))
        })?;
    }
    Ok(())
}
