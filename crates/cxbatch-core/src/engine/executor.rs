use crate::core::command::Command;
use std::io;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Host rejected command: {message}")]
    Rejected { message: String },

    #[error("Failed to reach host: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The host session as seen by the batch driver.
///
/// Implementors own whatever connection or output the host needs. Dispatch is
/// blocking: `execute` returns only once the host has finished (or refused)
/// the command.
pub trait CommandExecutor {
    fn execute(&mut self, command: &Command) -> Result<(), ExecutorError>;

    /// Short human-readable progress note for the host's status surface.
    fn status(&mut self, message: &str) {
        info!("{}", message);
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &mut E {
    fn execute(&mut self, command: &Command) -> Result<(), ExecutorError> {
        (**self).execute(command)
    }

    fn status(&mut self, message: &str) {
        (**self).status(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    Command(Command),
    Status(String),
}

/// Keeps every dispatch in memory instead of talking to a host.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    events: Vec<DispatchEvent>,
    fail_at: Option<usize>,
    executed: usize,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the `n`-th command (1-based) fail with [`ExecutorError::Rejected`].
    /// The failing command is not recorded.
    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[DispatchEvent] {
        &self.events
    }

    pub fn commands(&self) -> Vec<&Command> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DispatchEvent::Command(c) => Some(c),
                DispatchEvent::Status(_) => None,
            })
            .collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&mut self, command: &Command) -> Result<(), ExecutorError> {
        self.executed += 1;
        if self.fail_at == Some(self.executed) {
            return Err(ExecutorError::Rejected {
                message: format!("refused '{}'", command),
            });
        }
        self.events.push(DispatchEvent::Command(command.clone()));
        Ok(())
    }

    fn status(&mut self, message: &str) {
        self.events.push(DispatchEvent::Status(message.to_string()));
    }
}
