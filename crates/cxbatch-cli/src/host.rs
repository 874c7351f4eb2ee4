use crate::config::models::HostConfig;
use crate::error::Result;
use cxbatch::core::command::Command;
use cxbatch::engine::executor::{CommandExecutor, ExecutorError};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, trace};

#[derive(Deserialize, Debug)]
struct RestReply {
    #[serde(default)]
    error: Option<RestFailure>,
}

#[derive(Deserialize, Debug)]
struct RestFailure {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
}

const NOT_JSON_HINT: &str = "host reply is not JSON; start the ChimeraX REST server with \
     `remotecontrol rest start port <N> json true`";

/// Dispatches commands to a live ChimeraX session through `remotecontrol rest`.
///
/// The server must run with `json true`: plain-text replies carry no error
/// status, so they are refused rather than trusted.
pub struct RestExecutor {
    client: Client,
    run_url: String,
}

impl RestExecutor {
    pub fn new(config: &HostConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExecutorError::Transport(e.to_string()))?;
        let run_url = format!("{}/run", config.url.trim_end_matches('/'));
        debug!("REST executor targeting {}", run_url);
        Ok(Self { client, run_url })
    }

    /// Checks that the host answers before any structure is opened.
    pub fn ping(&mut self) -> std::result::Result<(), ExecutorError> {
        self.execute(&Command::raw("version"))
    }
}

impl CommandExecutor for RestExecutor {
    fn execute(&mut self, command: &Command) -> std::result::Result<(), ExecutorError> {
        let response = self
            .client
            .get(&self.run_url)
            .query(&[("command", command.as_str())])
            .send()
            .map_err(|e| ExecutorError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ExecutorError::Transport(e.to_string()))?;
        trace!("Host replied {} to `{}`: {}", status, command, body);

        if !status.is_success() {
            return Err(ExecutorError::Transport(format!(
                "HTTP {} from {}",
                status, self.run_url
            )));
        }
        interpret_reply(&body)
    }
}

fn interpret_reply(body: &str) -> std::result::Result<(), ExecutorError> {
    match serde_json::from_str::<RestReply>(body) {
        Ok(RestReply {
            error: Some(failure),
        }) => Err(ExecutorError::Rejected {
            message: if failure.kind.is_empty() {
                failure.message
            } else {
                format!("{}: {}", failure.kind, failure.message)
            },
        }),
        Ok(_) => Ok(()),
        Err(e) => {
            debug!("Host reply is not JSON ({}): {}", e, body);
            Err(ExecutorError::Rejected {
                message: format!("{} (got: {})", NOT_JSON_HINT, body.trim()),
            })
        }
    }
}
