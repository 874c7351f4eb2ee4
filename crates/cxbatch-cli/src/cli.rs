use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "cxbatch - Batch interface and hydrogen-bond analysis of structure files through ChimeraX.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send every command to a running ChimeraX session over its REST interface.
    Run(RunArgs),
    /// Write the full batch as a ChimeraX command script (.cxc) for later replay.
    Script(ScriptArgs),
    /// Print the commands that would be dispatched, without contacting ChimeraX.
    Preview(PreviewArgs),
    /// List the built-in analysis variants.
    Variants,
}

/// Options shared by every subcommand that walks a manifest.
#[derive(Args, Debug, Clone, Default)]
pub struct BatchArgs {
    /// Text file listing one structure-file path per line.
    /// Defaults to 'all_Relaxed_files.txt'.
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Built-in analysis to run ('interface-contact', 'hydrogen-bond', 'no-minimum-area').
    #[arg(long, value_name = "NAME")]
    pub variant: Option<String>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to change into before reading the manifest.
    /// The host session is moved there as well.
    #[arg(short = 'w', long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Chain id(s) of the first group (e.g. 'A' or 'H,L').
    #[arg(long, value_name = "CHAINS")]
    pub group_a: Option<String>,

    /// Chain id(s) of the second group.
    #[arg(long, value_name = "CHAINS")]
    pub group_b: Option<String>,

    /// Ask ChimeraX to exit once every entry has been processed.
    #[arg(long)]
    pub exit_when_done: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S groups.b=C
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Base URL of the ChimeraX REST server
    /// (start it in ChimeraX with `remotecontrol rest start port 60000 json true`).
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Per-command timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

/// Arguments for the `script` subcommand.
#[derive(Args, Debug)]
pub struct ScriptArgs {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Path of the command script to write.
    #[arg(short, long, value_name = "PATH", default_value = "cxbatch.cxc")]
    pub output: PathBuf,
}

/// Arguments for the `preview` subcommand.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub batch: BatchArgs,
}
