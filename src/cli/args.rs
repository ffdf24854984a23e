use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clarity-mocknet")]
#[command(about = "A mock execution environment for Clarity smart contracts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}

/// Log verbosity derived from the global flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dispatch a single contract call against configured stubs
    Call(CallArgs),

    /// Run a TOML scenario of stubs, calls and assertions
    Scenario(ScenarioArgs),

    /// List declared contracts and their entry points
    Contracts(ContractsArgs),

    /// Start an interactive session
    Repl(ReplArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct CallArgs {
    /// Contract name (e.g. energy-trading)
    #[arg(short, long)]
    pub contract: String,

    /// Function name to dispatch
    #[arg(short, long)]
    pub function: String,

    /// Positional arguments as a JSON array (e.g. '["ST2CY...", 100]')
    #[arg(short, long)]
    pub args: Option<String>,

    /// Configure a stub: contract.function=RETURN_JSON (repeatable)
    #[arg(long, value_name = "SPEC")]
    pub stub: Vec<String>,

    /// Block height to dispatch at
    #[arg(long)]
    pub height: Option<u64>,

    /// Print the call log after dispatch
    #[arg(long)]
    pub show_calls: bool,

    /// Filter the printed call log by function name (repeatable). Supports:
    ///   prefix*       — match functions starting with prefix
    ///   re:<regex>    — match functions by regex
    ///   exact_name    — match function name exactly
    #[arg(long, value_name = "PATTERN")]
    pub call_filter: Vec<String>,

    /// Write the call log as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub trace_out: Option<PathBuf>,

    /// Skip appending this run to ~/.clarity-mocknet/history.json
    #[arg(long)]
    pub no_history: bool,
}

#[derive(Parser)]
pub struct ScenarioArgs {
    /// Path to the scenario TOML file
    pub scenario: PathBuf,

    /// Configure an extra stub on top of the scenario's own (repeatable)
    #[arg(long, value_name = "SPEC")]
    pub stub: Vec<String>,

    /// Override the scenario's starting block height
    #[arg(long)]
    pub height: Option<u64>,
}

#[derive(Parser)]
pub struct ContractsArgs {
    /// Show entry points with their arities
    #[arg(long)]
    pub functions: bool,

    /// Show the error codes used by the built-in contracts
    #[arg(long)]
    pub errors: bool,
}

#[derive(Parser)]
pub struct ReplArgs {
    /// Configure a stub before the session starts (repeatable)
    #[arg(long, value_name = "SPEC")]
    pub stub: Vec<String>,

    /// Starting block height
    #[arg(long)]
    pub height: Option<u64>,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
