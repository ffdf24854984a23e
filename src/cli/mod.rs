pub mod args;
pub mod commands;

pub use args::{
    CallArgs, Cli, Commands, CompletionsArgs, ContractsArgs, ReplArgs, ScenarioArgs, Verbosity,
};
