/// REPL command parsing and representation
///
/// Parses user input into structured REPL commands. Tokens follow shell
/// quoting rules so JSON payloads can be passed in single quotes.
use crate::Result;

/// Represents a REPL command
#[derive(Debug, Clone)]
pub enum ReplCommand {
    /// Call a contract function: call <contract> <function> [json-args]
    Call {
        contract: String,
        function: String,
        args: Option<String>,
    },
    /// Configure a stub: stub <contract.function=RETURN_JSON>
    Stub { spec: String },
    /// List declared contracts: contracts
    Contracts,
    /// Show the call log: calls
    Calls,
    /// Show or advance the block height: height [blocks]
    Height { advance: Option<u64> },
    /// Clear stubs and the call log: reset
    Reset,
    /// Clear screen: clear
    Clear,
    /// Show help: help
    Help,
    /// Exit REPL: exit
    Exit,
}

impl ReplCommand {
    /// Parse a command string into a ReplCommand
    pub fn parse(input: &str) -> Result<Self> {
        let parts = shlex::split(input.trim())
            .ok_or_else(|| miette::miette!("Unbalanced quoting in command"))?;

        if parts.is_empty() {
            return Err(miette::miette!("Empty command"));
        }

        match parts[0].as_str() {
            "call" => {
                if parts.len() < 3 || parts.len() > 4 {
                    return Err(miette::miette!(
                        "Usage: call <contract> <function> [json-args]"
                    ));
                }
                Ok(ReplCommand::Call {
                    contract: parts[1].clone(),
                    function: parts[2].clone(),
                    args: parts.get(3).cloned(),
                })
            }
            "stub" => {
                if parts.len() != 2 {
                    return Err(miette::miette!(
                        "Usage: stub <contract.function=RETURN_JSON>"
                    ));
                }
                Ok(ReplCommand::Stub {
                    spec: parts[1].clone(),
                })
            }
            "contracts" => Ok(ReplCommand::Contracts),
            "calls" => Ok(ReplCommand::Calls),
            "height" => {
                let advance = match parts.get(1) {
                    None => None,
                    Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                        miette::miette!("height takes a block count, got '{}'", raw)
                    })?),
                };
                Ok(ReplCommand::Height { advance })
            }
            "reset" => Ok(ReplCommand::Reset),
            "clear" => Ok(ReplCommand::Clear),
            "help" => Ok(ReplCommand::Help),
            "exit" | "quit" => Ok(ReplCommand::Exit),
            other => Err(miette::miette!(
                "Unknown command: '{}'. Type 'help' for available commands.",
                other
            )),
        }
    }
}
