/// REPL session management with history and state
///
/// Handles user input, command history, and persistent stub/call-log
/// state across multiple dispatches within a single session.
use super::commands::ReplCommand;
use super::ReplConfig;
use crate::cli::commands::parse_args;
use crate::logging;
use crate::net::MockNet;
use crate::ui::formatter::Formatter;
use crate::Result;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{DefaultEditor, Editor};
use std::path::PathBuf;

/// REPL session state and editor
pub struct ReplSession {
    editor: Editor<(), FileHistory>,
    net: MockNet,
    history_path: PathBuf,
}

impl ReplSession {
    /// Create a new REPL session
    pub fn new(config: ReplConfig) -> Result<Self> {
        let history_path = dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(".clarity_mocknet_history");

        let mut editor = DefaultEditor::new()
            .map_err(|e| miette::miette!("Failed to initialize REPL editor: {}", e))?;

        // Load history if it exists
        let _ = editor.load_history(&history_path);

        let mut net = MockNet::with_builtin();
        if let Some(height) = config.height {
            net.advance_height(height);
        }
        for spec in &config.stubs {
            net.stub_spec(spec)?;
        }

        Ok(ReplSession {
            editor,
            net,
            history_path,
        })
    }

    /// Run the REPL event loop
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();
        logging::log_repl_start();

        loop {
            let prompt = format!(
                "{}> ",
                Formatter::info(format!("clarity-mocknet [height {}]", self.net.height()))
            );

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(trimmed);

                    match ReplCommand::parse(trimmed) {
                        Ok(ReplCommand::Exit) => break,
                        Ok(command) => {
                            if let Err(e) = self.execute(command) {
                                println!("{}", Formatter::error(format!("{e}")));
                            }
                        }
                        Err(e) => println!("{}", Formatter::error(format!("{e}"))),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("(interrupt — type 'exit' to leave)");
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    return Err(miette::miette!("Readline error: {}", e));
                }
            }
        }

        let _ = self.editor.save_history(&self.history_path);
        println!("Goodbye.");
        Ok(())
    }

    fn execute(&mut self, command: ReplCommand) -> Result<()> {
        match command {
            ReplCommand::Call {
                contract,
                function,
                args,
            } => {
                let parsed = match &args {
                    Some(json) => parse_args(json)?,
                    None => Vec::new(),
                };
                let result = self.net.call(&contract, &function, &parsed)?;
                println!("{}", Formatter::format_return(&result));
            }
            ReplCommand::Stub { spec } => {
                self.net.stub_spec(&spec)?;
                println!("{}", Formatter::success("Stub configured"));
            }
            ReplCommand::Contracts => {
                for decl in self.net.contracts() {
                    println!("{}", Formatter::format_contract(decl));
                }
            }
            ReplCommand::Calls => {
                if self.net.calls().is_empty() {
                    println!("No calls recorded");
                } else {
                    for record in self.net.calls() {
                        println!("{}", Formatter::format_call_record(record));
                    }
                }
            }
            ReplCommand::Height { advance } => match advance {
                Some(blocks) => {
                    self.net.advance_height(blocks);
                    println!("Height: {}", self.net.height());
                }
                None => println!("Height: {}", self.net.height()),
            },
            ReplCommand::Reset => {
                self.net.reset();
                println!("{}", Formatter::success("Stubs and call log cleared"));
            }
            ReplCommand::Clear => {
                // ANSI clear screen and move cursor home
                print!("\x1B[2J\x1B[1;1H");
            }
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => unreachable!("handled by the event loop"),
        }
        Ok(())
    }

    fn print_welcome(&self) {
        println!(
            "{}",
            Formatter::info("clarity-mocknet interactive session. Type 'help' for commands.")
        );
    }

    fn print_help(&self) {
        println!("Available commands:");
        println!("  call <contract> <function> [json-args]   Dispatch a call");
        println!("  stub <contract.function=RETURN_JSON>     Configure a canned return");
        println!("  contracts                                List declared contracts");
        println!("  calls                                    Show the call log");
        println!("  height [blocks]                          Show or advance block height");
        println!("  reset                                    Clear stubs and call log");
        println!("  clear                                    Clear the screen");
        println!("  help                                     Show this help");
        println!("  exit                                     Leave the session");
    }
}
