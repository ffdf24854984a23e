/// Interactive session for stub and dispatch exploration
///
/// This module provides a Read-Eval-Print Loop (REPL) interface for
/// configuring stubs, dispatching contract calls and inspecting the
/// call log without restarting.
pub mod commands;
pub mod session;

pub use session::ReplSession;

use crate::Result;

/// Configuration for starting the REPL
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    pub stubs: Vec<String>,
    pub height: Option<u64>,
}

/// Start the REPL interactive session
pub fn start_repl(config: ReplConfig) -> Result<()> {
    let mut session = ReplSession::new(config)?;
    session.run()?;
    Ok(())
}
