pub mod cli;
pub mod config;
pub mod history;
pub mod logging;
pub mod net;
pub mod repl;
pub mod scenario;
pub mod ui;
use miette::Diagnostic;

pub use net::contract::{ContractDecl, FunctionDecl};
pub use net::value::{Response, ReturnValue, Value};
pub use net::MockNet;

/// Result type alias for the harness
pub type Result<T> = miette::Result<T>;

/// Error types for the harness
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum HarnessError {
    #[error("Unknown contract: {0}")]
    #[diagnostic(
        code(mocknet::unknown_contract),
        help("Use `clarity-mocknet contracts` to list the declared contracts. Register custom contracts before stubbing or calling them.")
    )]
    UnknownContract(String),

    #[error("Contract '{contract}' has no function '{function}'")]
    #[diagnostic(
        code(mocknet::unknown_function),
        help("Use `clarity-mocknet contracts --functions` to see the entry points each declared contract exposes.")
    )]
    UnknownFunction { contract: String, function: String },

    #[error("Function '{contract}.{function}' takes {expected} argument(s) but {actual} were supplied")]
    #[diagnostic(
        code(mocknet::arity_mismatch),
        help("Check the declared arity with `clarity-mocknet contracts --functions`. Arguments are passed positionally as a JSON array.")
    )]
    ArityMismatch {
        contract: String,
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid stub spec: {0}")]
    #[diagnostic(
        code(mocknet::invalid_stub_spec),
        help("Stub specs have the form contract.function=RETURN_JSON, e.g. energy-trading.register-prosumer={{\"success\":true}}.")
    )]
    InvalidStubSpec(String),

    #[error("Invalid arguments: {0}")]
    #[diagnostic(
        code(mocknet::invalid_arguments),
        help("Ensure arguments are provided as a JSON array. Example: --args '[\"ST2CY...\", 100]'.")
    )]
    InvalidArguments(String),

    #[error("Scenario failed: {0}")]
    #[diagnostic(
        code(mocknet::scenario_failed),
        help("Scenario runs stop at the first failing step. Re-run with -v to see each dispatched call.")
    )]
    ScenarioError(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(mocknet::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),
}
