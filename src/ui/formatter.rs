use crate::net::contract::ContractDecl;
use crate::net::registry::CallRecord;
use crate::net::value::{ReturnValue, Value};
use colored::Colorize;
use is_terminal::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Pretty printing utilities for harness output
pub struct Formatter;

impl Formatter {
    /// Disable colors when NO_COLOR is set or stdout is not a terminal.
    pub fn configure_colors_from_env() {
        let enabled = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        COLORS_ENABLED.store(enabled, Ordering::Relaxed);
        if !enabled {
            colored::control::set_override(false);
        }
    }

    fn colors_enabled() -> bool {
        COLORS_ENABLED.load(Ordering::Relaxed)
    }

    pub fn success(message: impl AsRef<str>) -> String {
        if Self::colors_enabled() {
            message.as_ref().green().to_string()
        } else {
            message.as_ref().to_string()
        }
    }

    pub fn error(message: impl AsRef<str>) -> String {
        if Self::colors_enabled() {
            message.as_ref().red().to_string()
        } else {
            message.as_ref().to_string()
        }
    }

    pub fn warning(message: impl AsRef<str>) -> String {
        if Self::colors_enabled() {
            message.as_ref().yellow().to_string()
        } else {
            message.as_ref().to_string()
        }
    }

    pub fn info(message: impl AsRef<str>) -> String {
        if Self::colors_enabled() {
            message.as_ref().cyan().to_string()
        } else {
            message.as_ref().to_string()
        }
    }

    /// Format a dispatched call: `energy-trading.get-energy-balance('ST2CY...)`.
    pub fn format_call(contract: &str, function: &str, args: &[Value]) -> String {
        let rendered = args
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}.{}({})", contract, function, rendered)
    }

    /// Format a resolved return value.
    pub fn format_return(return_value: &ReturnValue) -> String {
        return_value.to_string()
    }

    /// Format one call-log line.
    pub fn format_call_record(record: &CallRecord) -> String {
        let marker = if record.stubbed { "stub" } else { "none" };
        let returned = record.returned.as_deref().unwrap_or("none");
        format!(
            "[height {}] {}.{} args={} [{}] -> {}",
            record.height, record.contract, record.function, record.args_count, marker, returned
        )
    }

    /// Format a contract declaration with its entry points.
    pub fn format_contract(decl: &ContractDecl) -> String {
        let mut lines = vec![decl.name.clone()];
        lines.extend(
            decl.functions
                .iter()
                .map(|f| format!("  {} ({} args)", f.name, f.arity)),
        );
        lines.join("\n")
    }
}
