//! Structured logging utilities for the mock network.
//!
//! This module provides helper functions for consistent, structured
//! logging across the application using the `tracing` crate.

/// Log contract declaration registration.
pub fn log_contract_registered(name: &str, functions: usize) {
    tracing::debug!(contract = name, functions, "Contract declared");
}

/// Log stub installation.
pub fn log_stub_installed(contract: &str, function: &str, returned: &str) {
    tracing::debug!(contract, function, returned, "Stub configured");
}

/// Log dispatch start.
pub fn log_dispatch(contract: &str, function: &str, args: usize) {
    tracing::info!(contract, function, args, "Dispatching call");
}

/// Log dispatch completion with the resolved return value.
pub fn log_dispatch_complete(result: &str) {
    tracing::info!(result, "Dispatch completed");
}

/// Log a registry and call-log reset.
pub fn log_reset() {
    tracing::debug!("Stub registry reset");
}

/// Log a block height change.
pub fn log_height_advanced(height: u64) {
    tracing::debug!(height, "Block height advanced");
}

/// Log scenario loading.
pub fn log_scenario_start(path: &str, steps: usize) {
    tracing::info!(scenario = path, steps, "Running scenario");
}

/// Log a scenario step.
pub fn log_scenario_step(index: usize, name: &str) {
    tracing::debug!(step = index, name, "Executing scenario step");
}

/// Log call history persistence.
pub fn log_history_written(path: &str, records: usize) {
    tracing::debug!(history = path, records, "Call history appended");
}

/// Log interactive session start.
pub fn log_repl_start() {
    tracing::info!("Interactive session started");
}

/// Log trace export.
pub fn log_trace_written(path: &str, calls: usize) {
    tracing::info!(trace = path, calls, "Call trace written");
}
