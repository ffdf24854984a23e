use crate::cli::args::ScenarioArgs;
use crate::logging;
use crate::net::MockNet;
use crate::ui::formatter::Formatter;
use crate::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Deserialize, Serialize)]
pub struct Scenario {
    /// Starting block height
    pub height: Option<u64>,
    /// Stubs configured before the first step, as spec strings
    #[serde(default)]
    pub stubs: Vec<String>,
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioStep {
    pub name: Option<String>,
    pub contract: String,
    pub function: String,
    /// Positional arguments as a JSON array string
    pub args: Option<String>,
    /// Stubs (re)configured before this step dispatches
    #[serde(default)]
    pub stubs: Vec<String>,
    /// Blocks to mine before this step dispatches
    pub advance_height: Option<u64>,
    pub expect_success: Option<bool>,
    pub expect_error: Option<u32>,
    pub expect_return: Option<String>,
}

pub fn run_scenario(args: ScenarioArgs) -> Result<()> {
    println!(
        "{}",
        Formatter::info(format!("Loading scenario file: {:?}", args.scenario))
    );
    let scenario_content = fs::read_to_string(&args.scenario).map_err(|e| {
        HarnessError::FileError(format!(
            "Failed to read scenario file {:?}: {}",
            args.scenario, e
        ))
    })?;

    let scenario: Scenario = toml::from_str(&scenario_content)
        .map_err(|e| HarnessError::FileError(format!("Failed to parse scenario TOML: {}", e)))?;

    logging::log_scenario_start(&args.scenario.to_string_lossy(), scenario.steps.len());

    let mut net = MockNet::with_builtin();
    if let Some(height) = args.height.or(scenario.height) {
        net.advance_height(height);
    }
    for spec in scenario.stubs.iter().chain(args.stub.iter()) {
        net.stub_spec(spec)?;
    }

    println!(
        "{}",
        Formatter::success(format!(
            "Running {} scenario steps...\n",
            scenario.steps.len()
        ))
    );

    let mut all_passed = true;

    for (i, step) in scenario.steps.iter().enumerate() {
        let step_label = step
            .name
            .as_deref()
            .unwrap_or(&step.function);
        println!(
            "{}",
            Formatter::info(format!("Step {}: {}", i + 1, step_label))
        );
        logging::log_scenario_step(i + 1, step_label);

        for spec in &step.stubs {
            net.stub_spec(spec)?;
        }
        if let Some(blocks) = step.advance_height {
            net.advance_height(blocks);
        }

        let parsed_args = if let Some(args_json) = &step.args {
            crate::cli::commands::parse_args(args_json)?
        } else {
            Vec::new()
        };

        let result = net.call(&step.contract, &step.function, &parsed_args);

        let mut step_passed = true;

        match result {
            Ok(res) => {
                println!("  Result: {}", res);
                step_passed &= check_success(step, &res);
                step_passed &= check_error(step, &res);
                step_passed &= check_return(step, &res);
            }
            Err(e) => {
                println!(
                    "  {}",
                    Formatter::error(format!("✗ Dispatch failed: {}", e))
                );
                step_passed = false;
            }
        }

        if step_passed {
            println!(
                "{}",
                Formatter::success(format!("Step {} passed.\n", i + 1))
            );
        } else {
            println!(
                "{}",
                Formatter::warning(format!("Step {} failed.\n", i + 1))
            );
            all_passed = false;
            break; // Stop execution on first failure
        }
    }

    if all_passed {
        println!(
            "{}",
            Formatter::success("All scenario steps passed successfully!")
        );
        Ok(())
    } else {
        Err(HarnessError::ScenarioError("Scenario execution failed".into()).into())
    }
}

fn check_success(step: &ScenarioStep, result: &crate::net::value::ReturnValue) -> bool {
    let expected = match step.expect_success {
        Some(expected) => expected,
        None => return true,
    };
    match result.success_flag() {
        Some(actual) if actual == expected => {
            println!("  {}", Formatter::success("✓ Success flag assertion passed"));
            true
        }
        Some(actual) => {
            println!(
                "  {}",
                Formatter::error(format!(
                    "✗ Success flag assertion failed! Expected {}, got {}",
                    expected, actual
                ))
            );
            false
        }
        None => {
            println!(
                "  {}",
                Formatter::error(format!(
                    "✗ Success flag assertion failed! Expected {}, got a non-envelope value",
                    expected
                ))
            );
            false
        }
    }
}

fn check_error(step: &ScenarioStep, result: &crate::net::value::ReturnValue) -> bool {
    let expected = match step.expect_error {
        Some(expected) => expected,
        None => return true,
    };
    match result.error_code() {
        Some(actual) if actual == expected => {
            println!("  {}", Formatter::success("✓ Error code assertion passed"));
            true
        }
        actual => {
            println!(
                "  {}",
                Formatter::error(format!(
                    "✗ Error code assertion failed! Expected {}, got {:?}",
                    expected, actual
                ))
            );
            false
        }
    }
}

fn check_return(step: &ScenarioStep, result: &crate::net::value::ReturnValue) -> bool {
    let expected = match &step.expect_return {
        Some(expected) => expected,
        None => return true,
    };
    let rendered = result.to_string();
    if rendered.trim() == expected.trim() {
        println!(
            "  {}",
            Formatter::success("✓ Return value assertion passed")
        );
        true
    } else {
        println!(
            "  {}",
            Formatter::error(format!(
                "✗ Return value assertion failed! Expected '{}', got '{}'",
                expected, rendered
            ))
        );
        false
    }
}
