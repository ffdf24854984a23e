use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clarity-mocknet"))
}

#[test]
fn test_help_command() {
    cmd().arg("--help").assert().success();
}

#[test]
fn test_version_command() {
    cmd().arg("--version").assert().success();
}

#[test]
fn test_call_help_lists_stub_flags() {
    cmd()
        .arg("call")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--stub"))
        .stdout(predicate::str::contains("--call-filter"))
        .stdout(predicate::str::contains("--trace-out"));
}

#[test]
fn call_with_stub_prints_canned_return() {
    cmd()
        .arg("call")
        .arg("--contract")
        .arg("energy-trading")
        .arg("--function")
        .arg("register-prosumer")
        .arg("--stub")
        .arg(r#"energy-trading.register-prosumer={"success":true}"#)
        .arg("--no-history")
        .assert()
        .success()
        .stdout(predicate::str::contains("(ok true)"));
}

#[test]
fn call_without_stub_prints_undefined() {
    cmd()
        .arg("call")
        .arg("--contract")
        .arg("energy-trading")
        .arg("--function")
        .arg("settle-energy-balance")
        .arg("--no-history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: none"));
}

#[test]
fn call_against_unknown_contract_fails() {
    cmd()
        .arg("call")
        .arg("--contract")
        .arg("carbon-credits")
        .arg("--function")
        .arg("retire")
        .arg("--no-history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown contract"));
}

#[test]
fn call_with_error_envelope_renders_code() {
    cmd()
        .arg("call")
        .arg("--contract")
        .arg("incentive-token")
        .arg("--function")
        .arg("transfer")
        .arg("--args")
        .arg(r#"[1000000, "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM", "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"]"#)
        .arg("--stub")
        .arg(r#"incentive-token.transfer={"success":false,"error":1}"#)
        .arg("--no-history")
        .assert()
        .success()
        .stdout(predicate::str::contains("(err u1)"));
}

#[test]
fn call_show_calls_prints_the_log() {
    cmd()
        .arg("call")
        .arg("--contract")
        .arg("incentive-token")
        .arg("--function")
        .arg("get-balance")
        .arg("--args")
        .arg(r#"["ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"]"#)
        .arg("--stub")
        .arg("incentive-token.get-balance=150")
        .arg("--show-calls")
        .arg("--no-history")
        .assert()
        .success()
        .stdout(predicate::str::contains("incentive-token.get-balance args=1"));
}

#[test]
fn call_trace_out_writes_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let trace_path = dir.path().join("trace.json");

    cmd()
        .arg("call")
        .arg("--contract")
        .arg("load-balancing")
        .arg("--function")
        .arg("get-grid-load")
        .arg("--args")
        .arg("[1625097600]")
        .arg("--no-history")
        .arg("--trace-out")
        .arg(&trace_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&trace_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed[0]["contract"], "load-balancing");
    assert_eq!(parsed[0]["stubbed"], false);
}

#[test]
fn contracts_lists_builtin_declarations() {
    cmd()
        .arg("contracts")
        .assert()
        .success()
        .stdout(predicate::str::contains("energy-trading"))
        .stdout(predicate::str::contains("incentive-token"))
        .stdout(predicate::str::contains("load-balancing"));
}

#[test]
fn contracts_functions_shows_arities() {
    cmd()
        .arg("contracts")
        .arg("--functions")
        .assert()
        .success()
        .stdout(predicate::str::contains("transfer (3 args)"))
        .stdout(predicate::str::contains("register-prosumer (0 args)"));
}

#[test]
fn contracts_errors_shows_code_table() {
    cmd()
        .arg("contracts")
        .arg("--errors")
        .assert()
        .success()
        .stdout(predicate::str::contains("403"))
        .stdout(predicate::str::contains("404"))
        .stdout(predicate::str::contains("insufficient balance"));
}

#[test]
fn scenario_runs_from_the_cli() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("scenario.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        br#"
stubs = ['load-balancing.trigger-demand-response={"success":true}']

[[steps]]
name = "Trigger"
contract = "load-balancing"
function = "trigger-demand-response"
args = '[1625097600, 100]'
expect_success = true
"#,
    )
    .unwrap();

    cmd()
        .arg("scenario")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All scenario steps passed"));
}

#[test]
fn invalid_stub_spec_fails_with_guidance() {
    cmd()
        .arg("call")
        .arg("--contract")
        .arg("energy-trading")
        .arg("--function")
        .arg("register-prosumer")
        .arg("--stub")
        .arg("not-a-spec")
        .arg("--no-history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid stub"));
}

#[test]
fn completions_generate_for_bash() {
    cmd()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("clarity-mocknet"));
}
