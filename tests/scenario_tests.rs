use clarity_mocknet::cli::args::ScenarioArgs;
use clarity_mocknet::scenario::run_scenario;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_scenario(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("scenario.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn args(path: PathBuf) -> ScenarioArgs {
    ScenarioArgs {
        scenario: path,
        stub: Vec::new(),
        height: None,
    }
}

#[test]
fn scenario_with_passing_assertions_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        r#"
height = 100
stubs = ['energy-trading.register-prosumer={"success":true}']

[[steps]]
name = "Register"
contract = "energy-trading"
function = "register-prosumer"
expect_success = true

[[steps]]
name = "Settle with surplus"
contract = "energy-trading"
function = "settle-energy-balance"
advance_height = 10
stubs = ['energy-trading.settle-energy-balance={"success":true,"value":{"surplus":20,"payment":2000}}']
expect_success = true
expect_return = "(ok (tuple (payment u2000) (surplus u20)))"

[[steps]]
name = "Unregistered settle"
contract = "energy-trading"
function = "settle-energy-balance"
stubs = ['energy-trading.settle-energy-balance={"success":false,"error":404}']
expect_success = false
expect_error = 404
"#,
    );

    run_scenario(args(path)).unwrap();
}

#[test]
fn scenario_stops_on_failed_expectation() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        r#"
stubs = ['incentive-token.mint={"success":false,"error":403}']

[[steps]]
name = "Mint should fail this scenario"
contract = "incentive-token"
function = "mint"
args = '[100, "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"]'
expect_success = true
"#,
    );

    assert!(run_scenario(args(path)).is_err());
}

#[test]
fn scenario_fails_on_undeclared_contract() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        r#"
[[steps]]
contract = "carbon-credits"
function = "retire"
"#,
    );

    assert!(run_scenario(args(path)).is_err());
}

#[test]
fn extra_cli_stubs_apply_on_top_of_scenario_stubs() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        r#"
stubs = ['incentive-token.get-balance=0']

[[steps]]
contract = "incentive-token"
function = "get-balance"
args = '["ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"]'
expect_return = "u150"
"#,
    );

    let mut scenario_args = args(path);
    scenario_args.stub = vec!["incentive-token.get-balance=150".to_string()];

    run_scenario(scenario_args).unwrap();
}

#[test]
fn missing_scenario_file_is_a_file_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    assert!(run_scenario(args(path)).is_err());
}
