use clarity_mocknet::net::contract::ContractDecl;
use clarity_mocknet::{ReturnValue, Value};
use clarity_mocknet_testkit::{CallAssertions, MockNetBuilder};
use serde_json::json;

#[test]
fn builder_configures_stubs_and_height() {
    let mut net = MockNetBuilder::new()
        .with_height(100)
        .with_stub("energy-trading", "register-prosumer", ReturnValue::ok())
        .with_stub_spec(r#"incentive-token.get-balance=150"#)
        .build()
        .unwrap();

    let result = net.call("energy-trading", "register-prosumer", &[]).unwrap();
    assert_eq!(result, ReturnValue::ok());

    let balance = net
        .call(
            "incentive-token",
            "get-balance",
            &[Value::Principal(
                "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".to_string(),
            )],
        )
        .unwrap();
    assert_eq!(balance, ReturnValue::Value(Value::Uint(150)));

    let assertions = CallAssertions::new(&net);
    assertions.assert_called("energy-trading", "register-prosumer");
    assertions.assert_call_count("incentive-token", "get-balance", 1);
    assertions.assert_stubbed("incentive-token", "get-balance");
    assertions.assert_height(100);
}

#[test]
fn builder_accepts_json_payloads() {
    let mut net = MockNetBuilder::new()
        .with_stub_json(
            "energy-trading",
            "settle-energy-balance",
            &json!({"success": true, "value": {"surplus": 20, "payment": 2000}}),
        )
        .unwrap()
        .build()
        .unwrap();

    let result = net
        .call("energy-trading", "settle-energy-balance", &[])
        .unwrap();
    assert_eq!(result.success_flag(), Some(true));
}

#[test]
fn builder_registers_custom_contracts_before_stubs_install() {
    let decl = ContractDecl::new("carbon-credits").function("retire", 1);
    let mut net = MockNetBuilder::new()
        .with_stub_spec(r#"carbon-credits.retire={"success":true}"#)
        .with_contract(decl)
        .unwrap()
        .build()
        .unwrap();

    let result = net
        .call("carbon-credits", "retire", &[Value::Uint(5)])
        .unwrap();
    assert_eq!(result.success_flag(), Some(true));
}

#[test]
fn builder_rejects_stub_for_undeclared_contract() {
    let result = MockNetBuilder::new()
        .with_stub_spec(r#"carbon-credits.retire={"success":true}"#)
        .build();
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "expected a call")]
fn assert_called_panics_when_never_dispatched() {
    let net = MockNetBuilder::new().build().unwrap();
    CallAssertions::new(&net).assert_called("incentive-token", "mint");
}
