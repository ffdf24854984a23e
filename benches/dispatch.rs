use clarity_mocknet::net::registry::StubRegistry;
use clarity_mocknet::{MockNet, ReturnValue, Value};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_stub_spec_parsing(c: &mut Criterion) {
    c.bench_function("parse_stub_spec", |b| {
        b.iter(|| {
            StubRegistry::parse_spec(black_box(
                r#"energy-trading.settle-energy-balance={"success":true,"value":{"surplus":20,"payment":2000}}"#,
            ))
            .unwrap()
        })
    });
}

fn bench_dispatch_stubbed(c: &mut Criterion) {
    let mut net = MockNet::with_builtin();
    net.stub("incentive-token", "get-balance", ReturnValue::value(Value::Uint(150)))
        .unwrap();
    let args = vec![Value::Principal(
        "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".to_string(),
    )];

    c.bench_function("dispatch_stubbed_call", |b| {
        b.iter(|| {
            net.call(
                black_box("incentive-token"),
                black_box("get-balance"),
                black_box(&args),
            )
            .unwrap()
        })
    });
}

fn bench_dispatch_unstubbed(c: &mut Criterion) {
    let mut net = MockNet::with_builtin();

    c.bench_function("dispatch_unstubbed_call", |b| {
        b.iter(|| {
            net.call(
                black_box("energy-trading"),
                black_box("settle-energy-balance"),
                black_box(&[]),
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_stub_spec_parsing,
    bench_dispatch_stubbed,
    bench_dispatch_unstubbed
);
criterion_main!(benches);
