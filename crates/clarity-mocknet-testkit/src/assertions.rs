use clarity_mocknet::MockNet;

/// Panicking assertion helpers over a net's call log, for use in tests.
pub struct CallAssertions<'a> {
    net: &'a MockNet,
}

impl<'a> CallAssertions<'a> {
    pub fn new(net: &'a MockNet) -> Self {
        Self { net }
    }

    /// Assert that the entry point was dispatched at least once.
    pub fn assert_called(&self, contract: &str, function: &str) {
        assert!(
            self.net
                .calls()
                .iter()
                .any(|c| c.contract == contract && c.function == function),
            "expected a call to {contract}.{function}, call log: {:?}",
            self.net.calls()
        );
    }

    /// Assert the number of dispatches the entry point received.
    pub fn assert_call_count(&self, contract: &str, function: &str, expected: usize) {
        let actual = self
            .net
            .calls()
            .iter()
            .filter(|c| c.contract == contract && c.function == function)
            .count();
        assert_eq!(
            actual, expected,
            "expected {expected} call(s) to {contract}.{function}, got {actual}"
        );
    }

    /// Assert that every dispatch to the entry point resolved against a
    /// configured stub.
    pub fn assert_stubbed(&self, contract: &str, function: &str) {
        self.assert_called(contract, function);
        assert!(
            self.net
                .calls()
                .iter()
                .filter(|c| c.contract == contract && c.function == function)
                .all(|c| c.stubbed),
            "call to {contract}.{function} fell through to the unstubbed default"
        );
    }

    /// Assert the current simulated block height.
    pub fn assert_height(&self, expected: u64) {
        assert_eq!(
            self.net.height(),
            expected,
            "expected block height {expected}, got {}",
            self.net.height()
        );
    }
}
