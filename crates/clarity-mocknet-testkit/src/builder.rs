use clarity_mocknet::net::contract::ContractDecl;
use clarity_mocknet::net::value::ReturnValue;
use clarity_mocknet::{MockNet, Result};
use serde_json::Value as JsonValue;

/// Fluent construction of a [`MockNet`] for tests.
///
/// Starts from the built-in energy grid declarations; additional
/// contracts and stubs layer on top.
pub struct MockNetBuilder {
    net: MockNet,
    pending: Vec<PendingStub>,
}

enum PendingStub {
    Spec(String),
    Return {
        contract: String,
        function: String,
        return_value: ReturnValue,
    },
}

impl Default for MockNetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNetBuilder {
    pub fn new() -> Self {
        Self::from_net(MockNet::with_builtin())
    }

    /// Build on top of an existing net (e.g. one without the built-in
    /// declarations).
    pub fn from_net(net: MockNet) -> Self {
        Self {
            net,
            pending: Vec::new(),
        }
    }

    pub fn with_contract(mut self, decl: ContractDecl) -> Result<Self> {
        self.net.register_contract(decl)?;
        Ok(self)
    }

    pub fn with_height(mut self, height: u64) -> Self {
        self.net.advance_height(height);
        self
    }

    pub fn with_stub(
        mut self,
        contract: &str,
        function: &str,
        return_value: ReturnValue,
    ) -> Self {
        self.pending.push(PendingStub::Return {
            contract: contract.to_string(),
            function: function.to_string(),
            return_value,
        });
        self
    }

    /// Configure a stub from a JSON payload, the shape fixtures are
    /// written in.
    pub fn with_stub_json(self, contract: &str, function: &str, json: &JsonValue) -> Result<Self> {
        let return_value = ReturnValue::from_json(json)
            .map_err(|e| miette::miette!("invalid stub payload for {contract}.{function}: {e}"))?;
        Ok(self.with_stub(contract, function, return_value))
    }

    /// Configure a stub from a `contract.function=RETURN_JSON` spec string.
    pub fn with_stub_spec(mut self, spec: &str) -> Self {
        self.pending.push(PendingStub::Spec(spec.to_string()));
        self
    }

    /// Install the pending stubs and hand over the net.
    ///
    /// Stubs install after every contract declaration, so declaration
    /// order never matters.
    pub fn build(mut self) -> Result<MockNet> {
        let pending = std::mem::take(&mut self.pending);
        for pending in pending {
            match pending {
                PendingStub::Spec(spec) => self.net.stub_spec(&spec)?,
                PendingStub::Return {
                    contract,
                    function,
                    return_value,
                } => self.net.stub(&contract, &function, return_value)?,
            }
        }
        Ok(self.net)
    }
}
