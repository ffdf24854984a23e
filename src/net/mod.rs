//! The mock network: contract catalog, chain globals and stub-backed
//! call dispatch.

pub mod builtin;
pub mod contract;
pub mod filter;
pub mod registry;
pub mod value;

use crate::net::contract::ContractDecl;
use crate::net::registry::{CallRecord, StubRegistry, StubSpec};
use crate::net::value::{ReturnValue, Value};
use crate::{logging, HarnessError, Result};
use std::collections::HashMap;
use tracing::warn;

/// A mock Clarity network instance.
///
/// Holds the declared contracts, the stub registry and the chain
/// globals. Dispatch validates a call against a declaration, resolves it
/// through the registry and records it; no contract code ever runs.
#[derive(Debug, Clone, Default)]
pub struct MockNet {
    contracts: HashMap<String, ContractDecl>,
    registry: StubRegistry,
    height: u64,
}

impl MockNet {
    /// An empty net with no declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// A net pre-loaded with the built-in energy grid declarations.
    pub fn with_builtin() -> Self {
        let mut net = Self::new();
        for decl in builtin::all() {
            // Built-in declarations are statically valid.
            net.register_contract(decl)
                .expect("built-in declaration must validate");
        }
        net
    }

    /// Register a contract declaration. A duplicate name replaces the
    /// prior declaration.
    pub fn register_contract(&mut self, decl: ContractDecl) -> Result<()> {
        decl.validate()?;
        logging::log_contract_registered(&decl.name, decl.functions.len());
        self.contracts.insert(decl.name.clone(), decl);
        Ok(())
    }

    /// Look up a declaration by name.
    pub fn contract(&self, name: &str) -> Option<&ContractDecl> {
        self.contracts.get(name)
    }

    /// Declared contracts in name order.
    pub fn contracts(&self) -> Vec<&ContractDecl> {
        let mut decls: Vec<&ContractDecl> = self.contracts.values().collect();
        decls.sort_by(|a, b| a.name.cmp(&b.name));
        decls
    }

    /// Configure a canned return for a declared entry point.
    pub fn stub(
        &mut self,
        contract: &str,
        function: &str,
        return_value: ReturnValue,
    ) -> Result<()> {
        self.check_declared(contract, function)?;
        logging::log_stub_installed(contract, function, &return_value.to_string());
        self.registry.install(StubSpec {
            key: registry::StubKey {
                contract: contract.to_string(),
                function: function.to_string(),
            },
            return_raw: return_value.to_json().to_string(),
            return_value,
        });
        Ok(())
    }

    /// Configure a stub from a `contract.function=RETURN_JSON` spec string.
    pub fn stub_spec(&mut self, spec: &str) -> Result<()> {
        let parsed = StubRegistry::parse_spec(spec)?;
        self.check_declared(&parsed.key.contract, &parsed.key.function)?;
        logging::log_stub_installed(
            &parsed.key.contract,
            &parsed.key.function,
            &parsed.return_value.to_string(),
        );
        self.registry.install(parsed);
        Ok(())
    }

    /// Dispatch a call.
    ///
    /// Validation order: contract declared, function declared, argument
    /// count matches the declared arity. A configured stub yields its
    /// canned value; a declared but unstubbed entry point yields
    /// [`ReturnValue::Undefined`]. Either way the call lands in the log.
    pub fn call(&mut self, contract: &str, function: &str, args: &[Value]) -> Result<ReturnValue> {
        let decl = self
            .contracts
            .get(contract)
            .ok_or_else(|| HarnessError::UnknownContract(contract.to_string()))?;
        let function_decl =
            decl.get(function)
                .ok_or_else(|| HarnessError::UnknownFunction {
                    contract: contract.to_string(),
                    function: function.to_string(),
                })?;
        if function_decl.arity != args.len() {
            return Err(HarnessError::ArityMismatch {
                contract: contract.to_string(),
                function: function.to_string(),
                expected: function_decl.arity,
                actual: args.len(),
            }
            .into());
        }

        logging::log_dispatch(contract, function, args.len());
        let resolved = self
            .registry
            .resolve_call(contract, function, args.len(), self.height);
        match resolved {
            Some(return_value) => {
                logging::log_dispatch_complete(&return_value.to_string());
                Ok(return_value)
            }
            None => {
                warn!(contract, function, "No stub configured for call");
                Ok(ReturnValue::Undefined)
            }
        }
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[CallRecord] {
        self.registry.calls()
    }

    /// Whether an entry point currently has a configured stub.
    pub fn is_stubbed(&self, contract: &str, function: &str) -> bool {
        self.registry.is_stubbed(contract, function)
    }

    /// Clear configured stubs and the call log, keeping declarations and
    /// chain height.
    pub fn reset(&mut self) {
        logging::log_reset();
        self.registry.reset();
    }

    /// Current simulated block height.
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Advance the simulated block height. Height only ever grows.
    pub fn advance_height(&mut self, blocks: u64) {
        self.height = self.height.saturating_add(blocks);
        logging::log_height_advanced(self.height);
    }

    fn check_declared(&self, contract: &str, function: &str) -> Result<()> {
        let decl = self
            .contracts
            .get(contract)
            .ok_or_else(|| HarnessError::UnknownContract(contract.to_string()))?;
        if decl.get(function).is_none() {
            return Err(HarnessError::UnknownFunction {
                contract: contract.to_string(),
                function: function.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
