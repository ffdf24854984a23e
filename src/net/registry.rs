use crate::net::value::ReturnValue;
use crate::{HarnessError, Result};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct StubKey {
    pub contract: String,
    pub function: String,
}

#[derive(Clone, Debug)]
pub struct StubSpec {
    pub key: StubKey,
    pub return_raw: String,
    pub return_value: ReturnValue,
}

/// One dispatched call, stubbed or not.
#[derive(Clone, Debug, Serialize)]
pub struct CallRecord {
    pub contract: String,
    pub function: String,
    pub args_count: usize,
    pub height: u64,
    pub stubbed: bool,
    pub returned: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct StubRegistry {
    entries: HashMap<StubKey, StubSpec>,
    calls: Vec<CallRecord>,
}

impl StubRegistry {
    pub fn from_specs(specs: &[String]) -> Result<Self> {
        let mut entries = HashMap::with_capacity(specs.len());
        for spec in specs {
            let parsed = Self::parse_spec(spec)?;
            entries.insert(parsed.key.clone(), parsed);
        }
        Ok(Self {
            entries,
            calls: Vec::new(),
        })
    }

    pub fn install(&mut self, spec: StubSpec) {
        self.entries.insert(spec.key.clone(), spec);
    }

    pub fn is_stubbed(&self, contract: &str, function: &str) -> bool {
        self.entries.contains_key(&StubKey {
            contract: contract.to_string(),
            function: function.to_string(),
        })
    }

    /// Resolve a call against the configured stubs and record it.
    ///
    /// Returns the canned value when a stub matches. Unmatched calls are
    /// still recorded, with `stubbed: false`.
    pub fn resolve_call(
        &mut self,
        contract: &str,
        function: &str,
        args_count: usize,
        height: u64,
    ) -> Option<ReturnValue> {
        let key = StubKey {
            contract: contract.to_string(),
            function: function.to_string(),
        };
        if let Some(spec) = self.entries.get(&key) {
            self.calls.push(CallRecord {
                contract: contract.to_string(),
                function: function.to_string(),
                args_count,
                height,
                stubbed: true,
                returned: Some(spec.return_value.to_string()),
            });
            return Some(spec.return_value.clone());
        }
        self.calls.push(CallRecord {
            contract: contract.to_string(),
            function: function.to_string(),
            args_count,
            height,
            stubbed: false,
            returned: None,
        });
        None
    }

    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    /// Clear configured returns and the call log. Declarations live
    /// elsewhere and are untouched.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.calls.clear();
    }

    pub fn parse_spec(spec: &str) -> Result<StubSpec> {
        let (signature, return_raw) = spec.split_once('=').ok_or_else(|| {
            HarnessError::InvalidStubSpec(format!(
                "Invalid stub '{spec}'. Expected contract.function=RETURN_JSON"
            ))
        })?;
        let (contract, function) = signature.rsplit_once('.').ok_or_else(|| {
            HarnessError::InvalidStubSpec(format!(
                "Invalid stub signature '{signature}'. Expected contract.function"
            ))
        })?;
        let contract = contract.trim();
        let function = function.trim();
        let return_raw = return_raw.trim();
        if contract.is_empty() || function.is_empty() || return_raw.is_empty() {
            return Err(HarnessError::InvalidStubSpec(format!(
                "Invalid stub '{spec}'. Contract, function and return value are required"
            ))
            .into());
        }

        let return_value = ReturnValue::from_json_str(return_raw)
            .map_err(|e| HarnessError::InvalidStubSpec(format!("'{spec}': {e}")))?;

        Ok(StubSpec {
            key: StubKey {
                contract: contract.to_string(),
                function: function.to_string(),
            },
            return_raw: return_raw.to_string(),
            return_value,
        })
    }
}
