//! Contract declaration schema
//!
//! A declaration names a contract and its entry points with fixed
//! arities. Declarations carry no behavior: the harness validates calls
//! against them and resolves the rest through the stub registry.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for declaration validation
#[derive(Debug, Error, Diagnostic)]
pub enum DeclError {
    #[error("Invalid contract name: {0}")]
    InvalidContractName(String),

    #[error("Invalid function name: {0}")]
    InvalidFunctionName(String),

    #[error("Duplicate function declaration: {0}")]
    DuplicateFunction(String),
}

/// A declared entry point: name plus positional argument count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub arity: usize,
}

/// A declared contract: a kebab-case name and its entry points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDecl {
    pub name: String,
    pub functions: Vec<FunctionDecl>,
}

impl ContractDecl {
    /// Create an empty declaration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    /// Declare an entry point (builder style)
    pub fn function(mut self, name: impl Into<String>, arity: usize) -> Self {
        self.functions.push(FunctionDecl {
            name: name.into(),
            arity,
        });
        self
    }

    /// Find an entry point by name
    pub fn get(&self, function: &str) -> Option<&FunctionDecl> {
        self.functions.iter().find(|f| f.name == function)
    }

    /// Validate the declaration
    pub fn validate(&self) -> crate::Result<()> {
        if !is_kebab_case(&self.name) {
            return Err(DeclError::InvalidContractName(self.name.clone()).into());
        }

        let mut seen = std::collections::HashSet::new();
        for function in &self.functions {
            if !is_kebab_case(&function.name) {
                return Err(DeclError::InvalidFunctionName(function.name.clone()).into());
            }
            if !seen.insert(&function.name) {
                return Err(DeclError::DuplicateFunction(function.name.clone()).into());
            }
        }

        Ok(())
    }
}

fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
