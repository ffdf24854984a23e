//! Built-in contract declarations for the simulated energy grid scheme.
//!
//! These mirror the entry points the contracts expose on chain. Arities
//! count explicit positional arguments; the sending principal is implicit
//! and never passed.

use crate::net::contract::ContractDecl;

/// Caller is not authorized for the entry point.
pub const ERR_NOT_AUTHORIZED: u32 = 403;
/// Referenced record (prosumer, grid-load bucket) does not exist.
pub const ERR_NOT_FOUND: u32 = 404;
/// Token sender balance cannot cover the transfer.
pub const ERR_INSUFFICIENT_BALANCE: u32 = 1;

/// Prosumer registration, metering and settlement.
pub fn energy_trading() -> ContractDecl {
    ContractDecl::new("energy-trading")
        .function("register-prosumer", 0)
        .function("record-energy-production", 1)
        .function("record-energy-consumption", 1)
        .function("settle-energy-balance", 0)
        .function("get-energy-balance", 1)
        .function("update-energy-price", 1)
}

/// Reward token minted for grid-friendly behavior.
pub fn incentive_token() -> ContractDecl {
    ContractDecl::new("incentive-token")
        .function("mint", 2)
        .function("transfer", 3)
        .function("get-balance", 1)
}

/// Per-timestamp grid load accounting and demand response.
pub fn load_balancing() -> ContractDecl {
    ContractDecl::new("load-balancing")
        .function("update-grid-load", 3)
        .function("get-grid-load", 1)
        .function("trigger-demand-response", 2)
}

/// All built-in declarations.
pub fn all() -> Vec<ContractDecl> {
    vec![energy_trading(), incentive_token(), load_balancing()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_declarations_validate() {
        for decl in all() {
            decl.validate().unwrap();
        }
    }

    #[test]
    fn energy_trading_arities() {
        let decl = energy_trading();
        assert_eq!(decl.get("register-prosumer").unwrap().arity, 0);
        assert_eq!(decl.get("record-energy-production").unwrap().arity, 1);
        assert_eq!(decl.get("settle-energy-balance").unwrap().arity, 0);
        assert_eq!(decl.get("get-energy-balance").unwrap().arity, 1);
        assert_eq!(decl.get("update-energy-price").unwrap().arity, 1);
    }

    #[test]
    fn token_and_grid_arities() {
        assert_eq!(incentive_token().get("transfer").unwrap().arity, 3);
        assert_eq!(load_balancing().get("update-grid-load").unwrap().arity, 3);
        assert_eq!(
            load_balancing()
                .get("trigger-demand-response")
                .unwrap()
                .arity,
            2
        );
    }
}
