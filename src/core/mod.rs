//! Foundational types shared across the engine: node identifiers,
//! net-energy balances, token wallets, and the trade ledger.

pub mod energy;
pub mod node;
pub mod trade;
pub mod wallet;
