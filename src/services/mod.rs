//! Business logic layer
//!
//! Services combine the store with the in-memory session structures to
//! implement the ledger's user-facing actions.

pub mod ledger;

pub use ledger::LedgerSession;
