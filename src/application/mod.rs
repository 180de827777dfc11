//! Application layer orchestrating the ledger.
//!
//! This module defines the `Bank` engine, the primary entry point for
//! registering customers, opening accounts and executing transactions
//! against the domain stores.

pub mod bank;
