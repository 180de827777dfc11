//! An in-memory banking ledger: customers, their accounts, and the
//! deposit/withdrawal transactions applied to them.
//!
//! `domain` holds the entities and the withdrawal policy, `application` the
//! orchestrating `Bank` engine, `infrastructure` the in-memory stores behind
//! the domain ports, and `interfaces` the CSV boundary.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
