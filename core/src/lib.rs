//! Core simulation logic for the storefront: synthetic customer
//! generation, identity-keyed registration ledgers, and the per-day
//! metrics record.
//!
//! All state is in-memory and owned by [`shopfront::Shopfront`]; the
//! shell in `tools/` drives it and renders the results.

pub mod config;
pub mod customer;
pub mod error;
pub mod generator;
pub mod ledger;
pub mod metrics;
pub mod name_generator;
pub mod phone_generator;
pub mod rng;
pub mod shopfront;
pub mod types;
