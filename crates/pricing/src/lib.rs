//! Quote calculation module.
//!
//! This crate contains the pricing rules for the storefront, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage): the
//! settlement-rate configuration and the quote calculator that converts a
//! region-local list price into a settlement-currency breakdown.

pub mod quote;
pub mod rates;

pub use quote::{Quote, QuoteError, SERVICE_FEE_RATE, compute_quote};
pub use rates::{Rate, RateTable, settlement_rates};
