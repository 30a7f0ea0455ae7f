//! Conversions between the mapping form and the wire messages.
//!
//! Each resource kind gets an explicit pair of conversions; the key sets and
//! the conditional inclusion rules are part of the contract, so nothing here is
//! derived by reflection.

pub mod common;
pub mod entries;
pub mod sinks;
