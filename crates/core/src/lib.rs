//! Montage domain types and pure logic.
//!
//! Nothing in this crate touches the database or the network. The pricing
//! engine ([`pricing`]) is a pure function of an asset's field values and
//! its reel count; [`catalog`] holds the asset kind and input validation
//! used by the API before anything is stored.

pub mod catalog;
pub mod error;
pub mod pricing;
pub mod roles;
pub mod seed;
pub mod types;
