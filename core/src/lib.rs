//! Core business logic library for Murmur.
//!
//! Everything a Murmur endpoint needs to turn loose list-request query
//! parameters into a storage directive and a paginated response lives under
//! [`domain`]. The crate is storage-agnostic: the actual database access
//! happens behind the [`domain::listing::ports::ListStore`] port.

pub mod domain;
