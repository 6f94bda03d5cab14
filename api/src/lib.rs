//! Axum-facing plumbing for Murmur endpoints.
//!
//! This crate does not ship a router or a server: it provides the query
//! extractor, error type, and response envelope every Murmur HTTP handler
//! composes with the list-query core.

pub mod application;
