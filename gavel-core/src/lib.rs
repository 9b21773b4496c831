#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the auction lifecycle system.
///
/// The models in this module are data structures with minimal business logic,
/// following the principles of the hexagonal architecture to separate domain
/// entities from their persistence and processing implementations.
pub mod models;

/// Interface traits for the auction lifecycle system.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the closing engine and the
/// storage backend without specifying implementation details, so that tests
/// can substitute an in-memory store and deployments can pick their database.
pub mod ports;
