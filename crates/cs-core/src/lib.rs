//! # cs-core
//!
//! Core types and error taxonomy for certsync.
//!
//! This crate provides the types shared across all certsync crates:
//! - Entity structs for DNS records, scan entries, certificates and diff entries
//! - Scope and action enums
//! - The `Scoped<T>` public/private pair used end-to-end
//! - Cross-cutting error types
//! - Result types produced by reconciliation and classification

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod scoped;

pub use errors::CoreError;
pub use scoped::Scoped;

/// Result alias for operations that fail with [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
