//! # licita-core
//!
//! Core types shared across the LicitaDoc client crates:
//! - The decoded user [`identity::Identity`]
//! - Company and membership types with legacy-field reconciliation
//! - Document and catalog (category/type) wire types
//! - Vault grouping by legal category and validity
//! - Cross-cutting error types

pub mod company;
pub mod document;
pub mod errors;
pub mod identity;
pub mod vault;

pub use errors::CoreError;
pub use identity::Identity;
