//! Teaweb Core - Shared types library.
//!
//! This crate provides the common types used across the teaweb components:
//! - `server` - JSON API binary serving the catalog and checkout
//! - `integration-tests` - Workspace-level tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! Values of these types are valid by construction: an [`Email`] has been
//! normalized and shape-checked, a [`Quantity`] is within the orderable
//! range, an [`OrderId`] is an opaque token. Code downstream never
//! re-validates them.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, quantities, and order IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
