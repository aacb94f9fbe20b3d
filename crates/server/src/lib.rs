//! Teaweb server library.
//!
//! This crate provides the storefront backend as a library, allowing the
//! router and its collaborators to be exercised from integration tests
//! without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod quote;
pub mod routes;
pub mod state;
