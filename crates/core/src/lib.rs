//! Cosmic Shop Core - Shared catalog types.
//!
//! This crate provides the domain types the storefront derives its view
//! models from.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here is a deterministic function of its inputs.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, slugs, prices, ratings, and stock status
//! - [`text`] - Display label helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod text;
pub mod types;

pub use types::*;
