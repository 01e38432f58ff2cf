//! # linkrank-core
//!
//! Shared error types for the linkrank crates.
//!
//! This crate has no internal linkrank dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias

#![forbid(unsafe_code)]

pub mod error;

pub use error::{Error, Result};
