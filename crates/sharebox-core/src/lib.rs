//! Core types and trait definitions for the sharebox paste service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod share;
pub mod store;

pub use error::{Error, Result};
