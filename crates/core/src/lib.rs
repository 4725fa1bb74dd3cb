//! Shared primitives for the SGS crypto toolkit.
//!
//! This crate provides:
//! - A single error taxonomy used by the hashing and signing crates
//! - Constant-time comparison for secret-bearing values
//! - The reserved configuration struct both components accept

#![warn(missing_docs)]

mod config;
mod error;
mod timing;

pub use config::CryptoConfig;
pub use error::{CryptoError, Result};
pub use timing::secure_compare;
