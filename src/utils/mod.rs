//! Utils module - Shared utilities and helpers
//!
//! Helpers used by both the request executor and the typed face operations.

/// Error conversions and error envelope decoding
pub mod error_helpers;

/// Configuration value validation
pub mod validation;
