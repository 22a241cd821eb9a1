//! Core layer - typed face API operations built on the request executor.

pub mod services;
