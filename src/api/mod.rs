//! API layer - request execution, parameter sets and response contracts.

/// Request executor: URL construction, body encoding and error decoding
pub mod client;

/// Response contracts returned by the service
pub mod models;

/// Heterogeneous parameter sets for query strings and request bodies
pub mod params;
