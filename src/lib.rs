//! # face-client
//!
//! Client library for the Project Oxford face API: detect faces, verify, identify,
//! group and find similar faces, and manage the person groups used for recognition.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use face_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> face_client::Result<()> {
//!     // Reads FACE_SUBSCRIPTION_KEY (and optionally FACE_API_ENDPOINT)
//!     let client = FaceServiceClient::from_env()?;
//!
//!     let faces = client
//!         .detect_url("https://example.com/photo.jpg", DetectOptions::all())
//!         .await?;
//!
//!     if let [first, second, ..] = faces.as_slice() {
//!         let result = client.verify(first.face_id, second.face_id).await?;
//!         println!("identical: {}", result.is_identical);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Core Layer                 │  FaceService / PersonGroupService operations
//! ├─────────────────────────────────────┤
//! │           API Layer                 │  RequestExecutor, Params, contracts
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  Error decoding, validation
//! └─────────────────────────────────────┘
//! ```
//!
//! Every operation is exactly one HTTP request. Failures of any kind surface as
//! [`ClientError`]; there are no retries.

pub use error::ClientError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use face_client::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::ClientError;

    // Configuration
    pub use crate::config::ClientConfig;

    // Client and operations
    pub use crate::core::services::face_service::FaceServiceClient;
    pub use crate::core::services::traits::{FaceService, PersonGroupService};

    // Contracts
    pub use crate::api::models::{
        CreatePersonResult, DetectOptions, Face, GroupResult, IdentifyResult, Person,
        PersonFace, PersonGroup, SimilarFace, TrainingState, TrainingStatus, VerifyResult,
    };
}

/// API layer - request executor, parameter sets and contracts.
pub mod api;

/// Client configuration and credentials.
pub mod config;

/// Business logic layer - typed face operations.
pub mod core;

pub mod error;

/// Utilities layer - error conversions and validation.
pub mod utils;

/// Convenient Result type alias using [`ClientError`].
pub type Result<T> = std::result::Result<T, ClientError>;
