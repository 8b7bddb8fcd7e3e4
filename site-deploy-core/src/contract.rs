//! # contract: interfaces for object storage and edge-cache invalidation
//!
//! This module defines the two traits the deploy pipeline depends on,
//! [`ObjectStore`] for storing byte blobs under a key in a bucket and
//! [`EdgeCache`] for asking a CDN to discard cached copies of paths,
//! together with their plain-data request types.
//!
//! ## Interface & Extensibility
//! - Implement [`ObjectStore`] to target a storage provider (S3, MinIO, a
//!   local filesystem fake in tests).
//! - Implement [`EdgeCache`] to target an invalidation API (CloudFront, or a
//!   recording mock).
//! - All methods are async and return boxed error trait objects; implementors
//!   convert provider errors into those uniformly.
//!
//! ## Mocking & Testing
//! - Both traits are annotated for `mockall`, so consumers can generate
//!   deterministic mocks (`MockObjectStore`, `MockEdgeCache`) for unit and
//!   integration tests.

use async_trait::async_trait;

use mockall::automock;

/// Boxed error type shared by all contract methods.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One object upload: everything the store needs to issue a single PUT.
pub struct PutRequest<'a> {
    /// Destination bucket name.
    pub bucket: &'a str,
    /// Object key, relative to the bucket root (never starts with `/`).
    pub key: &'a str,
    /// Raw file contents.
    pub body: Vec<u8>,
    /// MIME type for the `Content-Type` header.
    pub content_type: &'a str,
    /// Value for the `Cache-Control` header.
    pub cache_control: &'a str,
}

/// One batch invalidation request against a CDN distribution.
#[derive(Debug, Clone)]
pub struct InvalidationRequest {
    /// Opaque distribution identifier supplied by configuration.
    pub distribution_id: String,
    /// Logical paths whose cached copies should be discarded.
    pub paths: Vec<String>,
    /// Unique-per-call token so the provider can deduplicate resubmissions.
    pub caller_reference: String,
}

/// Trait for storing objects in a bucket.
///
/// Implementors own transport, authentication and serialization; the
/// pipeline only supplies a complete [`PutRequest`]. Every stored object is
/// expected to be publicly readable.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store a single object. Succeeds only once the provider has accepted
    /// the full body and metadata.
    async fn put_object<'a>(&self, req: PutRequest<'a>) -> Result<(), BoxError>;
}

/// Trait for requesting edge-cache invalidation.
///
/// Success means the provider accepted the request; propagation to edge
/// nodes is asynchronous and outside this contract.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait EdgeCache: Send + Sync {
    /// Submit one invalidation batch covering the given paths.
    async fn create_invalidation(&self, req: InvalidationRequest) -> Result<(), BoxError>;
}
