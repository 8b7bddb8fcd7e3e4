//! High-level pipeline: publish the build directory, then invalidate the
//! edge cache.
//!
//! The two phases are strictly ordered: the invalidation request is issued
//! only after every upload has settled successfully. If publishing fails the
//! invalidator is never called; if invalidation fails the error makes clear
//! that content was uploaded but caches were not cleared.
//!
//! # Major Types
//! - [`DeployReport`]: what was uploaded and under which caller reference
//!
//! # Callable From
//! - Used by the CLI crate and integration tests; expects concrete
//!   [`ObjectStore`] and [`EdgeCache`] implementations.

use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::DeployConfig;
use crate::contract::{EdgeCache, InvalidationRequest, ObjectStore};
use crate::error::DeployError;
use crate::publish::{publish_dir, ObjectReport};

/// Logical paths invalidated after every deploy: the site root and its
/// index document. All other assets are immutable and need no invalidation.
pub const INVALIDATION_PATHS: [&str; 2] = ["/", "/index.html"];

/// Outcome of a successful deploy run.
#[derive(Debug, serde::Serialize)]
pub struct DeployReport {
    pub objects: Vec<ObjectReport>,
    pub caller_reference: String,
}

/// Run the full deploy: upload all files, then request invalidation.
pub async fn deploy<S, E>(
    config: &DeployConfig,
    store: &S,
    cache: &E,
) -> Result<DeployReport, DeployError>
where
    S: ObjectStore,
    E: EdgeCache,
{
    info!("Starting deploy pipeline");
    let objects = publish_dir(store, config).await?;

    // Fresh token per run; practical uniqueness is enough for the provider
    // to group retried submissions.
    let caller_reference = Uuid::new_v4().to_string();
    let request = InvalidationRequest {
        distribution_id: config.distribution_id.clone(),
        paths: INVALIDATION_PATHS.iter().map(|p| p.to_string()).collect(),
        caller_reference: caller_reference.clone(),
    };
    info!(
        distribution_id = %config.distribution_id,
        caller_reference = %caller_reference,
        "Requesting edge-cache invalidation"
    );
    if let Err(source) = cache.create_invalidation(request).await {
        error!(error = ?source, "Invalidation request failed after successful upload");
        return Err(DeployError::Invalidation { source });
    }

    let report = DeployReport {
        objects,
        caller_reference,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => debug!(json = %json, "Deploy report"),
        Err(e) => error!(error = ?e, "Failed to serialize deploy report"),
    }
    Ok(report)
}
