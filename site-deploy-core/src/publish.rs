//! Object publisher: converts every file under the source directory into a
//! stored object with derived metadata.
//!
//! All uploads for a run are launched at once and awaited together; the
//! publisher succeeds only if every upload succeeded. On failure the first
//! error is surfaced after every task has settled: in-flight uploads are
//! not cancelled and already-stored objects are not removed.

use std::path::Path;

use futures::future::join_all;
use tracing::{error, info};

use crate::config::DeployConfig;
use crate::contract::{ObjectStore, PutRequest};
use crate::error::DeployError;
use crate::object::{self, CachePolicy};
use crate::walk;

/// Confirmation line printed to stdout as each upload completes.
pub fn confirmation_line(key: &str) -> String {
    format!(">> {key}")
}

/// Metadata of one successfully stored object.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ObjectReport {
    pub key: String,
    pub content_type: String,
    pub cache_control: String,
}

/// Walk the configured source directory and upload every file concurrently.
///
/// Returns one [`ObjectReport`] per stored object, in walk order. Fails if
/// the walk fails or any single upload fails; there are no retries.
pub async fn publish_dir<S>(
    store: &S,
    config: &DeployConfig,
) -> Result<Vec<ObjectReport>, DeployError>
where
    S: ObjectStore,
{
    let files = walk::walk_files(&config.source_dir)?;
    info!(
        bucket = %config.bucket,
        files = files.len(),
        "Publishing build directory"
    );

    // Launch every upload before awaiting any of them; join_all resolves
    // only once all have settled, so a failure never short-circuits work
    // that is already in flight.
    let uploads = files.iter().map(|path| upload_file(store, config, path));
    let results = join_all(uploads).await;

    let mut reports = Vec::with_capacity(results.len());
    for result in results {
        reports.push(result?);
    }
    info!(uploaded = reports.len(), "All objects published");
    Ok(reports)
}

async fn upload_file<S>(
    store: &S,
    config: &DeployConfig,
    path: &Path,
) -> Result<ObjectReport, DeployError>
where
    S: ObjectStore,
{
    let key = object::storage_key(&config.source_dir, path)?;
    let body = tokio::fs::read(path)
        .await
        .map_err(|source| DeployError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let content_type = object::content_type(path);
    let cache_control = CachePolicy::for_key(&key).header_value();

    let req = PutRequest {
        bucket: &config.bucket,
        key: &key,
        body,
        content_type,
        cache_control,
    };
    if let Err(source) = store.put_object(req).await {
        error!(key = %key, error = ?source, "Upload failed");
        return Err(DeployError::Upload { key, source });
    }

    println!("{}", confirmation_line(&key));
    info!(key = %key, content_type, cache_control, "Uploaded object");
    Ok(ObjectReport {
        key,
        content_type: content_type.to_string(),
        cache_control: cache_control.to_string(),
    })
}
