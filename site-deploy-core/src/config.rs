use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything a deploy run needs, resolved once at startup.
///
/// Construction and validation of the required fields happen at the CLI
/// boundary (environment variables); the pipeline only ever sees a complete
/// config passed by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Destination bucket for all uploaded objects.
    pub bucket: String,
    /// CloudFront distribution that fronts the bucket.
    pub distribution_id: String,
    /// Root of the local build output to publish.
    pub source_dir: PathBuf,
}

impl DeployConfig {
    pub fn trace_loaded(&self) {
        info!(
            bucket = %self.bucket,
            distribution_id = %self.distribution_id,
            source_dir = %self.source_dir.display(),
            "Loaded DeployConfig"
        );
        debug!(?self, "DeployConfig loaded (full debug)");
    }
}
