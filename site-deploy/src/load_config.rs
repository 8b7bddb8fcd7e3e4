/// `load_config` module: resolves environment configuration into the internal `DeployConfig`.
///
/// This module is the only place where environment variables are read and mapped
/// to the strongly-typed config the pipeline consumes.
///
/// # Responsibilities
/// - Validate that AWS credentials are present before any client is built
/// - Require `DEPLOY_BUCKET` and `DEPLOY_DISTRIBUTION_ID`; default `DEPLOY_DIR` to `dist`
/// - Fail before any network activity: a missing value aborts the run here,
///   with a clear message naming the variable
/// - Acts as the adapter layer decoupling the process environment from the domain core
///
/// # Errors
/// All errors in this module use `anyhow::Error` for context-rich diagnostics, and are
/// surfaced at the CLI boundary.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use site_deploy_core::config::DeployConfig;
use tracing::{error, info};

/// Environment variable holding the destination bucket name.
pub const ENV_BUCKET: &str = "DEPLOY_BUCKET";
/// Environment variable holding the CloudFront distribution identifier.
pub const ENV_DISTRIBUTION_ID: &str = "DEPLOY_DISTRIBUTION_ID";
/// Environment variable overriding the source directory.
pub const ENV_SOURCE_DIR: &str = "DEPLOY_DIR";
/// Sentinel for the AWS credential chain; checked up front so a run without
/// credentials aborts before any work is attempted.
pub const ENV_AWS_ACCESS_KEY: &str = "AWS_ACCESS_KEY_ID";

/// Conventional build-output directory used when `DEPLOY_DIR` is unset.
pub const DEFAULT_SOURCE_DIR: &str = "dist";

/// Read and validate all required configuration from the environment.
pub fn load_config() -> Result<DeployConfig> {
    if env::var(ENV_AWS_ACCESS_KEY).is_err() {
        error!(var = ENV_AWS_ACCESS_KEY, "AWS credentials missing in environment");
        return Err(anyhow::anyhow!(
            "AWS env variables missing ({ENV_AWS_ACCESS_KEY})"
        ));
    }

    let bucket = match env::var(ENV_BUCKET) {
        Ok(v) => v,
        Err(_) => {
            error!(var = ENV_BUCKET, "Required env variable missing");
            return Err(anyhow::anyhow!("{ENV_BUCKET} env variable missing"));
        }
    };

    let distribution_id = match env::var(ENV_DISTRIBUTION_ID) {
        Ok(v) => v,
        Err(_) => {
            error!(var = ENV_DISTRIBUTION_ID, "Required env variable missing");
            return Err(anyhow::anyhow!("{ENV_DISTRIBUTION_ID} env variable missing"));
        }
    };

    let source_dir = env::var(ENV_SOURCE_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_DIR));

    let config = DeployConfig {
        bucket,
        distribution_id,
        source_dir,
    };
    info!("Environment configuration resolved");
    config.trace_loaded();
    Ok(config)
}
