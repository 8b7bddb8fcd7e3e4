///
/// This module implements the CLI interface for site-deploy—handling argument
/// parsing, the main entrypoint, and user-visible output.
///
/// All core business logic (tree walk, metadata derivation, publish pipeline)
/// lives in the [`site-deploy-core`] crate. This module is strictly for CLI
/// glue and orchestration.
///
/// ## Features
/// - Entry struct [`Cli`]: configuration is environment-driven, so no flags
///   beyond the generated `--help`/`--version`.
/// - Async entrypoint (`run`) for programmatic invocation and integration testing.
/// - Logging, tracing, and structured error output at CLI level.
///
/// ## How To Use
/// - For command-line users: set `DEPLOY_BUCKET`, `DEPLOY_DISTRIBUTION_ID`
///   and AWS credentials, optionally `DEPLOY_DIR`, then run `site-deploy`.
/// - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
///
/// ---
///
/// See crate root docs and [`site-deploy-core`] for overall architecture.
///
/// [`site-deploy-core`]: ../../site-deploy-core/
/// [`Cli`]: struct.Cli.html
/// [`run`]: fn.run.html
use crate::aws::{load_aws_config, CloudFrontCache, S3Store};
use crate::load_config::load_config;
use anyhow::Result;
use clap::Parser;
use site_deploy_core::deploy::deploy;

/// CLI for site-deploy: publish a build directory and refresh the edge cache.
#[derive(Parser)]
#[clap(
    name = "site-deploy",
    version,
    about = "Upload a static site build to S3 and invalidate the CloudFront edge cache"
)]
pub struct Cli {}

/// Final line printed once the invalidation request has been accepted.
/// This is the user-visible success contract of a deploy run.
pub const SUCCESS_MESSAGE: &str = "Successfully created invalidation for CloudFront edge.";

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(_cli: Cli) -> Result<()> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");

    // Configuration is validated before any client exists, so a missing
    // variable can never reach the network.
    let config = load_config()?;

    let aws_config = load_aws_config().await;
    let store = S3Store::new(&aws_config);
    let cache = CloudFrontCache::new(&aws_config);

    tracing::info!(bucket = %config.bucket, "Starting deployment");
    match deploy(&config, &store, &cache).await {
        Ok(report) => {
            tracing::info!(
                objects = report.objects.len(),
                caller_reference = %report.caller_reference,
                "Deployment complete"
            );
            println!("{SUCCESS_MESSAGE}");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Deployment failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SUCCESS_MESSAGE;

    // Pins the success line against accidental edits; downstream tooling
    // greps deploy logs for this exact text.
    #[test]
    fn success_message_is_stable() {
        assert_eq!(
            SUCCESS_MESSAGE,
            "Successfully created invalidation for CloudFront edge."
        );
    }
}
