use anyhow::Result;
use clap::Parser;
use site_deploy::cli::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DEPLOY_* and AWS variables from a .env file when present.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();
    tracing::info!("site-deploy starting: tracing initialised, environment loaded");

    let cli = Cli::parse();
    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("deploy run finished"),
        Err(e) => tracing::error!(error = %e, "deploy run failed"),
    }
    result
}
