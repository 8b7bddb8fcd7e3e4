#![doc = "site-deploy-core: core logic library for site-deploy."]

//! This crate contains all the deploy pipeline logic and data models for
//! site-deploy: walking the build directory, deriving per-object metadata,
//! publishing objects concurrently and requesting an edge-cache invalidation.
//! Provider-specific clients (S3, CloudFront) live in the binary crate and
//! implement the traits in [`contract`].
//!
//! # Usage
//! Add this as a dependency for all shared pipeline, config, and contract code.

pub mod config;
pub mod contract;
pub mod deploy;
pub mod error;
pub mod object;
pub mod publish;
pub mod walk;

pub use config::DeployConfig;
pub use deploy::{deploy, DeployReport};
pub use error::DeployError;
