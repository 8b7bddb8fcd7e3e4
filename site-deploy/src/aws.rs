//! # AWS integration (CLI <-> Core)
//!
//! This module bridges the core pipeline's storage and cache abstractions to
//! the real AWS SDK clients: [`S3Store`] implements
//! [`site_deploy_core::contract::ObjectStore`] over `aws-sdk-s3`, and
//! [`CloudFrontCache`] implements [`site_deploy_core::contract::EdgeCache`]
//! over `aws-sdk-cloudfront`.
//!
//! ## Client Usage
//!
//! - Resolve a shared [`aws_config::SdkConfig`] once via [`load_aws_config`]
//!   (default provider chain: env credentials, profile, etc.).
//! - Construct both clients from it and hand them to the core `deploy`
//!   pipeline.
//! - All transport, signing, and error mapping are encapsulated here; the
//!   core never sees an SDK type.

use async_trait::async_trait;

use aws_config::BehaviorVersion;
use aws_sdk_cloudfront::types::{InvalidationBatch, Paths};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

use site_deploy_core::contract::{BoxError, EdgeCache, InvalidationRequest, ObjectStore, PutRequest};

/// Resolve the shared AWS configuration from the default provider chain.
pub async fn load_aws_config() -> aws_config::SdkConfig {
    aws_config::defaults(BehaviorVersion::latest()).load().await
}

/// S3-backed object store. Every object is stored with the canned
/// `public-read` ACL so the distribution can serve it directly.
pub struct S3Store {
    client: aws_sdk_s3::Client,
}

impl S3Store {
    pub fn new(conf: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(conf),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object<'a>(&self, req: PutRequest<'a>) -> Result<(), BoxError> {
        tracing::info!(
            bucket = req.bucket,
            key = req.key,
            content_type = req.content_type,
            "Uploading object to S3"
        );
        let result = self
            .client
            .put_object()
            .bucket(req.bucket)
            .key(req.key)
            .body(ByteStream::from(req.body))
            .acl(ObjectCannedAcl::PublicRead)
            .content_type(req.content_type)
            .cache_control(req.cache_control)
            .send()
            .await;

        match result {
            Ok(_) => {
                tracing::info!(key = req.key, "S3 put_object succeeded");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = ?e, key = req.key, "S3 put_object failed");
                Err(Box::new(e))
            }
        }
    }
}

/// CloudFront-backed edge cache invalidator.
pub struct CloudFrontCache {
    client: aws_sdk_cloudfront::Client,
}

impl CloudFrontCache {
    pub fn new(conf: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudfront::Client::new(conf),
        }
    }
}

#[async_trait]
impl EdgeCache for CloudFrontCache {
    async fn create_invalidation(&self, req: InvalidationRequest) -> Result<(), BoxError> {
        tracing::info!(
            distribution_id = %req.distribution_id,
            paths = ?req.paths,
            caller_reference = %req.caller_reference,
            "Creating CloudFront invalidation"
        );
        let paths = Paths::builder()
            .quantity(req.paths.len() as i32)
            .set_items(Some(req.paths.clone()))
            .build()?;
        let batch = InvalidationBatch::builder()
            .paths(paths)
            .caller_reference(&req.caller_reference)
            .build()?;

        let result = self
            .client
            .create_invalidation()
            .distribution_id(&req.distribution_id)
            .invalidation_batch(batch)
            .send()
            .await;

        match result {
            Ok(out) => {
                tracing::info!(
                    invalidation_id = ?out.invalidation().map(|i| i.id()),
                    "CloudFront invalidation accepted"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = ?e, distribution_id = %req.distribution_id, "CloudFront create_invalidation failed");
                Err(Box::new(e))
            }
        }
    }
}
