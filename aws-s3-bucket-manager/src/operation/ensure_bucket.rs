/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for making sure a bucket exists
pub use input::{EnsureBucketInput, EnsureBucketInputBuilder};

use std::sync::Arc;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_types::error::display::DisplayErrorContext;

use crate::error::{self, ErrorKind};
use crate::types::EnsureBucketOutcome;

/// Buckets in this region must be created without a location constraint
const DEFAULT_REGION: &str = "us-east-1";

/// Operation struct for the create-or-adopt bucket operation
#[derive(Clone, Default, Debug)]
pub(crate) struct EnsureBucket;

impl EnsureBucket {
    /// Execute a single `EnsureBucket` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: EnsureBucketInput,
    ) -> Result<EnsureBucketOutcome, error::Error> {
        let client = handle.config.client();
        let bucket = input
            .bucket()
            .ok_or_else(|| error::invalid_input("a bucket is required"))?;

        let region = input
            .region()
            .map(str::to_owned)
            .or_else(|| handle.config.region().map(|r| r.to_string()));

        let create_result = client
            .create_bucket()
            .bucket(bucket)
            .set_create_bucket_configuration(bucket_configuration(region.as_deref()))
            .send()
            .await;

        let create_err = match create_result {
            Ok(_) => {
                tracing::info!("successfully created {bucket}");
                return Ok(EnsureBucketOutcome::Created);
            }
            Err(err) => err,
        };

        // creation also fails when the bucket is already there, check if we own it
        match client.head_bucket().bucket(bucket).send().await {
            Ok(_) => {
                tracing::info!("we already own {bucket}");
                Ok(EnsureBucketOutcome::AlreadyExists)
            }
            Err(head_err) => {
                tracing::debug!(
                    "bucket {bucket} not accessible after failed creation: {}",
                    DisplayErrorContext(&head_err)
                );
                tracing::error!(
                    "failed to create bucket {bucket}: {}",
                    DisplayErrorContext(&create_err)
                );
                Err(creation_failed(create_err))
            }
        }
    }
}

fn bucket_configuration(region: Option<&str>) -> Option<CreateBucketConfiguration> {
    region
        .filter(|r| !r.is_empty() && *r != DEFAULT_REGION)
        .map(|r| {
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(r))
                .build()
        })
}

fn creation_failed(err: SdkError<CreateBucketError, HttpResponse>) -> error::Error {
    let kind = match err.code() {
        Some("InvalidBucketName") => ErrorKind::InputInvalid,
        _ => ErrorKind::BucketConflict,
    };
    error::from_sdk(kind)(err)
}

#[cfg(test)]
mod tests {
    use super::bucket_configuration;
    use aws_sdk_s3::types::BucketLocationConstraint;

    #[test]
    fn test_default_region_has_no_location_constraint() {
        assert_eq!(None, bucket_configuration(None));
        assert_eq!(None, bucket_configuration(Some("")));
        assert_eq!(None, bucket_configuration(Some("us-east-1")));
    }

    #[test]
    fn test_location_constraint() {
        let config = bucket_configuration(Some("eu-west-1")).unwrap();
        assert_eq!(
            Some(&BucketLocationConstraint::EuWest1),
            config.location_constraint()
        );
    }
}
