/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for making sure a bucket exists
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnsureBucketInput {
    /// The bucket to create or adopt.
    pub bucket: Option<String>,

    /// The region (location constraint) to create the bucket in.
    pub region: Option<String>,
}

impl EnsureBucketInput {
    /// Creates a new builder-style object to manufacture [`EnsureBucketInput`](crate::operation::ensure_bucket::EnsureBucketInput).
    pub fn builder() -> EnsureBucketInputBuilder {
        EnsureBucketInputBuilder::default()
    }

    /// The bucket to create or adopt.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The region (location constraint) to create the bucket in.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// A builder for [`EnsureBucketInput`](crate::operation::ensure_bucket::EnsureBucketInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct EnsureBucketInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) region: Option<String>,
}

impl EnsureBucketInputBuilder {
    /// Set the bucket to create or adopt.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to create or adopt.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to create or adopt.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the region to create the bucket in.
    ///
    /// Defaults to the region the client was configured with.
    pub fn region(mut self, input: impl Into<String>) -> Self {
        self.region = Some(input.into());
        self
    }

    /// Set the region to create the bucket in.
    pub fn set_region(mut self, input: Option<String>) -> Self {
        self.region = input;
        self
    }

    /// The region to create the bucket in.
    pub fn get_region(&self) -> &Option<String> {
        &self.region
    }

    /// Consumes the builder and constructs a [`EnsureBucketInput`](crate::operation::ensure_bucket::EnsureBucketInput).
    pub fn build(self) -> Result<EnsureBucketInput, BuildError> {
        if self.bucket.as_deref().map_or(true, str::is_empty) {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        Ok(EnsureBucketInput {
            bucket: self.bucket,
            region: self.region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::EnsureBucketInput;

    #[test]
    fn test_no_bucket_error() {
        let err = EnsureBucketInput::builder()
            .region("us-west-2")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A bucket is required"));
    }

    #[test]
    fn test_empty_bucket_error() {
        let err = EnsureBucketInput::builder().bucket("").build().unwrap_err();
        assert!(err.to_string().contains("A bucket is required"));
    }
}
