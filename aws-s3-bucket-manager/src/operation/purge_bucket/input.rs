/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for deleting every object in a bucket
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurgeBucketInput {
    /// The bucket to empty.
    pub bucket: Option<String>,

    /// Limits the purge to keys that begin with the specified prefix.
    pub key_prefix: Option<String>,

    /// Whether locked objects under governance mode retention are deleted anyway.
    pub bypass_governance_retention: bool,
}

impl PurgeBucketInput {
    /// Creates a new builder-style object to manufacture [`PurgeBucketInput`](crate::operation::purge_bucket::PurgeBucketInput).
    pub fn builder() -> PurgeBucketInputBuilder {
        PurgeBucketInputBuilder::default()
    }

    /// The bucket to empty.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Limits the purge to keys that begin with the specified prefix.
    pub fn key_prefix(&self) -> Option<&str> {
        self.key_prefix.as_deref()
    }

    /// Whether locked objects under governance mode retention are deleted anyway.
    pub fn bypass_governance_retention(&self) -> bool {
        self.bypass_governance_retention
    }
}

/// A builder for [`PurgeBucketInput`](crate::operation::purge_bucket::PurgeBucketInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct PurgeBucketInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key_prefix: Option<String>,
    pub(crate) bypass_governance_retention: Option<bool>,
}

impl PurgeBucketInputBuilder {
    /// Set the bucket to empty.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to empty.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to empty.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Limit the purge to keys that begin with the specified prefix.
    pub fn key_prefix(mut self, input: impl Into<String>) -> Self {
        self.key_prefix = Some(input.into());
        self
    }

    /// Limit the purge to keys that begin with the specified prefix.
    pub fn set_key_prefix(mut self, input: Option<String>) -> Self {
        self.key_prefix = input;
        self
    }

    /// Limits the purge to keys that begin with the specified prefix.
    pub fn get_key_prefix(&self) -> &Option<String> {
        &self.key_prefix
    }

    /// Delete objects locked under governance mode retention as well. Enabled by default.
    pub fn bypass_governance_retention(mut self, input: bool) -> Self {
        self.bypass_governance_retention = Some(input);
        self
    }

    /// Delete objects locked under governance mode retention as well.
    pub fn set_bypass_governance_retention(mut self, input: Option<bool>) -> Self {
        self.bypass_governance_retention = input;
        self
    }

    /// Whether locked objects under governance mode retention are deleted anyway.
    pub fn get_bypass_governance_retention(&self) -> &Option<bool> {
        &self.bypass_governance_retention
    }

    /// Consumes the builder and constructs a [`PurgeBucketInput`](crate::operation::purge_bucket::PurgeBucketInput).
    pub fn build(self) -> Result<PurgeBucketInput, BuildError> {
        if self.bucket.as_deref().map_or(true, str::is_empty) {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        Ok(PurgeBucketInput {
            bucket: self.bucket,
            key_prefix: self.key_prefix,
            bypass_governance_retention: self.bypass_governance_retention.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod test {
    use super::PurgeBucketInput;

    #[test]
    fn test_bypass_governance_retention_default() {
        let input = PurgeBucketInput::builder()
            .bucket("test-bucket")
            .build()
            .unwrap();
        assert!(input.bypass_governance_retention());
        assert_eq!(None, input.key_prefix());
    }

    #[test]
    fn test_no_bucket_error() {
        let err = PurgeBucketInput::builder()
            .key_prefix("logs/")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("A bucket is required"));
    }
}
