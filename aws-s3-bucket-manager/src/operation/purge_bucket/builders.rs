/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use super::{PurgeBucketHandle, PurgeBucketInputBuilder};

/// Fluent builder for constructing a bucket purge
#[derive(Debug)]
pub struct PurgeBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PurgeBucketInputBuilder,
}

impl PurgeBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Start deleting every object in the bucket
    ///
    /// Wait for the returned [`PurgeBucketHandle`] to find out how many objects were deleted.
    pub async fn send(self) -> Result<PurgeBucketHandle, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::purge_bucket::PurgeBucket::orchestrate(self.handle, input).await
    }

    /// Set the bucket to empty.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to empty.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to empty.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Limit the purge to keys that begin with the specified prefix.
    pub fn key_prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key_prefix(input);
        self
    }

    /// Limit the purge to keys that begin with the specified prefix.
    pub fn set_key_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key_prefix(input);
        self
    }

    /// Limits the purge to keys that begin with the specified prefix.
    pub fn get_key_prefix(&self) -> &Option<String> {
        self.inner.get_key_prefix()
    }

    /// Delete objects locked under governance mode retention as well. Enabled by default.
    pub fn bypass_governance_retention(mut self, input: bool) -> Self {
        self.inner = self.inner.bypass_governance_retention(input);
        self
    }

    /// Delete objects locked under governance mode retention as well.
    pub fn set_bypass_governance_retention(mut self, input: Option<bool>) -> Self {
        self.inner = self.inner.set_bypass_governance_retention(input);
        self
    }

    /// Whether locked objects under governance mode retention are deleted anyway.
    pub fn get_bypass_governance_retention(&self) -> &Option<bool> {
        self.inner.get_bypass_governance_retention()
    }
}

impl crate::operation::purge_bucket::input::PurgeBucketInputBuilder {
    /// Start a bucket purge with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<PurgeBucketHandle, crate::error::Error> {
        let mut fluent_builder = client.purge_bucket();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
