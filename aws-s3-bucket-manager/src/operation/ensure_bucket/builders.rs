/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::types::EnsureBucketOutcome;

use super::EnsureBucketInputBuilder;

/// Fluent builder for making sure a bucket exists
#[derive(Debug)]
pub struct EnsureBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: EnsureBucketInputBuilder,
}

impl EnsureBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Create the bucket, or adopt it if it already exists
    pub async fn send(self) -> Result<EnsureBucketOutcome, Error> {
        let input = self.inner.build()?;
        crate::operation::ensure_bucket::EnsureBucket::orchestrate(self.handle, input).await
    }

    /// Set the bucket to create or adopt.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to create or adopt.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to create or adopt.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the region to create the bucket in.
    pub fn region(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.region(input);
        self
    }

    /// Set the region to create the bucket in.
    pub fn set_region(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_region(input);
        self
    }

    /// The region to create the bucket in.
    pub fn get_region(&self) -> &Option<String> {
        self.inner.get_region()
    }
}

impl crate::operation::ensure_bucket::input::EnsureBucketInputBuilder {
    /// Make sure the bucket exists with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<EnsureBucketOutcome, Error> {
        let mut fluent_builder = client.ensure_bucket();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
