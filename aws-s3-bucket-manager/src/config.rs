/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_types::region::Region;

/// Loading [`Config`] from storage settings or the environment
pub mod loader;
mod storage;

pub use storage::{StorageConfig, StorageConfigBuilder};

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    region: Option<Region>,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The region used when an operation does not name one explicitly.
    ///
    /// Falls back to the region configured on the S3 client.
    pub fn region(&self) -> Option<&Region> {
        self.region
            .as_ref()
            .or_else(|| self.client.config().region())
    }

    /// The Amazon S3 client instance that will be used to send requests.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    region: Option<Region>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the default region used to create buckets.
    ///
    /// Default is the region of the S3 client.
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.region = region.into();
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// Returns an error if no S3 client was set.
    pub fn build(self) -> Result<Config, crate::error::Error> {
        let client = self
            .client
            .ok_or_else(|| crate::error::invalid_config("an S3 client is required"))?;
        Ok(Config {
            region: self.region,
            client,
        })
    }
}
