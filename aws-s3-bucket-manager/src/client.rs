/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::ensure_bucket::builders::EnsureBucketFluentBuilder;
use crate::operation::purge_bucket::builders::PurgeBucketFluentBuilder;
use crate::operation::upload::builders::UploadFluentBuilder;
use crate::Config;
use std::sync::Arc;

/// Bucket manager client for S3-compatible object storage.
///
/// Cloning a `Client` is cheap; clones share the same underlying S3 client.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a bucket manager config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });

        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Make sure a bucket exists, creating it if necessary.
    ///
    /// Creation is attempted first. If it fails, the bucket is checked for existence and adopted
    /// when it is already there; otherwise the creation error is returned.
    ///
    /// # Examples
    /// ```no_run
    /// use aws_s3_bucket_manager::types::EnsureBucketOutcome;
    /// use aws_s3_bucket_manager::{error::Error, Client};
    ///
    /// async fn ensure(client: &Client) -> Result<(), Error> {
    ///     let outcome = client
    ///         .ensure_bucket()
    ///         .bucket("dev-assets")
    ///         .send()
    ///         .await?;
    ///     if outcome == EnsureBucketOutcome::AlreadyExists {
    ///         println!("we already own dev-assets");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn ensure_bucket(&self) -> EnsureBucketFluentBuilder {
        EnsureBucketFluentBuilder::new(self.handle.clone())
    }

    /// Upload a single object from a file or an in-memory/reader stream.
    ///
    /// # Examples
    /// ```no_run
    /// use aws_s3_bucket_manager::io::InputStream;
    /// use aws_s3_bucket_manager::{error::Error, Client};
    ///
    /// async fn upload_file(client: &Client) -> Result<(), Error> {
    ///     let output = client
    ///         .upload()
    ///         .bucket("dev-assets")
    ///         .key("a.zip")
    ///         .body(InputStream::from_path("/tmp/a.zip")?)
    ///         .content_type("application/zip")
    ///         .send()
    ///         .await?;
    ///     println!("uploaded {} bytes", output.size());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload(&self) -> UploadFluentBuilder {
        UploadFluentBuilder::new(self.handle.clone())
    }

    /// Delete every object in a bucket.
    ///
    /// Objects are listed and deleted concurrently, in batches. Object lock governance
    /// retention is bypassed unless disabled on the builder.
    ///
    /// # Examples
    /// ```no_run
    /// use aws_s3_bucket_manager::{error::Error, Client};
    ///
    /// async fn purge(client: &Client) -> Result<(), Error> {
    ///     let handle = client
    ///         .purge_bucket()
    ///         .bucket("dev-assets")
    ///         .send()
    ///         .await?;
    ///
    ///     let output = handle.join().await?;
    ///     for failed in output.failed_deletions() {
    ///         eprintln!("{:?} was not deleted: {:?}", failed.key(), failed.message());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn purge_bucket(&self) -> PurgeBucketFluentBuilder {
        PurgeBucketFluentBuilder::new(self.handle.clone())
    }
}
