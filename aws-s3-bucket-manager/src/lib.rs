/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A thin convenience layer over an S3-compatible object storage client.
//!
//! The bucket manager builds an Amazon S3 client from static credentials and an endpoint,
//! then offers the handful of bucket level operations most tools need: make sure a bucket
//! exists, put a single object into it and empty it again.
//!
//! # Examples
//!
//! Load the configuration from `S3_*` environment variables:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_bucket_manager::error::Error> {
//! let config = aws_s3_bucket_manager::from_env().load().await?;
//! let client = aws_s3_bucket_manager::Client::new(config);
//! # Ok(())
//! # }
//! ```
//!
//! Configure explicitly and purge a bucket:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_bucket_manager::error::Error> {
//! use aws_s3_bucket_manager::config::StorageConfig;
//!
//! let storage = StorageConfig::builder()
//!     .endpoint("localhost:9000")
//!     .access_key_id("minioadmin")
//!     .secret_access_key("minioadmin")
//!     .region("us-east-1")
//!     .use_tls("false")
//!     .build();
//!
//! let client = aws_s3_bucket_manager::configure(storage).await?;
//!
//! let handle = client.purge_bucket().bucket("dev-assets").send().await?;
//! let output = handle.join().await?;
//! println!("deleted {} objects", output.objects_deleted());
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`ensure_bucket`](crate::Client::ensure_bucket) - create a bucket or adopt an existing one
//! * [`upload`](crate::Client::upload) - upload a single object
//! * [`purge_bucket`](crate::Client::purge_bucket) - delete every object in a bucket

/// Error types emitted by `aws-s3-bucket-manager`
pub mod error;

/// Common types used by `aws-s3-bucket-manager`
pub mod types;

/// Types and helpers for I/O
pub mod io;

/// Bucket manager client
pub mod client;

/// Bucket manager operations
pub mod operation;

/// Bucket manager configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;
use self::config::StorageConfig;

/// Create a config loader seeded from the `S3_ENDPOINT`, `S3_ACCESS_KEY_ID`,
/// `S3_SECRET_ACCESS_KEY`, `S3_REGION` and `S3_USE_TLS` environment variables
pub fn from_env() -> ConfigLoader {
    ConfigLoader::from_env()
}

/// Build a [`Client`] from storage settings.
///
/// Fails with [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid) when the
/// TLS flag is not a recognized boolean or a required setting is missing; no client is
/// returned in that case.
pub async fn configure(storage: StorageConfig) -> Result<Client, error::Error> {
    let config = ConfigLoader::from(storage).load().await?;
    Ok(Client::new(config))
}
