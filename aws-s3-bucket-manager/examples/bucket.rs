/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;
use std::time;

use aws_s3_bucket_manager::io::InputStream;
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use tracing::{debug_span, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "bucket")]
#[command(about = "Manages buckets on an S3-compatible object store.")]
#[command(
    long_about = "Manages buckets on an S3-compatible object store.\n\nConnection settings are read from S3_ENDPOINT, S3_ACCESS_KEY_ID, S3_SECRET_ACCESS_KEY, S3_REGION and S3_USE_TLS, optionally via a .env file."
)]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// Create a bucket, or adopt it if we already own it
    Ensure {
        /// Bucket name
        bucket: String,

        /// Region to create the bucket in (defaults to S3_REGION)
        #[arg(long)]
        region: Option<String>,
    },

    /// Upload a local file as an object
    Put {
        /// Bucket name
        bucket: String,

        /// Object key
        key: String,

        /// Local file to upload
        path: PathBuf,

        /// MIME type of the object
        #[arg(long)]
        content_type: Option<String>,
    },

    /// Delete every object in a bucket
    Purge {
        /// Bucket name
        bucket: String,

        /// Only delete keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Leave objects locked under governance retention alone
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        keep_governed: bool,
    },
}

async fn do_ensure(
    client: &aws_s3_bucket_manager::Client,
    bucket: String,
    region: Option<String>,
) -> Result<(), BoxError> {
    let outcome = client
        .ensure_bucket()
        .bucket(bucket.as_str())
        .set_region(region)
        .send()
        .await?;
    println!("{bucket}: {outcome:?}");
    Ok(())
}

async fn do_put(
    client: &aws_s3_bucket_manager::Client,
    bucket: String,
    key: String,
    path: PathBuf,
    content_type: Option<String>,
) -> Result<(), BoxError> {
    let stream = InputStream::from_path(&path)?;
    let start = time::Instant::now();
    let output = client
        .upload()
        .bucket(bucket)
        .key(key.as_str())
        .body(stream)
        .set_content_type(content_type)
        .send()
        .instrument(debug_span!("put", key = key.as_str()))
        .await?;
    let elapsed = start.elapsed();

    println!(
        "uploaded {} ({} bytes) in {elapsed:?}",
        path.display(),
        output.size()
    );
    Ok(())
}

async fn do_purge(
    client: &aws_s3_bucket_manager::Client,
    bucket: String,
    prefix: Option<String>,
    keep_governed: bool,
) -> Result<(), BoxError> {
    let start = time::Instant::now();
    let handle = client
        .purge_bucket()
        .bucket(bucket.as_str())
        .set_key_prefix(prefix)
        .bypass_governance_retention(!keep_governed)
        .send()
        .await?;
    let output = handle.join().await?;
    let elapsed = start.elapsed();

    println!(
        "deleted {} objects from {bucket} in {elapsed:?}",
        output.objects_deleted()
    );
    for failed in output.failed_deletions() {
        println!(
            "  not deleted: {} ({})",
            failed.key().unwrap_or_default(),
            failed.message().unwrap_or_default()
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!("no .env file loaded: {err}");
    }

    let config = aws_s3_bucket_manager::from_env().load().await?;
    let client = aws_s3_bucket_manager::Client::new(config);

    let result = match args.command {
        Command::Ensure { bucket, region } => do_ensure(&client, bucket, region).await,
        Command::Put {
            bucket,
            key,
            path,
            content_type,
        } => do_put(&client, bucket, key, path, content_type).await,
        Command::Purge {
            bucket,
            prefix,
            keep_governed,
        } => do_purge(&client, bucket, prefix, keep_governed).await,
    };

    if let Err(ref err) = result {
        tracing::error!("command failed: {}", DisplayErrorContext(err.as_ref()));
    }

    result
}
