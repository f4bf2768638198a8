/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::mem;
use std::sync::atomic::Ordering;

use async_channel::{Receiver, Sender};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use tracing::Instrument;

use crate::error::{self, ErrorKind};
use crate::types::FailedDeletion;

use super::list_objects::ListObjectsStream;
use super::{PurgeBucketContext, MAX_DELETE_BATCH};

// worker to enumerate object keys from a bucket
pub(super) async fn list_objects(
    ctx: PurgeBucketContext,
    key_tx: Sender<String>,
) -> Result<(), error::Error> {
    let mut stream = ListObjectsStream::new(ctx.clone());
    let mut cancel_rx = ctx.state.cancel_rx.clone();

    loop {
        tokio::select! {
            _ = cancel_rx.changed() => {
                tracing::error!("received cancellation signal, no new objects are listed");
                return Err(error::operation_cancelled());
            }
            key_result = stream.next() => {
                match key_result {
                    None => break,
                    Some(Err(err)) => {
                        tracing::error!(
                            "failed to list objects in {:?}: {}",
                            ctx.state.input.bucket(),
                            DisplayErrorContext(&err)
                        );
                        ctx.state.cancel();
                        return Err(error::from_sdk(ErrorKind::EnumerationFailed)(err));
                    }
                    Some(Ok(key)) => {
                        if key_tx.send(key).await.is_err() {
                            tracing::error!("all key receivers were dropped, unable to send a key");
                            break;
                        }
                    }
                }
            }
        }
    }

    tracing::trace!("listing complete, lister finished");
    Ok(())
}

// worker to delete listed keys in batches
pub(super) async fn delete_objects(
    ctx: PurgeBucketContext,
    key_rx: Receiver<String>,
) -> Result<(), error::Error> {
    let mut cancel_rx = ctx.state.cancel_rx.clone();
    let mut batch = Vec::with_capacity(MAX_DELETE_BATCH);

    loop {
        tokio::select! {
            _ = cancel_rx.changed() => {
                tracing::error!("received cancellation signal, no new objects are deleted");
                return Err(error::operation_cancelled());
            }
            key = key_rx.recv() => {
                match key {
                    Err(_) => break,
                    Ok(key) => {
                        batch.push(key);
                        if batch.len() == MAX_DELETE_BATCH {
                            delete_batch(&ctx, mem::take(&mut batch)).await?;
                        }
                    }
                }
            }
        }
    }

    if !batch.is_empty() {
        delete_batch(&ctx, batch).await?;
    }

    tracing::trace!("key channel closed, deleter finished");
    Ok(())
}

/// Delete a single batch of at most [`MAX_DELETE_BATCH`] keys.
///
/// Keys the service refuses to delete are recorded as failed deletions. A rejected request
/// cancels the whole operation.
async fn delete_batch(ctx: &PurgeBucketContext, keys: Vec<String>) -> Result<(), error::Error> {
    let input = &ctx.state.input;
    let batch_size = keys.len();
    tracing::debug!("deleting a batch of {batch_size} objects");

    let objects = keys
        .into_iter()
        .map(|key| ObjectIdentifier::builder().key(key).build())
        .collect::<Result<Vec<_>, _>>()?;
    let delete = Delete::builder()
        .set_objects(Some(objects))
        .quiet(true)
        .build()?;

    let resp = ctx
        .client()
        .delete_objects()
        .set_bucket(input.bucket.to_owned())
        .delete(delete)
        .bypass_governance_retention(input.bypass_governance_retention())
        .send()
        .instrument(tracing::debug_span!("send-delete-objects", batch_size))
        .await;

    let resp = match resp {
        Ok(resp) => resp,
        Err(err) => {
            tracing::error!(
                "failed to delete a batch of {batch_size} objects: {}",
                DisplayErrorContext(&err)
            );
            ctx.state.cancel();
            return Err(error::from_sdk(ErrorKind::DeletionFailed)(err));
        }
    };

    // quiet mode: only the keys that could not be deleted are reported back
    let errors = resp.errors();
    for err in errors {
        tracing::warn!(
            "failed to delete {:?}: {} ({})",
            err.key().unwrap_or_default(),
            err.message().unwrap_or_default(),
            err.code().unwrap_or_default()
        );
    }

    let deleted = batch_size.saturating_sub(errors.len()) as u64;
    ctx.state
        .objects_deleted
        .fetch_add(deleted, Ordering::SeqCst);

    if !errors.is_empty() {
        ctx.state
            .failed_deletions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .extend(errors.iter().map(FailedDeletion::from));
    }

    Ok(())
}
