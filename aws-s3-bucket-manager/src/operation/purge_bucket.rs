/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
pub use input::{PurgeBucketInput, PurgeBucketInputBuilder};

mod handle;
pub use handle::PurgeBucketHandle;

mod output;
pub use output::{PurgeBucketOutput, PurgeBucketOutputBuilder};

mod list_objects;
mod worker;

use std::sync::{atomic::AtomicU64, Arc, Mutex};

use tokio::{sync::watch, task::JoinSet};
use tracing::Instrument;

use crate::types::FailedDeletion;

use super::OperationContext;

/// Maximum number of keys a single `DeleteObjects` request accepts
pub(crate) const MAX_DELETE_BATCH: usize = 1000;

/// Operation struct for deleting every object in a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct PurgeBucket;

impl PurgeBucket {
    /// Execute a single `PurgeBucket` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PurgeBucketInput,
    ) -> Result<PurgeBucketHandle, crate::error::Error> {
        let ctx = PurgeBucketContext::new(handle, input);

        // spawn all work into the same JoinSet, dropping the set cancels every task
        let mut tasks = JoinSet::new();
        let (key_tx, key_rx) = async_channel::bounded(MAX_DELETE_BATCH);

        tasks.spawn(
            worker::list_objects(ctx.clone(), key_tx)
                .instrument(tracing::debug_span!("object-lister")),
        );
        tasks.spawn(
            worker::delete_objects(ctx.clone(), key_rx)
                .instrument(tracing::debug_span!("object-deleter")),
        );

        Ok(PurgeBucketHandle { tasks, ctx })
    }
}

/// PurgeBucket operation specific state
#[derive(Debug)]
pub(crate) struct PurgeBucketState {
    input: PurgeBucketInput,
    cancel_tx: watch::Sender<bool>,
    cancel_rx: watch::Receiver<bool>,
    objects_deleted: AtomicU64,
    failed_deletions: Mutex<Vec<FailedDeletion>>,
}

impl PurgeBucketState {
    /// Signal every task of the operation to stop picking up new work
    fn cancel(&self) {
        if self.cancel_tx.send(true).is_err() {
            tracing::warn!(
                "all receiver ends have been dropped, unable to send a cancellation signal"
            );
        }
    }
}

type PurgeBucketContext = OperationContext<PurgeBucketState>;

impl PurgeBucketContext {
    fn new(handle: Arc<crate::client::Handle>, input: PurgeBucketInput) -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let state = Arc::new(PurgeBucketState {
            input,
            cancel_tx,
            cancel_rx,
            objects_deleted: AtomicU64::default(),
            failed_deletions: Mutex::new(Vec::new()),
        });
        OperationContext { handle, state }
    }
}
