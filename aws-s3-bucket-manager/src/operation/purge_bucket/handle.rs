/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use tokio::task;

use crate::error::ErrorKind;

use super::{PurgeBucketContext, PurgeBucketOutput};

/// Handle for `PurgeBucket` operation
///
/// # Cancellation
///
/// The operation can be cancelled by either dropping this handle or by calling
/// [`Self::abort`]. Dropping the handle terminates the listing and delete tasks at
/// whatever await point they are parked on, possibly with a `DeleteObjects` request in
/// flight. Calling [`Self::abort`] lets an in-flight `DeleteObjects` request finish but
/// stops any new listing or deletion from starting.
#[derive(Debug)]
#[non_exhaustive]
pub struct PurgeBucketHandle {
    /// All child tasks spawned for this purge
    pub(crate) tasks: task::JoinSet<Result<(), crate::error::Error>>,
    /// The context used to drive the purge to completion
    pub(crate) ctx: PurgeBucketContext,
}

impl PurgeBucketHandle {
    /// Consume the handle and wait for the purge to complete
    ///
    /// Returns the error that caused the purge to stop, if any. The sibling task is cancelled
    /// when that happens, but its cancellation is logged rather than reported. Objects the
    /// service refused to delete individually do not fail the purge; they are listed in
    /// [`PurgeBucketOutput::failed_deletions`].
    #[tracing::instrument(skip_all, level = "debug", name = "join-purge-bucket")]
    pub async fn join(mut self) -> Result<PurgeBucketOutput, crate::error::Error> {
        let mut first_error_to_report = None;
        while let Some(join_result) = self.tasks.join_next().await {
            if let Err(e) = join_result? {
                if first_error_to_report.is_none() && e.kind() != &ErrorKind::OperationCancelled {
                    first_error_to_report = Some(e);
                } else {
                    tracing::debug!("dismissed error from cancelled task: {e}");
                }
            }
        }

        if let Some(e) = first_error_to_report {
            return Err(e);
        }

        let output = PurgeBucketOutput::from(self.ctx.state.as_ref());
        tracing::info!(
            "purged {} objects from {}, {} could not be deleted",
            output.objects_deleted(),
            self.ctx.state.input.bucket().unwrap_or_default(),
            output.failed_deletions().len()
        );
        Ok(output)
    }

    /// Aborts all tasks owned by the handle.
    ///
    /// Unlike `Drop`, calling `abort` gracefully shuts down any in-progress tasks: an
    /// outstanding `DeleteObjects` request is allowed to complete, but no new page is listed
    /// and no new batch is submitted.
    pub async fn abort(&mut self) -> Result<(), crate::error::Error> {
        self.ctx.state.cancel();
        while (self.tasks.join_next().await).is_some() {}

        Ok(())
    }
}
