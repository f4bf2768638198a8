/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::atomic::Ordering;

use crate::types::FailedDeletion;

use super::PurgeBucketState;

/// Output type for deleting every object in a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PurgeBucketOutput {
    /// The number of objects that were deleted
    pub objects_deleted: u64,

    /// Objects the service refused to delete
    pub failed_deletions: Vec<FailedDeletion>,
}

impl PurgeBucketOutput {
    /// Creates a new builder-style object to manufacture [`PurgeBucketOutput`](crate::operation::purge_bucket::PurgeBucketOutput).
    pub fn builder() -> PurgeBucketOutputBuilder {
        PurgeBucketOutputBuilder::default()
    }

    /// The number of objects that were deleted
    pub fn objects_deleted(&self) -> u64 {
        self.objects_deleted
    }

    /// A slice of objects the service refused to delete (e.g. because they are locked)
    pub fn failed_deletions(&self) -> &[FailedDeletion] {
        self.failed_deletions.as_slice()
    }
}

impl From<&PurgeBucketState> for PurgeBucketOutput {
    fn from(state: &PurgeBucketState) -> Self {
        let failed_deletions = std::mem::take(
            &mut *state
                .failed_deletions
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        );

        PurgeBucketOutput::builder()
            .objects_deleted(state.objects_deleted.load(Ordering::SeqCst))
            .set_failed_deletions(failed_deletions)
            .build()
    }
}

/// A builder for [`PurgeBucketOutput`](crate::operation::purge_bucket::PurgeBucketOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct PurgeBucketOutputBuilder {
    pub(crate) objects_deleted: u64,
    pub(crate) failed_deletions: Vec<FailedDeletion>,
}

impl PurgeBucketOutputBuilder {
    /// The number of objects that were deleted
    pub fn objects_deleted(mut self, input: u64) -> Self {
        self.objects_deleted = input;
        self
    }

    /// The number of objects that were deleted
    pub fn get_objects_deleted(&self) -> u64 {
        self.objects_deleted
    }

    /// Append an object the service refused to delete.
    ///
    /// To override the contents of this collection use
    /// [`set_failed_deletions`](Self::set_failed_deletions)
    pub fn failed_deletions(mut self, input: FailedDeletion) -> Self {
        self.failed_deletions.push(input);
        self
    }

    /// Objects the service refused to delete
    pub fn set_failed_deletions(mut self, input: Vec<FailedDeletion>) -> Self {
        self.failed_deletions = input;
        self
    }

    /// Objects the service refused to delete
    pub fn get_failed_deletions(&self) -> &[FailedDeletion] {
        &self.failed_deletions
    }

    /// Consume the builder and return the output
    pub fn build(self) -> PurgeBucketOutput {
        PurgeBucketOutput {
            objects_deleted: self.objects_deleted,
            failed_deletions: self.failed_deletions,
        }
    }
}
