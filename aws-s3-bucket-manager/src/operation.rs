/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

/// Types for the create-or-adopt bucket operation
pub mod ensure_bucket;

/// Types for single object upload operation
pub mod upload;

/// Types for the operation deleting every object in a bucket
pub mod purge_bucket;

/// Container for maintaining context required to carry out a single operation.
///
/// `State` is whatever additional operation specific state is required for the operation.
#[derive(Debug)]
pub(crate) struct OperationContext<State> {
    handle: Arc<crate::client::Handle>,
    state: Arc<State>,
}

impl<State> OperationContext<State> {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.handle.config.client()
    }
}

impl<State> Clone for OperationContext<State> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            state: self.state.clone(),
        }
    }
}
