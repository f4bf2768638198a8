/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Result of making sure a bucket exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureBucketOutcome {
    /// The bucket did not exist and was created by this call.
    Created,

    /// Creation failed but the bucket exists and is accessible, so it was adopted.
    AlreadyExists,
}

/// Detailed information about an object the storage service refused to delete
/// (e.g. because it is protected by an object lock).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct FailedDeletion {
    pub(crate) key: Option<String>,
    pub(crate) version_id: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
}

impl FailedDeletion {
    /// The key of the object that was not deleted
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The version of the object that was not deleted, if versioned
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// The error code returned by the service
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The error message returned by the service
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<&aws_sdk_s3::types::Error> for FailedDeletion {
    fn from(value: &aws_sdk_s3::types::Error) -> Self {
        FailedDeletion {
            key: value.key().map(str::to_owned),
            version_id: value.version_id().map(str::to_owned),
            code: value.code().map(str::to_owned),
            message: value.message().map(str::to_owned),
        }
    }
}
