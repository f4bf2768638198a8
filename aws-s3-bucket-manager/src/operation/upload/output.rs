/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Response fields for uploading a single object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOutput {
    /// The bucket the object was uploaded to.
    pub bucket: Option<String>,

    /// The key of the uploaded object.
    pub key: Option<String>,

    /// Number of bytes sent as the object body.
    pub size: u64,

    /// Entity tag for the uploaded object.
    pub e_tag: Option<String>,

    /// Version ID of the object, when the bucket is versioned.
    pub version_id: Option<String>,
}

impl UploadOutput {
    /// Creates a new builder-style object to manufacture [`UploadOutput`](crate::operation::upload::UploadOutput).
    pub fn builder() -> UploadOutputBuilder {
        UploadOutputBuilder::default()
    }

    /// The bucket the object was uploaded to.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the uploaded object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Number of bytes sent as the object body.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Entity tag for the uploaded object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version ID of the object.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }
}

/// A builder for [`UploadOutput`](crate::operation::upload::UploadOutput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct UploadOutputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) size: u64,
    pub(crate) e_tag: Option<String>,
    pub(crate) version_id: Option<String>,
}

impl UploadOutputBuilder {
    /// The bucket the object was uploaded to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The key of the uploaded object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Number of bytes sent as the object body.
    pub fn size(mut self, input: u64) -> Self {
        self.size = input;
        self
    }

    /// Entity tag for the uploaded object.
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.e_tag = input;
        self
    }

    /// Version ID of the object.
    pub fn set_version_id(mut self, input: Option<String>) -> Self {
        self.version_id = input;
        self
    }

    /// Consumes the builder and constructs a [`UploadOutput`](crate::operation::upload::UploadOutput).
    pub fn build(self) -> UploadOutput {
        UploadOutput {
            bucket: self.bucket,
            key: self.key,
            size: self.size,
            e_tag: self.e_tag,
            version_id: self.version_id,
        }
    }
}
