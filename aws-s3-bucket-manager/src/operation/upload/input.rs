/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::io::InputStream;

/// Input type for uploading a single object
#[non_exhaustive]
#[derive(Debug)]
pub struct UploadInput {
    /// The bucket to upload the object to.
    pub bucket: Option<String>,

    /// Object key for which the PUT action was initiated.
    pub key: Option<String>,

    /// Object data.
    pub body: InputStream,

    /// A standard MIME type describing the format of the contents.
    pub content_type: Option<String>,
}

impl UploadInput {
    /// Creates a new builder-style object to manufacture [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn builder() -> UploadInputBuilder {
        UploadInputBuilder::default()
    }

    /// The bucket to upload the object to.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Object key for which the PUT action was initiated.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Object data.
    pub fn body(&self) -> &InputStream {
        &self.body
    }

    /// A standard MIME type describing the format of the contents.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// A builder for [`UploadInput`](crate::operation::upload::UploadInput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct UploadInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) body: Option<InputStream>,
    pub(crate) content_type: Option<String>,
}

impl UploadInputBuilder {
    /// The bucket to upload the object to.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to upload the object to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to upload the object to.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Object key for which the PUT action was initiated.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Object key for which the PUT action was initiated.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Object key for which the PUT action was initiated.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Object data. An empty object is uploaded when no body is set.
    pub fn body(mut self, input: InputStream) -> Self {
        self.body = Some(input);
        self
    }

    /// Object data.
    pub fn set_body(mut self, input: Option<InputStream>) -> Self {
        self.body = input;
        self
    }

    /// Object data.
    pub fn get_body(&self) -> &Option<InputStream> {
        &self.body
    }

    /// A standard MIME type describing the format of the contents, `application/octet-stream`
    /// when not set.
    pub fn content_type(mut self, input: impl Into<String>) -> Self {
        self.content_type = Some(input.into());
        self
    }

    /// A standard MIME type describing the format of the contents.
    pub fn set_content_type(mut self, input: Option<String>) -> Self {
        self.content_type = input;
        self
    }

    /// A standard MIME type describing the format of the contents.
    pub fn get_content_type(&self) -> &Option<String> {
        &self.content_type
    }

    /// Consumes the builder and constructs a [`UploadInput`](crate::operation::upload::UploadInput).
    pub fn build(self) -> Result<UploadInput, BuildError> {
        if self.bucket.as_deref().map_or(true, str::is_empty) {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        if self.key.as_deref().map_or(true, str::is_empty) {
            return Err(BuildError::missing_field("key", "A key is required"));
        }

        Ok(UploadInput {
            bucket: self.bucket,
            key: self.key,
            body: self.body.unwrap_or_default(),
            content_type: self.content_type,
        })
    }
}

#[cfg(test)]
mod test {
    use super::UploadInput;

    #[test]
    fn test_key_required() {
        let err = UploadInput::builder().bucket("bucket").build().unwrap_err();
        assert!(err.to_string().contains("A key is required"));
    }

    #[test]
    fn test_empty_body_default() {
        let input = UploadInput::builder()
            .bucket("bucket")
            .key("key")
            .build()
            .unwrap();
        assert_eq!(0, input.body().length());
        assert_eq!(None, input.content_type());
    }
}
