/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
pub use input::{UploadInput, UploadInputBuilder};

mod output;
pub use output::{UploadOutput, UploadOutputBuilder};

use std::sync::Arc;

use tracing::Instrument;

use crate::error::{self, ErrorKind};

/// Content type used when the caller does not supply one
pub(crate) const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    ///
    /// The whole body is sent with one `PutObject` request.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UploadInput,
    ) -> Result<UploadOutput, error::Error> {
        let UploadInput {
            bucket,
            key,
            body,
            content_type,
        } = input;

        let size = body.length();
        let content_length: i64 = size
            .try_into()
            .map_err(|_| error::invalid_input(format!("object of {size} bytes is too large")))?;
        let content_type = content_type.unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned());

        tracing::debug!("uploading {key:?} ({size} bytes, {content_type}) to {bucket:?}");
        let body = body.into_byte_stream().await?;

        let resp = handle
            .config
            .client()
            .put_object()
            .set_bucket(bucket.clone())
            .set_key(key.clone())
            .content_type(content_type)
            .content_length(content_length)
            .body(body)
            .send()
            .instrument(tracing::debug_span!("send-put-object"))
            .await
            .map_err(error::from_sdk(ErrorKind::UploadFailed))?;

        tracing::info!(
            "successfully uploaded {} of size {size}",
            key.as_deref().unwrap_or_default()
        );

        let output = UploadOutput::builder()
            .set_bucket(bucket)
            .set_key(key)
            .size(size)
            .set_e_tag(resp.e_tag)
            .set_version_id(resp.version_id)
            .build();
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    use crate::error::ErrorKind;
    use crate::io::InputStream;

    fn client(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build().unwrap();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_upload_defaults_content_type() {
        let seen = Arc::new(Mutex::new(None));
        let seen_in_rule = seen.clone();
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(move |r| {
                *seen_in_rule.lock().unwrap() =
                    Some((r.content_type().map(str::to_owned), r.content_length()));
                r.bucket() == Some("test-bucket") && r.key() == Some("test-object")
            })
            .then_output(|| PutObjectOutput::builder().e_tag("\"etag\"").build());
        let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&put_object]);

        let output = client(s3_client)
            .upload()
            .bucket("test-bucket")
            .key("test-object")
            .body(InputStream::from_static(b"hello world"))
            .send()
            .await
            .unwrap();

        assert_eq!(11, output.size());
        assert_eq!(Some("\"etag\""), output.e_tag());
        assert_eq!(
            Some((Some("application/octet-stream".to_owned()), Some(11))),
            seen.lock().unwrap().take()
        );
    }

    #[tokio::test]
    async fn test_upload_missing_key() {
        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .then_output(|| PutObjectOutput::builder().build());
        let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&put_object]);

        let err = client(s3_client)
            .upload()
            .bucket("test-bucket")
            .body(InputStream::from_static(b"hello world"))
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
