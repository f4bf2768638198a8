/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io::Cursor;

use aws_s3_bucket_manager::error::ErrorKind;
use aws_s3_bucket_manager::io::InputStream;
use aws_sdk_s3::error::{DisplayErrorContext, ErrorMetadata};
use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use test_common::{create_test_file, MockBucket};

fn client(s3_client: aws_sdk_s3::Client) -> aws_s3_bucket_manager::Client {
    let config = aws_s3_bucket_manager::Config::builder()
        .client(s3_client)
        .build()
        .unwrap();
    aws_s3_bucket_manager::Client::new(config)
}

#[tokio::test]
async fn test_upload_reader() {
    let (_guard, rx) = capture_test_logs();
    let bucket = MockBucket::with_objects("test-bucket", 0);
    let sut = client(bucket.client());

    let data: Vec<u8> = std::iter::repeat_with(|| fastrand::u8(..))
        .take(4096)
        .collect();
    let output = sut
        .upload()
        .bucket("test-bucket")
        .key("stream.bin")
        .body(InputStream::from_reader(Cursor::new(data), 4096))
        .send()
        .await
        .unwrap();

    assert_eq!(4096, output.size());
    assert_eq!(Some("stream.bin"), output.key());
    assert_eq!(Some("\"mock-etag\""), output.e_tag());
    assert_eq!(Some(4096), bucket.content_length("stream.bin"));
    assert!(rx
        .contents()
        .contains("successfully uploaded stream.bin of size 4096"));
}

#[tokio::test]
async fn test_upload_file() {
    let file = create_test_file(".zip", 10_000);
    let bucket = MockBucket::with_objects("dev-assets", 0);
    let sut = client(bucket.client());

    let output = sut
        .upload()
        .bucket("dev-assets")
        .key("a.zip")
        .body(InputStream::from_path(file.path()).unwrap())
        .content_type("application/zip")
        .send()
        .await
        .unwrap();

    assert_eq!(10_000, output.size());
    assert_eq!(vec!["a.zip".to_owned()], bucket.keys());
    assert_eq!(Some(10_000), bucket.content_length("a.zip"));
}

#[tokio::test]
async fn test_upload_rejected() {
    let put_object = mock!(aws_sdk_s3::Client::put_object).then_error(|| {
        PutObjectError::generic(
            ErrorMetadata::builder()
                .code("AccessDenied")
                .message("Access Denied")
                .build(),
        )
    });
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&put_object]);

    let err = client(s3_client)
        .upload()
        .bucket("test-bucket")
        .key("denied.txt")
        .body(InputStream::from_static(b"nope"))
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::UploadFailed, err.kind());
    assert!(format!("{}", DisplayErrorContext(&err)).contains("AccessDenied"));
}

#[tokio::test]
async fn test_upload_with_send_with() {
    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|r| r.content_type() == Some("text/plain"))
        .then_output(|| PutObjectOutput::builder().version_id("v1").build());
    let s3_client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&put_object]);
    let sut = client(s3_client);

    let output = aws_s3_bucket_manager::operation::upload::UploadInput::builder()
        .bucket("test-bucket")
        .key("hello.txt")
        .body(InputStream::from("hello"))
        .content_type("text/plain")
        .send_with(&sut)
        .await
        .unwrap();

    assert_eq!(5, output.size());
    assert_eq!(Some("v1"), output.version_id());
}
