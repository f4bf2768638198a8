/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_bucket_manager::error::ErrorKind;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use test_common::MockBucket;

fn client(bucket: &MockBucket) -> aws_s3_bucket_manager::Client {
    let config = aws_s3_bucket_manager::Config::builder()
        .client(bucket.client())
        .build()
        .unwrap();
    aws_s3_bucket_manager::Client::new(config)
}

#[tokio::test]
async fn test_purge_leaves_no_objects() {
    for count in [0, 1, 1000, 2500] {
        let bucket = MockBucket::with_objects("test-bucket", count);
        let sut = client(&bucket);

        let handle = sut
            .purge_bucket()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();
        let output = handle.join().await.unwrap();

        assert_eq!(count as u64, output.objects_deleted(), "{count} objects");
        assert!(output.failed_deletions().is_empty());
        assert!(bucket.keys().is_empty(), "{count} objects");
    }
}

#[tokio::test]
async fn test_purge_empty_bucket_is_noop() {
    let bucket = MockBucket::with_objects("test-bucket", 0);
    let sut = client(&bucket);

    let output = sut
        .purge_bucket()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap()
        .join()
        .await
        .unwrap();

    assert_eq!(0, output.objects_deleted());
    assert_eq!(1, bucket.list_calls());
    assert_eq!(0, bucket.delete_calls());
}

#[tokio::test]
async fn test_purge_across_pages() {
    let bucket = MockBucket::with_objects("test-bucket", 2500).page_size(300);
    let sut = client(&bucket);

    let output = sut
        .purge_bucket()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap()
        .join()
        .await
        .unwrap();

    assert_eq!(2500, output.objects_deleted());
    assert!(bucket.keys().is_empty());
    // at most 1000 keys per DeleteObjects request
    assert!(bucket.delete_calls() >= 3);
}

#[tokio::test]
async fn test_purge_key_prefix() {
    let bucket = MockBucket::with_objects("test-bucket", 3)
        .object("logs/a.log")
        .object("logs/b.log");
    let sut = client(&bucket);

    let output = sut
        .purge_bucket()
        .bucket("test-bucket")
        .key_prefix("key-")
        .send()
        .await
        .unwrap()
        .join()
        .await
        .unwrap();

    assert_eq!(3, output.objects_deleted());
    assert_eq!(
        vec!["logs/a.log".to_owned(), "logs/b.log".to_owned()],
        bucket.keys()
    );
}

#[tokio::test]
async fn test_enumeration_failure_is_reported() {
    let (_guard, rx) = capture_test_logs();
    let bucket = MockBucket::with_objects("test-bucket", 5000)
        .page_size(1000)
        .fail_listing_on_call(3);
    let sut = client(&bucket);

    let handle = sut
        .purge_bucket()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap();
    let err = handle.join().await.unwrap_err();

    assert_eq!(&ErrorKind::EnumerationFailed, err.kind());
    assert!(format!("{}", DisplayErrorContext(&err)).contains("AccessDenied"));
    // the keys listed before the failure may or may not have been deleted
    assert!(bucket.keys().len() >= 3000);
    assert!(rx.contents().contains("failed to list objects"));
}

#[tokio::test]
async fn test_locked_objects_are_aggregated() {
    let (_guard, rx) = capture_test_logs();
    let bucket = MockBucket::with_objects("test-bucket", 10).lock_key("locked.bin");
    let sut = client(&bucket);

    let output = sut
        .purge_bucket()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap()
        .join()
        .await
        .unwrap();

    assert_eq!(10, output.objects_deleted());
    let failed = output.failed_deletions();
    assert_eq!(1, failed.len());
    assert_eq!(Some("locked.bin"), failed[0].key());
    assert_eq!(Some("AccessDenied"), failed[0].code());
    assert_eq!(vec!["locked.bin".to_owned()], bucket.keys());
    assert!(rx.contents().contains("failed to delete"));
}

#[tokio::test]
async fn test_rejected_delete_request_fails_purge() {
    let bucket = MockBucket::with_objects("test-bucket", 10).fail_deletes();
    let sut = client(&bucket);

    let err = sut
        .purge_bucket()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap()
        .join()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::DeletionFailed, err.kind());
    assert_eq!(10, bucket.keys().len());
}

#[tokio::test]
async fn test_abort_stops_purge() {
    let bucket = MockBucket::with_objects("test-bucket", 3000).page_size(100);
    let sut = client(&bucket);

    let mut handle = sut
        .purge_bucket()
        .bucket("test-bucket")
        .send()
        .await
        .unwrap();

    handle.abort().await.unwrap();

    // listing stopped well before the 30 pages the bucket holds
    assert!(bucket.list_calls() < 30, "{} pages listed", bucket.list_calls());
    assert!(!bucket.keys().is_empty());

    // the aborted handle still joins with the partial result
    let output = handle.join().await.unwrap();
    assert!(output.objects_deleted() < 3000);
    assert_eq!(3000 - output.objects_deleted() as usize, bucket.keys().len());
}

#[tokio::test]
async fn test_purge_requires_bucket() {
    let bucket = MockBucket::with_objects("test-bucket", 1);
    let err = client(&bucket)
        .purge_bucket()
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::InputInvalid, err.kind());
    assert_eq!(0, bucket.list_calls());
}
