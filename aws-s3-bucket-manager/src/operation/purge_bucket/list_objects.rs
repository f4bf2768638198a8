/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::{
    error::SdkError,
    operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Input},
    types::Object,
};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use tracing::Instrument;

use super::PurgeBucketContext;

type ListObjectsResult<T> = Result<T, SdkError<ListObjectsV2Error, HttpResponse>>;

/// Stream of every object key in the bucket (under the input's key prefix).
///
/// Pages are requested one at a time by following the continuation token.
#[derive(Debug)]
pub(super) struct ListObjectsStream {
    context: PurgeBucketContext,
    // continuation token for the next page
    next_token: Option<String>,
    done: bool,
    current_page: std::vec::IntoIter<Object>,
}

impl ListObjectsStream {
    pub(super) fn new(context: PurgeBucketContext) -> Self {
        Self {
            context,
            next_token: None,
            done: false,
            current_page: Vec::new().into_iter(),
        }
    }

    /// The next key, listing a new page when the current one is exhausted.
    ///
    /// Empty pages are skipped. Returns `None` once every page has been listed.
    pub(super) async fn next(&mut self) -> Option<ListObjectsResult<String>> {
        loop {
            if let Some(key) = self.current_page.by_ref().find_map(|object| object.key) {
                return Some(Ok(key));
            }
            if self.done {
                return None;
            }

            let input = &self.context.state.input;
            let list_result = ListObjectsV2Input::builder()
                .set_bucket(input.bucket.to_owned())
                .set_prefix(input.key_prefix.to_owned())
                .set_continuation_token(self.next_token.clone())
                .send_with(self.context.client())
                .instrument(tracing::debug_span!("send-list-objects-v2"))
                .await;

            let mut page = match list_result {
                Ok(page) => page,
                Err(err) => return Some(Err(err)),
            };

            // a truncated page without a token cannot be continued
            self.next_token = page
                .next_continuation_token
                .take()
                .filter(|_| page.is_truncated().unwrap_or(false));
            self.done = self.next_token.is_none();

            let contents = page.contents.take().unwrap_or_default();
            tracing::debug!("listed a page of {} objects", contents.len());
            self.current_page = contents.into_iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use aws_sdk_s3::{
        operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
        types::{error::NoSuchBucket, Object},
    };
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    use crate::operation::purge_bucket::{PurgeBucketContext, PurgeBucketInput};

    use super::ListObjectsStream;

    fn context(s3_client: aws_sdk_s3::Client, key_prefix: Option<&str>) -> PurgeBucketContext {
        let config = crate::Config::builder().client(s3_client).build().unwrap();
        let client = crate::Client::new(config);
        let input = PurgeBucketInput::builder()
            .bucket("test-bucket")
            .set_key_prefix(key_prefix.map(str::to_owned))
            .build()
            .unwrap();
        PurgeBucketContext::new(client.handle.clone(), input)
    }

    fn page(keys: &[&str], next_token: Option<&str>) -> ListObjectsV2Output {
        let contents = keys.iter().map(|k| Object::builder().key(*k).build());
        ListObjectsV2Output::builder()
            .is_truncated(next_token.is_some())
            .set_next_continuation_token(next_token.map(str::to_owned))
            .set_contents(Some(contents.collect()))
            .build()
    }

    async fn collect_keys(stream: &mut ListObjectsStream) -> Vec<String> {
        let mut keys = Vec::new();
        while let Some(key) = stream.next().await {
            keys.push(key.unwrap());
        }
        keys
    }

    #[tokio::test]
    async fn test_follows_continuation_tokens() {
        let first = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token().is_none() && r.prefix() == Some("logs/"))
            .then_output(|| page(&["logs/a", "logs/b"], Some("token-1")));
        // an empty page in the middle of a listing must not end it
        let second = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token-1"))
            .then_output(|| page(&[], Some("token-2")));
        let third = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token-2"))
            .then_output(|| page(&["logs/c"], None));
        let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&first, &second, &third]);

        let mut stream = ListObjectsStream::new(context(s3_client, Some("logs/")));
        let keys = collect_keys(&mut stream).await;

        assert_eq!(vec!["logs/a", "logs/b", "logs/c"], keys);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_truncated_without_token_is_done() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let list_objects = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            })
            .then_output(|| {
                ListObjectsV2Output::builder()
                    .is_truncated(true)
                    .set_contents(Some(vec![Object::builder().key("k1").build()]))
                    .build()
            });
        let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&list_objects]);

        let mut stream = ListObjectsStream::new(context(s3_client, None));
        let keys = collect_keys(&mut stream).await;

        assert_eq!(vec!["k1"], keys);
        assert_eq!(1, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_list_error_surfaced() {
        let list_objects = mock!(aws_sdk_s3::Client::list_objects_v2).then_error(|| {
            ListObjectsV2Error::NoSuchBucket(NoSuchBucket::builder().build())
        });
        let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&list_objects]);

        let mut stream = ListObjectsStream::new(context(s3_client, None));
        let err = stream.next().await.unwrap().unwrap_err();

        assert!(matches!(
            err.into_service_error(),
            ListObjectsV2Error::NoSuchBucket(_)
        ));
    }
}
