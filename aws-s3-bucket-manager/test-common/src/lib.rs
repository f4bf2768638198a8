/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

use aws_sdk_s3::error::ErrorMetadata;
use aws_sdk_s3::operation::{
    create_bucket::{CreateBucketError, CreateBucketOutput},
    delete_objects::{DeleteObjectsError, DeleteObjectsOutput},
    head_bucket::{HeadBucketError, HeadBucketOutput},
    list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
    put_object::PutObjectOutput,
};
use aws_sdk_s3::types::Object;
use aws_smithy_mocks_experimental::{mock, mock_client, Rule, RuleMode};
use tempfile::NamedTempFile;

/// Write a temporary file of `size` bytes with the given file name suffix (e.g. `.zip`)
pub fn create_test_file(suffix: &str, size: usize) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    let data: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
    file.write_all(&data).unwrap();
    file.flush().unwrap();
    file
}

#[derive(Debug, Default)]
struct BucketState {
    exists: bool,
    // key -> content length
    objects: BTreeMap<String, i64>,
    // keys protected by an object lock
    locked: BTreeSet<String>,
    page_size: usize,
    list_calls: usize,
    fail_listing_on_call: Option<usize>,
    fail_deletes: bool,
    delete_calls: usize,
    // responses computed by a matcher, handed out by the matching rule's output
    next_list_output: Option<ListObjectsV2Output>,
    next_delete_output: Option<DeleteObjectsOutput>,
}

/// Stateful in-memory bucket backing a mocked S3 client.
///
/// Requests mutate the bucket as a real service would: created buckets exist afterwards,
/// uploaded keys are listed and deleted keys disappear. State changes happen while a request
/// is matched, so the bucket only supports one in-flight request per operation at a time.
#[derive(Debug, Clone)]
pub struct MockBucket {
    name: String,
    state: Arc<Mutex<BucketState>>,
}

impl MockBucket {
    /// A bucket that does not exist yet
    pub fn new(name: impl Into<String>) -> Self {
        let state = BucketState {
            page_size: 1000,
            ..Default::default()
        };
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// An existing bucket holding `count` objects named `key-00000`, `key-00001`, ...
    pub fn with_objects(name: impl Into<String>, count: usize) -> Self {
        let bucket = Self::new(name);
        {
            let mut state = bucket.state();
            state.exists = true;
            for i in 0..count {
                state.objects.insert(format!("key-{i:05}"), 1);
            }
        }
        bucket
    }

    /// The bucket name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of keys returned per `ListObjectsV2` page
    pub fn page_size(self, page_size: usize) -> Self {
        self.state().page_size = page_size;
        self
    }

    /// Fail the `n`th (1-based) `ListObjectsV2` request and every one after it
    pub fn fail_listing_on_call(self, n: usize) -> Self {
        self.state().fail_listing_on_call = Some(n);
        self
    }

    /// Reject every `DeleteObjects` request
    pub fn fail_deletes(self) -> Self {
        self.state().fail_deletes = true;
        self
    }

    /// Store an object under `key`
    pub fn object(self, key: impl Into<String>) -> Self {
        self.state().objects.insert(key.into(), 1);
        self
    }

    /// Protect `key` with an object lock that cannot be bypassed
    pub fn lock_key(self, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut state = self.state();
        state.objects.entry(key.clone()).or_insert(1);
        state.locked.insert(key);
        drop(state);
        self
    }

    /// Whether the bucket has been created
    pub fn exists(&self) -> bool {
        self.state().exists
    }

    /// The keys currently stored, in lexicographic order
    pub fn keys(&self) -> Vec<String> {
        self.state().objects.keys().cloned().collect()
    }

    /// The stored content length of `key`
    pub fn content_length(&self, key: &str) -> Option<i64> {
        self.state().objects.get(key).copied()
    }

    /// Number of `ListObjectsV2` requests served so far
    pub fn list_calls(&self) -> usize {
        self.state().list_calls
    }

    /// Number of `DeleteObjects` requests served so far
    pub fn delete_calls(&self) -> usize {
        self.state().delete_calls
    }

    fn state(&self) -> MutexGuard<'_, BucketState> {
        self.state.lock().unwrap()
    }

    /// The mock rules representing this bucket.
    ///
    /// Rules are meant for [`RuleMode::MatchAny`]; their order matters since the first rule
    /// whose matcher accepts a request answers it.
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules = Vec::new();
        rules.extend(self.create_bucket_rules());
        rules.extend(self.head_bucket_rules());
        rules.push(self.put_object_rule());
        rules.extend(self.list_objects_rules());
        rules.extend(self.delete_objects_rules());
        rules
    }

    /// A mocked S3 client backed by this bucket
    pub fn client(&self) -> aws_sdk_s3::Client {
        mock_client!(aws_sdk_s3, RuleMode::MatchAny, self.rules().as_slice())
    }

    fn create_bucket_rules(&self) -> Vec<Rule> {
        let name = self.name.clone();
        let state = self.state.clone();
        let created = mock!(aws_sdk_s3::Client::create_bucket)
            .match_requests(move |r| {
                let mut state = state.lock().unwrap();
                if r.bucket() == Some(name.as_str()) && !state.exists {
                    state.exists = true;
                    return true;
                }
                false
            })
            .then_output(|| CreateBucketOutput::builder().build());

        let owned = mock!(aws_sdk_s3::Client::create_bucket).then_error(|| {
            CreateBucketError::generic(
                ErrorMetadata::builder()
                    .code("BucketAlreadyOwnedByYou")
                    .message("Your previous request to create the named bucket succeeded and you already own it.")
                    .build(),
            )
        });

        vec![created, owned]
    }

    fn head_bucket_rules(&self) -> Vec<Rule> {
        let name = self.name.clone();
        let state = self.state.clone();
        let found = mock!(aws_sdk_s3::Client::head_bucket)
            .match_requests(move |r| {
                r.bucket() == Some(name.as_str()) && state.lock().unwrap().exists
            })
            .then_output(|| HeadBucketOutput::builder().build());

        let not_found = mock!(aws_sdk_s3::Client::head_bucket).then_error(|| {
            HeadBucketError::generic(ErrorMetadata::builder().code("NotFound").build())
        });

        vec![found, not_found]
    }

    fn put_object_rule(&self) -> Rule {
        let state = self.state.clone();
        mock!(aws_sdk_s3::Client::put_object)
            .match_requests(move |r| {
                let mut state = state.lock().unwrap();
                if let Some(key) = r.key() {
                    state
                        .objects
                        .insert(key.to_owned(), r.content_length().unwrap_or_default());
                }
                true
            })
            .then_output(|| PutObjectOutput::builder().e_tag("\"mock-etag\"").build())
    }

    fn list_objects_rules(&self) -> Vec<Rule> {
        let failing_state = self.state.clone();
        let failed = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(move |_| {
                let mut state = failing_state.lock().unwrap();
                match state.fail_listing_on_call {
                    Some(n) if state.list_calls + 1 >= n => {
                        state.list_calls += 1;
                        true
                    }
                    _ => false,
                }
            })
            .then_error(|| {
                ListObjectsV2Error::generic(
                    ErrorMetadata::builder()
                        .code("AccessDenied")
                        .message("Access Denied")
                        .build(),
                )
            });

        let listing_state = self.state.clone();
        let output_state = self.state.clone();
        let listed = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(move |r| {
                let mut state = listing_state.lock().unwrap();
                state.list_calls += 1;
                let prefix = r.prefix().unwrap_or_default();
                // continuation tokens are the last key of the previous page
                let after = r.continuation_token();
                let mut keys = state
                    .objects
                    .keys()
                    .filter(|k| k.starts_with(prefix))
                    .filter(|k| after.map_or(true, |after| k.as_str() > after))
                    .cloned();
                let page: Vec<String> = keys.by_ref().take(state.page_size).collect();
                let is_truncated = keys.next().is_some();

                let contents = page
                    .iter()
                    .map(|k| Object::builder().key(k).size(1).build())
                    .collect::<Vec<_>>();
                let next_token = if is_truncated {
                    page.last().cloned()
                } else {
                    None
                };
                let output = ListObjectsV2Output::builder()
                    .set_contents(Some(contents))
                    .key_count(page.len() as i32)
                    .is_truncated(is_truncated)
                    .set_next_continuation_token(next_token)
                    .build();
                state.next_list_output = Some(output);
                true
            })
            .then_output(move || {
                output_state
                    .lock()
                    .unwrap()
                    .next_list_output
                    .take()
                    .unwrap_or_else(|| ListObjectsV2Output::builder().build())
            });

        vec![failed, listed]
    }

    fn delete_objects_rules(&self) -> Vec<Rule> {
        let failing_state = self.state.clone();
        let rejected = mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(move |_| {
                let mut state = failing_state.lock().unwrap();
                if state.fail_deletes {
                    state.delete_calls += 1;
                }
                state.fail_deletes
            })
            .then_error(|| {
                DeleteObjectsError::generic(
                    ErrorMetadata::builder()
                        .code("MalformedXML")
                        .message("The XML you provided was not well-formed")
                        .build(),
                )
            });

        let deleting_state = self.state.clone();
        let output_state = self.state.clone();
        let deleted = mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(move |r| {
                let mut state = deleting_state.lock().unwrap();
                state.delete_calls += 1;
                let mut errors = Vec::new();
                for object in r.delete().map(|d| d.objects()).unwrap_or_default() {
                    let key = object.key();
                    if state.locked.contains(key) {
                        errors.push(
                            aws_sdk_s3::types::Error::builder()
                                .key(key)
                                .code("AccessDenied")
                                .message("Object is WORM protected and cannot be overwritten")
                                .build(),
                        );
                    } else {
                        state.objects.remove(key);
                    }
                }
                state.next_delete_output = Some(
                    DeleteObjectsOutput::builder()
                        .set_errors(Some(errors))
                        .build(),
                );
                true
            })
            .then_output(move || {
                output_state
                    .lock()
                    .unwrap()
                    .next_delete_output
                    .take()
                    .unwrap_or_else(|| DeleteObjectsOutput::builder().build())
            });

        vec![rejected, deleted]
    }
}
