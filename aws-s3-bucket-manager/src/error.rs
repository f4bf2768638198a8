/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of bucket manager errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Storage configuration could not be turned into a client (e.g. unparseable TLS flag)
    ConfigInvalid,

    /// Operation input validation issues
    InputInvalid,

    /// The storage endpoint could not be reached
    Connectivity,

    /// Bucket creation failed and the bucket is not owned by the caller
    BucketConflict,

    /// The object could not be stored
    UploadFailed,

    /// Listing objects failed while purging a bucket
    EnumerationFailed,

    /// A batch delete request was rejected
    DeletionFailed,

    /// Resource not found (e.g. bucket or key)
    NotFound,

    /// I/O errors
    IOError,

    /// Some kind of internal runtime issue (e.g. a failed task)
    RuntimeError,

    /// The operation was cancelled, either explicitly through `abort` or because a sibling
    /// task failed.
    OperationCancelled,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::ConfigInvalid => write!(f, "invalid storage configuration"),
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::Connectivity => write!(f, "storage endpoint unreachable"),
            ErrorKind::BucketConflict => write!(f, "bucket could not be created"),
            ErrorKind::UploadFailed => write!(f, "object upload failed"),
            ErrorKind::EnumerationFailed => write!(f, "object enumeration failed"),
            ErrorKind::DeletionFailed => write!(f, "object deletion failed"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
            ErrorKind::OperationCancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_config<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ConfigInvalid, err)
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn from_kind<E>(kind: ErrorKind) -> impl FnOnce(E) -> Error
where
    E: Into<BoxError>,
{
    |err| Error::new(kind, err)
}

/// Classify an SDK error, falling back to `kind` when the failure is specific to the operation.
///
/// Requests that never got a response are reported as [`ErrorKind::Connectivity`] and missing
/// buckets or keys as [`ErrorKind::NotFound`], regardless of the operation.
pub(crate) fn from_sdk<E, R>(kind: ErrorKind) -> impl FnOnce(SdkError<E, R>) -> Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    move |err| {
        let kind = match &err {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => ErrorKind::Connectivity,
            _ => match err.code() {
                Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::NotFound,
                _ => kind,
            },
        };
        Error::new(kind, err)
    }
}

static CANCELLATION_ERROR: &str =
    "the operation has been aborted, no new requests will be started";

pub(crate) fn operation_cancelled() -> Error {
    Error::new(ErrorKind::OperationCancelled, CANCELLATION_ERROR)
}

#[cfg(test)]
mod tests {
    use super::{from_sdk, Error, ErrorKind};
    use aws_sdk_s3::error::{ErrorMetadata, SdkError};
    use aws_sdk_s3::operation::put_object::PutObjectError;
    use aws_smithy_runtime_api::client::result::ConnectorError;

    #[test]
    fn test_dispatch_failure_is_connectivity() {
        let err: SdkError<PutObjectError, ()> =
            SdkError::dispatch_failure(ConnectorError::io("connection refused".into()));
        let err = from_sdk(ErrorKind::UploadFailed)(err);
        assert_eq!(&ErrorKind::Connectivity, err.kind());
    }

    #[test]
    fn test_no_such_bucket_is_not_found() {
        let service_err =
            PutObjectError::generic(ErrorMetadata::builder().code("NoSuchBucket").build());
        let err: SdkError<PutObjectError, ()> = SdkError::service_error(service_err, ());
        let err = from_sdk(ErrorKind::UploadFailed)(err);
        assert_eq!(&ErrorKind::NotFound, err.kind());
    }

    #[test]
    fn test_operation_kind_fallback() {
        let service_err =
            PutObjectError::generic(ErrorMetadata::builder().code("AccessDenied").build());
        let err: SdkError<PutObjectError, ()> = SdkError::service_error(service_err, ());
        let err = from_sdk(ErrorKind::UploadFailed)(err);
        assert_eq!(&ErrorKind::UploadFailed, err.kind());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_failed_task_is_runtime_error() {
        let join_err = tokio::spawn(async { panic!("task failed") })
            .await
            .unwrap_err();
        let err = Error::from(join_err);
        assert_eq!(&ErrorKind::RuntimeError, err.kind());
    }
}
