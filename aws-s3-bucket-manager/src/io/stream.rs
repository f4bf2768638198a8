/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;
use aws_smithy_types::body::SdkBody;
use aws_smithy_types::byte_stream::Length;
use bytes::Bytes;
use tokio::io::AsyncRead;

use crate::error::{self, Error, ErrorKind};

use super::path_body::{PathBody, PathBodyBuilder};
use super::reader_body::ReaderBody;

/// Source of binary data for an object.
///
/// `InputStream` wraps an in-memory buffer, a file or an async reader. The length of the data
/// is always known up front.
#[derive(Debug)]
pub struct InputStream {
    pub(super) inner: RawInputStream,
}

impl InputStream {
    /// Create a new `InputStream` from a static byte slice
    pub fn from_static(bytes: &'static [u8]) -> Self {
        let inner = RawInputStream::Buf(bytes.into());
        Self { inner }
    }

    /// Returns a [`PathBodyBuilder`], allowing you to build a `InputStream` with
    /// full control over how the file is read (eg. specifying the length of the file).
    ///
    /// ```no_run
    /// # {
    /// use aws_s3_bucket_manager::io::InputStream;
    ///
    /// fn input_stream_from_file() -> InputStream {
    ///     let stream = InputStream::read_from()
    ///         .path("docs/some-large-file.csv")
    ///         // Specify the length of the file used (skips reading the file metadata)
    ///         .length(123_456)
    ///         .build()
    ///         .expect("valid path");
    ///     stream
    /// }
    /// # }
    /// ```
    pub fn read_from() -> PathBodyBuilder {
        PathBodyBuilder::new()
    }

    /// Create a new `InputStream` that reads data from a given `path`.
    ///
    /// The contents of the file MUST not change before the upload completes; the length is
    /// read once, here.
    pub fn from_path(path: impl AsRef<Path>) -> Result<InputStream, Error> {
        Self::read_from().path(path).build()
    }

    /// Create a new `InputStream` that reads exactly `length` bytes from `reader`.
    ///
    /// The reader is consumed while the request is sent, it is never buffered in full.
    /// Uploading fails if the reader ends before `length` bytes were read.
    pub fn from_reader<R>(reader: R, length: u64) -> Self
    where
        R: AsyncRead + Send + Sync + Unpin + 'static,
    {
        let inner = RawInputStream::Reader(ReaderBody::new(reader, length));
        Self { inner }
    }

    /// The number of bytes this stream will produce
    pub fn length(&self) -> u64 {
        match &self.inner {
            RawInputStream::Buf(bytes) => bytes.len() as u64,
            RawInputStream::Fs(path_body) => path_body.length,
            RawInputStream::Reader(reader_body) => reader_body.length,
        }
    }

    /// Converts `InputStream` to a ByteStream that can be used in PutObject.
    pub(crate) async fn into_byte_stream(self) -> Result<ByteStream, Error> {
        match self.inner {
            RawInputStream::Buf(bytes) => Ok(ByteStream::from(bytes)),
            RawInputStream::Fs(path_body) => ByteStream::read_from()
                .path(path_body.path)
                .length(Length::Exact(path_body.length))
                .build()
                .await
                .map_err(error::from_kind(ErrorKind::IOError)),
            RawInputStream::Reader(reader_body) => {
                Ok(ByteStream::new(SdkBody::from_body_1_x(reader_body)))
            }
        }
    }
}

#[derive(Debug)]
pub(super) enum RawInputStream {
    /// In-memory buffer to read from
    Buf(Bytes),
    /// File based input
    Fs(PathBody),
    /// Caller provided reader of known length
    Reader(ReaderBody),
}

impl Default for InputStream {
    fn default() -> Self {
        Self {
            inner: RawInputStream::Buf(Bytes::default()),
        }
    }
}

impl From<Bytes> for InputStream {
    fn from(value: Bytes) -> Self {
        Self {
            inner: RawInputStream::Buf(value),
        }
    }
}

impl From<Vec<u8>> for InputStream {
    fn from(value: Vec<u8>) -> Self {
        Self::from(Bytes::from(value))
    }
}

impl From<&'static [u8]> for InputStream {
    fn from(slice: &'static [u8]) -> InputStream {
        Self::from(Bytes::from_static(slice))
    }
}

impl From<&'static str> for InputStream {
    fn from(slice: &'static str) -> InputStream {
        Self::from(Bytes::from_static(slice.as_bytes()))
    }
}
