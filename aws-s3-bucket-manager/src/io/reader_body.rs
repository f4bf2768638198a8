/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use bytes::{BufMut, Bytes, BytesMut};
use http_body_1x::{Frame, SizeHint};
use tokio::io::AsyncRead;
use tokio_util::io::poll_read_buf;

/// Maximum size of a single frame read from the underlying reader
const FRAME_SIZE: usize = 64 * 1024;

/// Request body that pulls exactly `length` bytes from an async reader as it is sent.
///
/// Nothing is read until the body is polled. A reader that ends early fails the body with
/// [`io::ErrorKind::UnexpectedEof`].
pub(super) struct ReaderBody {
    reader: Box<dyn AsyncRead + Send + Sync + Unpin + 'static>,
    pub(super) length: u64,
    remaining: u64,
}

impl ReaderBody {
    pub(super) fn new<R>(reader: R, length: u64) -> Self
    where
        R: AsyncRead + Send + Sync + Unpin + 'static,
    {
        Self {
            reader: Box::new(reader),
            length,
            remaining: length,
        }
    }
}

impl http_body_1x::Body for ReaderBody {
    type Data = Bytes;
    type Error = io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        if this.remaining == 0 {
            return Poll::Ready(None);
        }

        let capacity = cmp::min(this.remaining, FRAME_SIZE as u64) as usize;
        let mut buf = BytesMut::with_capacity(capacity);
        let read = {
            let mut limited = (&mut buf).limit(capacity);
            ready!(poll_read_buf(Pin::new(&mut this.reader), cx, &mut limited))
        };

        let result = match read {
            Ok(0) => {
                let produced = this.length - this.remaining;
                // stop here, later polls end the body
                this.remaining = 0;
                Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!(
                        "expected {} bytes but the reader ended after {produced}",
                        this.length
                    ),
                ))
            }
            Ok(n) => {
                this.remaining -= n as u64;
                Ok(Frame::data(buf.freeze()))
            }
            Err(err) => Err(err),
        };
        Poll::Ready(Some(result))
    }

    fn is_end_stream(&self) -> bool {
        self.remaining == 0
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::with_exact(self.remaining)
    }
}

impl fmt::Debug for ReaderBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderBody(dyn AsyncRead)")
            .field("length", &self.length)
            .field("remaining", &self.remaining)
            .finish()
    }
}
