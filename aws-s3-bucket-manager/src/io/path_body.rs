/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind};
use crate::io::InputStream;

use super::stream::RawInputStream;

/// File body with a known length
#[derive(Debug)]
pub(super) struct PathBody {
    pub(super) path: PathBuf,
    pub(super) length: u64,
}

/// Builder for creating an [`InputStream`] that reads from a file.
#[derive(Debug, Default)]
pub struct PathBodyBuilder {
    path: Option<PathBuf>,
    length: Option<u64>,
}

impl PathBodyBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the path to read from.
    ///
    /// NOTE: A path is required.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Specify the length of the file to read (in bytes).
    ///
    /// By default the length is read from the file metadata.
    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Returns an [`InputStream`] from this builder.
    pub fn build(self) -> Result<InputStream, Error> {
        let path = self
            .path
            .ok_or_else(|| Error::new(ErrorKind::InputInvalid, "path is required"))?;

        let length = match self.length {
            Some(length) => length,
            None => {
                let metadata = std::fs::metadata(&path)?;
                if !metadata.is_file() {
                    return Err(Error::new(
                        ErrorKind::IOError,
                        format!("{} is not a regular file", path.display()),
                    ));
                }
                metadata.len()
            }
        };

        let body = PathBody { path, length };
        Ok(InputStream {
            inner: RawInputStream::Fs(body),
        })
    }
}
