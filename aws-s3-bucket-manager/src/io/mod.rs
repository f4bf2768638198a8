/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

mod path_body;
mod reader_body;
mod stream;

// re-exports
pub use self::path_body::PathBodyBuilder;
pub use self::stream::InputStream;
