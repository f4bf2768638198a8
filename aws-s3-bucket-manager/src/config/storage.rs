/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::error::{self, Error};

/// Connection settings for an S3-compatible storage endpoint.
///
/// The TLS flag is kept in its textual form, exactly as it was supplied (e.g. read from the
/// environment), and is only interpreted when a client is constructed from it.
#[non_exhaustive]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    endpoint: Option<String>,
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    region: Option<String>,
    use_tls: Option<String>,
}

impl StorageConfig {
    /// Creates a new builder-style object to manufacture a [`StorageConfig`].
    pub fn builder() -> StorageConfigBuilder {
        StorageConfigBuilder::default()
    }

    /// Host (and optional port) of the storage service, e.g. `play.min.io:9000`.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// The access key used to sign requests.
    pub fn access_key_id(&self) -> Option<&str> {
        self.access_key_id.as_deref()
    }

    /// The secret key used to sign requests.
    pub fn secret_access_key(&self) -> Option<&str> {
        self.secret_access_key.as_deref()
    }

    /// The region (bucket location) to use.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The TLS flag as supplied.
    pub fn use_tls(&self) -> Option<&str> {
        self.use_tls.as_deref()
    }

    /// Interpret the TLS flag.
    ///
    /// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false` and
    /// `False`. When the flag was never set TLS is enabled.
    pub fn parse_use_tls(&self) -> Result<bool, Error> {
        match self.use_tls.as_deref() {
            None => Ok(true),
            Some(flag) => parse_bool(flag),
        }
    }

    /// Full endpoint URL, with a scheme matching the TLS flag.
    ///
    /// A scheme already present on the endpoint must agree with the TLS flag.
    pub(crate) fn endpoint_url(&self) -> Result<String, Error> {
        let use_tls = self.parse_use_tls()?;
        let endpoint = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or_else(|| error::invalid_config("an endpoint is required"))?;

        let scheme = if use_tls { "https" } else { "http" };
        match endpoint.split_once("://") {
            None => Ok(format!("{scheme}://{endpoint}")),
            Some((explicit, _)) if explicit.eq_ignore_ascii_case(scheme) => {
                Ok(endpoint.to_owned())
            }
            Some((explicit, _)) => Err(error::invalid_config(format!(
                "endpoint scheme `{explicit}` does not match the TLS setting (use_tls={use_tls})"
            ))),
        }
    }
}

fn parse_bool(flag: &str) -> Result<bool, Error> {
    match flag {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(error::invalid_config(format!(
            "`{other}` is not a valid boolean for the TLS flag"
        ))),
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("StorageConfig");
        formatter.field("endpoint", &self.endpoint);
        formatter.field("access_key_id", &self.access_key_id);
        formatter.field(
            "secret_access_key",
            &self.secret_access_key.as_ref().map(|_| "** redacted **"),
        );
        formatter.field("region", &self.region);
        formatter.field("use_tls", &self.use_tls);
        formatter.finish()
    }
}

/// A builder for [`StorageConfig`].
#[non_exhaustive]
#[derive(Clone, Default)]
pub struct StorageConfigBuilder {
    pub(crate) endpoint: Option<String>,
    pub(crate) access_key_id: Option<String>,
    pub(crate) secret_access_key: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) use_tls: Option<String>,
}

impl StorageConfigBuilder {
    /// Set the host (and optional port) of the storage service.
    pub fn endpoint(mut self, input: impl Into<String>) -> Self {
        self.endpoint = Some(input.into());
        self
    }

    /// Set the host (and optional port) of the storage service.
    pub fn set_endpoint(mut self, input: Option<String>) -> Self {
        self.endpoint = input;
        self
    }

    /// Set the access key used to sign requests.
    pub fn access_key_id(mut self, input: impl Into<String>) -> Self {
        self.access_key_id = Some(input.into());
        self
    }

    /// Set the access key used to sign requests.
    pub fn set_access_key_id(mut self, input: Option<String>) -> Self {
        self.access_key_id = input;
        self
    }

    /// Set the secret key used to sign requests.
    pub fn secret_access_key(mut self, input: impl Into<String>) -> Self {
        self.secret_access_key = Some(input.into());
        self
    }

    /// Set the secret key used to sign requests.
    pub fn set_secret_access_key(mut self, input: Option<String>) -> Self {
        self.secret_access_key = input;
        self
    }

    /// Set the region.
    pub fn region(mut self, input: impl Into<String>) -> Self {
        self.region = Some(input.into());
        self
    }

    /// Set the region.
    pub fn set_region(mut self, input: Option<String>) -> Self {
        self.region = input;
        self
    }

    /// Set the TLS flag, as text (e.g. `"true"`).
    pub fn use_tls(mut self, input: impl Into<String>) -> Self {
        self.use_tls = Some(input.into());
        self
    }

    /// Set the TLS flag, as text (e.g. `"true"`).
    pub fn set_use_tls(mut self, input: Option<String>) -> Self {
        self.use_tls = input;
        self
    }

    /// Consumes the builder and constructs a [`StorageConfig`].
    pub fn build(self) -> StorageConfig {
        StorageConfig {
            endpoint: self.endpoint,
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            region: self.region,
            use_tls: self.use_tls,
        }
    }
}

impl fmt::Debug for StorageConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.clone().build(), f)
    }
}
