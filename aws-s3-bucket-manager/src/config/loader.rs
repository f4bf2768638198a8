/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::env;

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Credentials;
use aws_types::region::Region;

use crate::config::{Builder, StorageConfig, StorageConfigBuilder};
use crate::error::{self, Error};
use crate::Config;

/// Environment variable holding the storage endpoint
pub const ENDPOINT_ENV_VAR: &str = "S3_ENDPOINT";
/// Environment variable holding the access key
pub const ACCESS_KEY_ID_ENV_VAR: &str = "S3_ACCESS_KEY_ID";
/// Environment variable holding the secret key
pub const SECRET_ACCESS_KEY_ENV_VAR: &str = "S3_SECRET_ACCESS_KEY";
/// Environment variable holding the region
pub const REGION_ENV_VAR: &str = "S3_REGION";
/// Environment variable holding the TLS flag
pub const USE_TLS_ENV_VAR: &str = "S3_USE_TLS";

const CREDENTIALS_PROVIDER_NAME: &str = "aws-s3-bucket-manager-static";

/// Load bucket manager [`Config`] from a [`StorageConfig`], optionally seeded from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    storage: StorageConfigBuilder,
}

impl ConfigLoader {
    /// Seed a loader from the `S3_*` environment variables.
    ///
    /// Variables that are not set are left unset; explicit setters called afterwards win.
    pub(crate) fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok();
        let storage = StorageConfigBuilder::default()
            .set_endpoint(var(ENDPOINT_ENV_VAR))
            .set_access_key_id(var(ACCESS_KEY_ID_ENV_VAR))
            .set_secret_access_key(var(SECRET_ACCESS_KEY_ENV_VAR))
            .set_region(var(REGION_ENV_VAR))
            .set_use_tls(var(USE_TLS_ENV_VAR));
        Self { storage }
    }

    /// Host (and optional port) of the storage service
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.storage = self.storage.endpoint(endpoint);
        self
    }

    /// Static access key/secret key pair used to sign every request
    pub fn credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.storage = self
            .storage
            .access_key_id(access_key_id)
            .secret_access_key(secret_access_key);
        self
    }

    /// Region of the storage service
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.storage = self.storage.region(region);
        self
    }

    /// TLS flag, as text (e.g. `"true"` or `"0"`)
    pub fn use_tls(mut self, use_tls: impl Into<String>) -> Self {
        self.storage = self.storage.use_tls(use_tls);
        self
    }

    /// The storage settings collected so far.
    pub fn storage_config(&self) -> StorageConfig {
        self.storage.clone().build()
    }

    /// Build the S3 client described by the collected settings.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid) when the
    /// TLS flag cannot be parsed or a required setting is missing. No request is sent: an
    /// unreachable endpoint only surfaces on first use.
    pub async fn load(self) -> Result<Config, Error> {
        let storage = self.storage.build();
        let endpoint_url = storage.endpoint_url()?;

        let region = storage
            .region()
            .filter(|r| !r.is_empty())
            .map(|r| Region::new(r.to_owned()))
            .ok_or_else(|| error::invalid_config("a region is required"))?;

        let credentials = match (storage.access_key_id(), storage.secret_access_key()) {
            (Some(access_key_id), Some(secret_access_key)) => Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ),
            _ => {
                return Err(error::invalid_config(
                    "an access key id and secret access key are required",
                ))
            }
        };

        tracing::debug!("configuring S3 client for {endpoint_url} in region {region}");

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region.clone())
            .credentials_provider(credentials)
            .endpoint_url(endpoint_url)
            .load()
            .await;

        // S3-compatible servers address buckets by path rather than by virtual host.
        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(true)
            .build();

        Builder::default()
            .region(region)
            .client(aws_sdk_s3::Client::from_conf(s3_config))
            .build()
    }
}

impl From<StorageConfig> for ConfigLoader {
    fn from(value: StorageConfig) -> Self {
        let storage = StorageConfigBuilder::default()
            .set_endpoint(value.endpoint().map(str::to_owned))
            .set_access_key_id(value.access_key_id().map(str::to_owned))
            .set_secret_access_key(value.secret_access_key().map(str::to_owned))
            .set_region(value.region().map(str::to_owned))
            .set_use_tls(value.use_tls().map(str::to_owned));
        Self { storage }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigLoader;
    use crate::error::ErrorKind;

    fn loader() -> ConfigLoader {
        ConfigLoader::default()
            .endpoint("localhost:9000")
            .credentials("minioadmin", "minioadmin")
            .region("us-east-1")
            .use_tls("false")
    }

    #[tokio::test]
    async fn test_load() {
        let config = loader().load().await.unwrap();
        assert_eq!("us-east-1", config.region().unwrap().to_string());
    }

    #[tokio::test]
    async fn test_unparseable_tls_flag() {
        let err = loader().use_tls("not-a-bool").load().await.unwrap_err();
        assert_eq!(&ErrorKind::ConfigInvalid, err.kind());
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let err = ConfigLoader::default()
            .endpoint("localhost:9000")
            .region("us-east-1")
            .load()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::ConfigInvalid, err.kind());
    }

    #[tokio::test]
    async fn test_missing_region() {
        let err = ConfigLoader::default()
            .endpoint("localhost:9000")
            .credentials("minioadmin", "minioadmin")
            .load()
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::ConfigInvalid, err.kind());
    }
}
