/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_bucket_manager::config::loader::{
    ACCESS_KEY_ID_ENV_VAR, ENDPOINT_ENV_VAR, REGION_ENV_VAR, SECRET_ACCESS_KEY_ENV_VAR,
    USE_TLS_ENV_VAR,
};
use aws_s3_bucket_manager::config::StorageConfig;
use aws_s3_bucket_manager::error::ErrorKind;

fn storage(use_tls: &str) -> StorageConfig {
    StorageConfig::builder()
        .endpoint("localhost:9000")
        .access_key_id("minioadmin")
        .secret_access_key("minioadmin")
        .region("us-east-1")
        .use_tls(use_tls)
        .build()
}

#[tokio::test]
async fn test_configure() {
    let client = aws_s3_bucket_manager::configure(storage("false"))
        .await
        .unwrap();
    assert_eq!(
        Some("us-east-1".to_owned()),
        client.config().region().map(|r| r.to_string())
    );
}

#[tokio::test]
async fn test_configure_unparseable_tls_flag() {
    let err = aws_s3_bucket_manager::configure(storage("not-a-bool"))
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::ConfigInvalid, err.kind());
}

#[test]
fn test_from_env() {
    std::env::set_var(ENDPOINT_ENV_VAR, "play.min.io");
    std::env::set_var(ACCESS_KEY_ID_ENV_VAR, "Q3AM3UQ867SPQQA43P2F");
    std::env::set_var(SECRET_ACCESS_KEY_ENV_VAR, "super-secret");
    std::env::set_var(REGION_ENV_VAR, "us-east-1");
    std::env::set_var(USE_TLS_ENV_VAR, "1");

    let loaded = aws_s3_bucket_manager::from_env()
        .region("eu-west-1")
        .storage_config();

    assert_eq!(Some("play.min.io"), loaded.endpoint());
    assert_eq!(Some("Q3AM3UQ867SPQQA43P2F"), loaded.access_key_id());
    assert_eq!(Some("super-secret"), loaded.secret_access_key());
    // explicit settings win over the environment
    assert_eq!(Some("eu-west-1"), loaded.region());
    assert!(loaded.parse_use_tls().unwrap());
    assert!(!format!("{loaded:?}").contains("super-secret"));
}
