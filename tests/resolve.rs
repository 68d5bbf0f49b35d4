/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_credential_types::Credentials;
use aws_types::SdkConfig;
use concourse_cloudformation_resource::{Source, SourceError, SourceSpec};

async fn resolve(document: &str) -> Result<Source, SourceError> {
    Source::resolve(SourceSpec::from_json(document)?, &SdkConfig::builder().build()).await
}

#[tokio::test]
async fn static_pair_resolves_verbatim() {
    let source = resolve(
        r#"{"name": "stack1", "region": "us-east-1", "access_key": "AK", "secret_key": "SK"}"#,
    )
    .await
    .expect("valid configuration");
    assert_eq!(source.name(), "stack1");
    assert_eq!(source.region().as_ref(), "us-east-1");
    assert!(source.notification_arns().is_empty());

    let credentials = source
        .credentials()
        .provide_credentials()
        .await
        .expect("static credentials are always available");
    assert_eq!(credentials.access_key_id(), "AK");
    assert_eq!(credentials.secret_access_key(), "SK");
    assert_eq!(credentials.session_token(), None);
}

#[tokio::test]
async fn every_supported_region_resolves_to_itself() {
    for id in ["us-east-1", "eu-central-1", "ap-southeast-2", "us-gov-west-1"] {
        let document = format!(
            r#"{{"name": "stack1", "region": "{}", "access_key": "AK", "secret_key": "SK"}}"#,
            id
        );
        let source = resolve(&document).await.expect("supported region");
        assert_eq!(source.region().as_ref(), id);
    }
}

#[tokio::test]
async fn unknown_region_is_rejected() {
    let err = resolve(
        r#"{"name": "stack1", "region": "bogus-region", "access_key": "AK", "secret_key": "SK"}"#,
    )
    .await
    .expect_err("unsupported region");
    assert!(matches!(err, SourceError::UnknownRegion(ref region) if region == "bogus-region"));
    assert_eq!(err.to_string(), "`bogus-region` is not a supported region");
}

#[tokio::test]
async fn lone_access_key_is_rejected() {
    let err = resolve(r#"{"name": "stack1", "region": "us-east-1", "access_key": "AK"}"#)
        .await
        .expect_err("secret_key is required alongside access_key");
    assert!(matches!(err, SourceError::InvalidConfiguration(_)));
    assert_eq!(
        err.to_string(),
        "access_key and secret_key must be provided together"
    );
}

#[tokio::test]
async fn lone_secret_key_is_rejected() {
    let err = resolve(r#"{"name": "stack1", "region": "us-east-1", "secret_key": "SK"}"#)
        .await
        .expect_err("access_key is required alongside secret_key");
    assert!(matches!(err, SourceError::InvalidConfiguration(_)));
}

#[tokio::test]
async fn missing_name_is_rejected() {
    let err = resolve(r#"{"region": "us-east-1"}"#)
        .await
        .expect_err("name is required");
    assert!(matches!(err, SourceError::MissingField("name")));
    assert_eq!(err.to_string(), "required field `name` is not set");
}

#[tokio::test]
async fn missing_region_is_rejected() {
    let err = resolve(r#"{"name": "stack1"}"#)
        .await
        .expect_err("region is required");
    assert!(matches!(err, SourceError::MissingField("region")));
}

#[tokio::test]
async fn ambient_credentials_come_from_the_base_config() {
    let base = SdkConfig::builder()
        .credentials_provider(SharedCredentialsProvider::new(Credentials::for_tests()))
        .build();
    let spec = SourceSpec::from_json(r#"{"name": "stack1", "region": "eu-west-2"}"#)
        .expect("valid document");
    let source = Source::resolve(spec, &base)
        .await
        .expect("keyless configuration defers to the ambient provider");

    let credentials = source
        .credentials()
        .provide_credentials()
        .await
        .expect("ambient credentials");
    assert_eq!(
        credentials.access_key_id(),
        Credentials::for_tests().access_key_id()
    );
}

#[tokio::test]
async fn notification_order_is_preserved() {
    let source = resolve(
        r#"{
            "name": "stack1",
            "region": "us-east-1",
            "access_key": "AK",
            "secret_key": "SK",
            "notification_arns": ["arn:a", "arn:b"]
        }"#,
    )
    .await
    .expect("valid configuration");
    assert_eq!(source.notification_arns(), ["arn:a", "arn:b"]);
}

#[tokio::test]
async fn empty_role_arn_is_ignored() {
    let source = resolve(
        r#"{
            "name": "stack1",
            "region": "us-east-1",
            "access_key": "AK",
            "secret_key": "SK",
            "sts-role-arn": ""
        }"#,
    )
    .await
    .expect("an empty role ARN disables role assumption");
    let credentials = source
        .credentials()
        .provide_credentials()
        .await
        .expect("static credentials");
    assert_eq!(credentials.access_key_id(), "AK");
}

#[tokio::test]
async fn debug_output_redacts_credentials() {
    let source = resolve(
        r#"{"name": "stack1", "region": "us-east-1", "access_key": "AKIDEXAMPLE", "secret_key": "supersecret"}"#,
    )
    .await
    .expect("valid configuration");
    let rendered = format!("{:?}", source);
    assert!(!rendered.contains("AKIDEXAMPLE"));
    assert!(!rendered.contains("supersecret"));
    assert!(rendered.contains("** redacted **"));
}
