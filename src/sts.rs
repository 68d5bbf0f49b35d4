/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Role assumption for pipeline deployments.

pub(crate) mod util;

use crate::error::SourceError;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_credential_types::Credentials;
use aws_sdk_sts::config::retry::RetryConfig;
use aws_types::region::Region;
use aws_types::SdkConfig;
use std::time::SystemTime;

const PROVIDER_NAME: &str = "AssumeRoleProvider";
const SESSION_DURATION_SECONDS: i32 = 3600;

/// Exchanges the caller's credentials for temporary ones scoped to `role_arn`.
///
/// A failure here is terminal for the resource invocation, so the STS client
/// is built without retries and the error is surfaced as-is.
pub(crate) async fn assume_role(
    base: &SdkConfig,
    region: Region,
    provider: SharedCredentialsProvider,
    role_arn: &str,
) -> Result<Credentials, SourceError> {
    let config = aws_sdk_sts::config::Builder::from(base)
        .region(region)
        .credentials_provider(provider)
        .retry_config(RetryConfig::disabled())
        .build();
    let client = aws_sdk_sts::Client::from_conf(config);

    let now = base.time_source().unwrap_or_default().now();
    let session_name = util::session_name(role_arn, now);
    tracing::debug!(role_arn = %role_arn, session_name = %session_name, "assuming deployment role");

    let assumed = client
        .assume_role()
        .role_arn(role_arn)
        .role_session_name(session_name)
        .duration_seconds(SESSION_DURATION_SECONDS)
        .send()
        .await
        .map_err(|err| SourceError::RoleAssumption(err.into()))?;
    let sts_credentials = assumed
        .credentials()
        .ok_or_else(|| SourceError::RoleAssumption("STS response contained no credentials".into()))?;

    let expiration = SystemTime::try_from(*sts_credentials.expiration())
        .map_err(|err| SourceError::RoleAssumption(err.into()))?;
    tracing::debug!(expiry = ?expiration, "obtained assumed credentials");
    Ok(Credentials::new(
        sts_credentials.access_key_id(),
        sts_credentials.secret_access_key(),
        Some(sts_credentials.session_token().to_string()),
        Some(expiration),
        PROVIDER_NAME,
    ))
}
