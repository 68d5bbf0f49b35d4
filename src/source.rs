/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Source configuration parsing, validation, and credential resolution.

use crate::error::SourceError;
use crate::region;
use crate::sts;
use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_credential_types::Credentials;
use aws_types::region::Region;
use aws_types::SdkConfig;
use serde::Deserialize;
use std::fmt;
use std::fmt::{Debug, Formatter};

const STATIC_PROVIDER_NAME: &str = "Static";

/// Raw `source` payload as supplied by the pipeline definition.
///
/// Fields are checked by [`Source::resolve`] rather than at decode time so
/// that a missing required field is reported by name instead of as a generic
/// decode error. Unknown fields are ignored.
#[derive(Clone, Deserialize)]
pub struct SourceSpec {
    name: Option<String>,
    region: Option<String>,
    access_key: Option<String>,
    secret_key: Option<String>,
    notification_arns: Option<Vec<String>>,
    #[serde(rename = "sts-role-arn")]
    sts_role_arn: Option<String>,
}

impl SourceSpec {
    /// Decodes a source document from its JSON representation.
    pub fn from_json(document: &str) -> Result<Self, SourceError> {
        serde_json::from_str(document).map_err(SourceError::InvalidDocument)
    }
}

impl Debug for SourceSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceSpec")
            .field("name", &self.name)
            .field("region", &self.region)
            .field("access_key", &self.access_key.as_ref().map(|_| "** redacted **"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "** redacted **"))
            .field("notification_arns", &self.notification_arns)
            .field("sts_role_arn", &self.sts_role_arn)
            .finish()
    }
}

/// A fully resolved source configuration.
///
/// Construction performs all validation and any role assumption up front, so
/// a value of this type always carries a supported region and a usable
/// credentials provider.
pub struct Source {
    name: String,
    region: Region,
    credentials: SharedCredentialsProvider,
    notification_arns: Vec<String>,
}

impl Source {
    /// Validates `spec` and resolves it into a usable configuration.
    ///
    /// `base` supplies ambient wiring: its credentials provider backs
    /// configurations without a static key pair, and its HTTP client, time
    /// source, and behavior version are reused for the role assumption call.
    /// Production callers pass the output of [`aws_config::load_defaults`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingField`] when `name` or `region` is
    /// absent, [`SourceError::InvalidConfiguration`] when exactly one of
    /// `access_key`/`secret_key` is set, [`SourceError::UnknownRegion`] when
    /// the region is not in the supported catalog, and
    /// [`SourceError::RoleAssumption`] when an `sts-role-arn` is configured
    /// and the exchange fails. Role assumption failures are fatal and are
    /// never retried or papered over with the caller's own credentials.
    pub async fn resolve(spec: SourceSpec, base: &SdkConfig) -> Result<Self, SourceError> {
        let name = spec.name.ok_or(SourceError::MissingField("name"))?;
        let region_id = spec.region.ok_or(SourceError::MissingField("region"))?;
        if spec.access_key.is_some() != spec.secret_key.is_some() {
            return Err(SourceError::InvalidConfiguration(
                "access_key and secret_key must be provided together",
            ));
        }
        let region = region::lookup(&region_id).ok_or(SourceError::UnknownRegion(region_id))?;

        let caller = match spec.access_key.zip(spec.secret_key) {
            Some((access_key, secret_key)) => {
                tracing::debug!("using statically configured credentials");
                SharedCredentialsProvider::new(Credentials::new(
                    access_key,
                    secret_key,
                    None,
                    None,
                    STATIC_PROVIDER_NAME,
                ))
            }
            None => match base.credentials_provider() {
                Some(provider) => provider,
                None => {
                    tracing::debug!("no credentials configured, using the default provider chain");
                    SharedCredentialsProvider::new(
                        DefaultCredentialsChain::builder()
                            .region(region.clone())
                            .build()
                            .await,
                    )
                }
            },
        };

        let credentials = match spec.sts_role_arn.as_deref().filter(|arn| !arn.is_empty()) {
            Some(role_arn) => {
                let assumed = sts::assume_role(base, region.clone(), caller, role_arn).await?;
                SharedCredentialsProvider::new(assumed)
            }
            None => caller,
        };

        let notification_arns = spec.notification_arns.unwrap_or_default();
        tracing::debug!(name = %name, region = %region, "resolved source configuration");
        Ok(Self {
            name,
            region,
            credentials,
            notification_arns,
        })
    }

    /// Stack name this source manages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region every stack operation is issued against.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Credentials provider for downstream service clients.
    pub fn credentials(&self) -> SharedCredentialsProvider {
        self.credentials.clone()
    }

    /// SNS topics to notify about stack events, in pipeline order.
    pub fn notification_arns(&self) -> &[String] {
        &self.notification_arns
    }
}

impl Debug for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("name", &self.name)
            .field("region", &self.region)
            .field("credentials", &"** redacted **")
            .field("notification_arns", &self.notification_arns)
            .finish()
    }
}
