/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Failures surfaced while resolving a source configuration.

use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The reasons source resolution can fail.
///
/// Every variant is fatal: resolution either produces a fully populated
/// [`Source`](crate::Source) or one of these. There is no partial success and
/// no retry.
#[derive(Debug)]
#[non_exhaustive]
pub enum SourceError {
    /// The configuration payload was not a valid JSON source document
    InvalidDocument(serde_json::Error),

    /// A required field (`name`, `region`) was not set
    MissingField(&'static str),

    /// Optional fields were supplied in an unusable combination
    ///
    /// For example, an `access_key` without a `secret_key`.
    InvalidConfiguration(&'static str),

    /// The configured region matches no entry in the supported region catalog
    UnknownRegion(String),

    /// The STS `AssumeRole` exchange failed
    ///
    /// Covers transport errors, access-denied responses, malformed role ARNs,
    /// and responses missing required credential fields. The call is never
    /// retried and there is no fallback to the base credentials.
    RoleAssumption(Box<dyn Error + Send + Sync + 'static>),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::InvalidDocument(err) => {
                write!(f, "configuration is not a valid source document: {}", err)
            }
            SourceError::MissingField(field) => {
                write!(f, "required field `{}` is not set", field)
            }
            SourceError::InvalidConfiguration(msg) => write!(f, "{}", msg),
            SourceError::UnknownRegion(region) => {
                write!(f, "`{}` is not a supported region", region)
            }
            SourceError::RoleAssumption(err) => write!(f, "failed to assume role: {}", err),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SourceError::InvalidDocument(err) => Some(err),
            SourceError::RoleAssumption(err) => Some(err.as_ref() as _),
            _ => None,
        }
    }
}
