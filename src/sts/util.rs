/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::time::{SystemTime, UNIX_EPOCH};

/// STS limits `RoleSessionName` to 64 characters of `[\w+=,.@-]`.
const MAX_SESSION_NAME_LEN: usize = 64;

const FALLBACK_BASE: &str = "cloudformation-resource";

/// Derives a role session name from the role ARN and the current time.
///
/// The final path component of the ARN (the role name) is combined with the
/// epoch-millisecond timestamp so that every resource invocation produces a
/// distinct, attributable session in CloudTrail. Characters STS does not
/// accept are replaced and the result is capped at the service limit.
pub(crate) fn session_name(role_arn: &str, now: SystemTime) -> String {
    let suffix = now
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string();
    let base = role_arn
        .rsplit(['/', ':'])
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(FALLBACK_BASE);
    let mut sanitized: String = base
        .chars()
        .map(|c| if valid_session_char(c) { c } else { '-' })
        .collect();
    // sanitized is pure ASCII at this point, so byte truncation is safe
    sanitized.truncate(MAX_SESSION_NAME_LEN - suffix.len() - 1);
    format!("{}-{}", sanitized, suffix)
}

fn valid_session_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '=' | ',' | '.' | '@' | '-')
}
