/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static catalog of supported AWS regions.
//!
//! The CI resource must reject configurations that name a region it cannot
//! deploy to before any network traffic happens, so region validation runs
//! against this offline table rather than a live endpoint lookup.

use aws_types::region::Region;

/// Region identifiers the resource will accept, across the commercial,
/// China, GovCloud, and ISO partitions.
const SUPPORTED: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "mx-central-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-iso-east-1",
    "us-iso-west-1",
    "us-isob-east-1",
    "us-west-1",
    "us-west-2",
];

/// Returns true if `id` names a region in the supported catalog.
///
/// Matching is exact and case-sensitive, mirroring how region codes appear
/// on ARNs and endpoints.
pub fn is_valid(id: &str) -> bool {
    SUPPORTED.contains(&id)
}

/// Resolves a region identifier against the catalog.
pub(crate) fn lookup(id: &str) -> Option<Region> {
    SUPPORTED
        .iter()
        .copied()
        .find(|entry| *entry == id)
        .map(Region::from_static)
}
