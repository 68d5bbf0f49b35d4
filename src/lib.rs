/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

//! Source configuration for a Concourse CloudFormation resource.
//!
//! A pipeline configures the resource with a JSON `source` object naming the
//! stack, the region to deploy into, and how to obtain AWS credentials:
//! a static key pair, the ambient provider chain, or temporary session
//! credentials from an STS `AssumeRole` exchange. [`Source::resolve`]
//! validates the document and performs that exchange, yielding the name,
//! region, credentials provider, and notification targets that the stack
//! operations run with.
//!
//! # Examples
//!
//! ```no_run
//! use concourse_cloudformation_resource::{Source, SourceSpec};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = SourceSpec::from_json(
//!     r#"{
//!         "name": "my-stack",
//!         "region": "us-east-1",
//!         "sts-role-arn": "arn:aws:iam::123456789012:role/ci-deploy"
//!     }"#,
//! )?;
//! let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let source = Source::resolve(spec, &config).await?;
//! println!("deploying {} to {}", source.name(), source.region());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod region;
pub mod source;
mod sts;

pub use error::SourceError;
pub use source::{Source, SourceSpec};
