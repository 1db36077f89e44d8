// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # Secure Parameter Provider
//!
//! A CloudFormation resource provider that manages `SecureString` parameters
//! in AWS Systems Manager Parameter Store.
//!
//! ## Architecture
//!
//! ```text
//! CloudFormation -> HTTP (routes) -> ParameterResourceHandler -> ParameterStore -> SSM
//!                        |
//!                        +-> Session (region + caller credentials, one client per call)
//! ```
//!
//! Every lifecycle operation is a single Parameter Store call. The provider
//! keeps no state between invocations; the parameter store is the only
//! persistence.
//!
//! ## Modules
//!
//! - [`application`]: HTTP server setup with Axum
//! - [`configuration`]: CLI argument parsing with clap
//! - [`constants`]: Configuration constants and handler messages
//! - [`errors`]: Handler error type and CloudFormation error code mapping
//! - [`handler`]: The five lifecycle handlers
//! - [`models`]: Resource model and handler request/response envelopes
//! - [`routes`]: HTTP route handlers (health, invoke)
//! - [`session`]: Per-invocation client construction
//! - [`store`]: Parameter Store seam and its SSM implementation
//!
//! ## Usage
//!
//! ```bash
//! secure-parameter-provider --host 127.0.0.1 --port 8080 --region us-east-1
//! ```
//!
//! ## Security Considerations
//!
//! - Parameter values and caller credentials are redacted from `Debug` output
//! - Caller credentials are zeroized on drop
//! - Parameters are always written as `SecureString`

pub mod application;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod handler;
pub mod models;
pub mod routes;
pub mod session;
pub mod store;
