// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1 MiB

/// Name reported by the static credentials provider built from caller credentials.
pub const CALLER_CREDENTIALS_PROVIDER: &str = "CloudFormationCallerCredentials";

pub const CREATE_COMPLETE: &str = "Create complete";
pub const READ_COMPLETE: &str = "Read complete";
pub const UPDATE_COMPLETE: &str = "Update complete";
pub const DELETE_COMPLETE: &str = "Delete complete";
