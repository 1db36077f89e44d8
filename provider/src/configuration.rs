// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use clap::Parser;

use crate::constants::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ProviderOptions {
    #[arg(long, default_value = DEFAULT_HTTP_HOST, env("PROVIDER_HTTP_HOST"))]
    pub host: String,
    #[arg(long, default_value_t = DEFAULT_HTTP_PORT, env("PROVIDER_HTTP_PORT"))]
    pub port: u16,
    /// Region used when a handler request does not name one.
    #[arg(long, env("AWS_REGION"))]
    pub region: Option<String>,
    /// Overrides the Parameter Store endpoint, e.g. for a local emulator.
    #[arg(long, env("PROVIDER_SSM_ENDPOINT_URL"))]
    pub endpoint_url: Option<String>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        ProviderOptions {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            region: None,
            endpoint_url: None,
        }
    }
}
