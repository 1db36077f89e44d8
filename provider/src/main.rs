// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::Context;
use clap::Parser;
use secure_parameter_provider::application::Application;
use secure_parameter_provider::configuration::ProviderOptions;
use secure_parameter_provider::session::SsmStoreFactory;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("[provider] init");

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        // remove the name of the function from every log entry
        .with_target(false)
        .init();

    // get configuration options from environment variables
    let options = ProviderOptions::parse();

    tracing::info!("[provider] {:?}", &options);

    let stores = Arc::new(SsmStoreFactory::new(&options));

    let application = Application::build(options, stores)
        .await
        .context("failed to bind listener")?;

    application
        .run_until_stopped()
        .await
        .context("server stopped unexpectedly")
}
