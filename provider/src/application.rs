// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use crate::configuration::ProviderOptions;
use crate::constants::MAX_REQUEST_BODY_SIZE;
use crate::routes;
use crate::session::StoreFactory;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::serve::Serve;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub options: ProviderOptions,
    pub stores: Arc<dyn StoreFactory>,
}

pub struct Application {
    port: u16,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    pub async fn build(
        options: ProviderOptions,
        stores: Arc<dyn StoreFactory>,
    ) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", options.host, options.port);
        let listener = TcpListener::bind(address).await?;
        let server = run(listener, options.clone(), stores)?;
        let port = server.local_addr()?.port();

        tracing::info!("[provider] listening at http://{}:{}", options.host, port);

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Builds the router with the same middleware as production.
pub fn create_router(options: ProviderOptions, stores: Arc<dyn StoreFactory>) -> Router {
    let state = Arc::new(AppState { options, stores });

    Router::new()
        .route("/health", get(routes::health))
        .route("/", post(routes::invoke))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument(skip(listener, stores))]
pub fn run(
    listener: TcpListener,
    options: ProviderOptions,
    stores: Arc<dyn StoreFactory>,
) -> Result<Serve<TcpListener, Router, Router>, std::io::Error> {
    let app = create_router(options, stores);
    Ok(axum::serve(listener, app))
}
