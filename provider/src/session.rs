// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Per-invocation client construction.
//!
//! Every handler request carries its own region and caller credentials, so a
//! fresh [`ParameterStore`] is built for each invocation and dropped with it.
//! Nothing is shared between invocations.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;

use crate::configuration::ProviderOptions;
use crate::errors::HandlerError;
use crate::models::{Credential, HandlerRequest};
use crate::store::{ParameterStore, SsmParameterStore};

/// Region and credentials a single invocation runs under.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub region: Option<String>,
    pub credentials: Option<Credential>,
}

impl Session {
    pub fn from_request(request: &HandlerRequest) -> Self {
        Self {
            region: request.region.clone(),
            credentials: request.request_data.caller_credentials.clone(),
        }
    }
}

#[async_trait]
pub trait StoreFactory: Send + Sync {
    async fn connect(&self, session: &Session) -> Result<Box<dyn ParameterStore>, HandlerError>;
}

/// Builds an [`SsmParameterStore`] from the session, falling back to the
/// provider's configured region and the default credential chain.
pub struct SsmStoreFactory {
    default_region: Option<String>,
    endpoint_url: Option<String>,
}

impl SsmStoreFactory {
    pub fn new(options: &ProviderOptions) -> Self {
        Self {
            default_region: options.region.clone(),
            endpoint_url: options.endpoint_url.clone(),
        }
    }

    fn region_for(&self, session: &Session) -> Result<String, HandlerError> {
        session
            .region
            .clone()
            .or_else(|| self.default_region.clone())
            .ok_or_else(|| HandlerError::ConfigError("no region in request".to_string()))
    }
}

#[async_trait]
impl StoreFactory for SsmStoreFactory {
    #[tracing::instrument(skip(self))]
    async fn connect(&self, session: &Session) -> Result<Box<dyn ParameterStore>, HandlerError> {
        let region = self.region_for(session)?;

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region));
        if let Some(credential) = &session.credentials {
            loader = loader.credentials_provider(Credentials::from(credential));
        } else {
            tracing::warn!("[provider] no caller credentials, using default chain");
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let config = loader.load().await;
        let client = aws_sdk_ssm::Client::new(&config);

        Ok(Box::new(SsmParameterStore::new(client)))
    }
}
