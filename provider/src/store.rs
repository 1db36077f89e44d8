// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Parameter Store access.
//!
//! [`ParameterStore`] is the seam between the lifecycle handlers and the remote
//! service. [`SsmParameterStore`] implements it over the AWS SDK; every method
//! issues exactly one API call and converts SDK failures into
//! [`aws_sdk_ssm::Error`] without reclassifying them.

use std::fmt;

use async_trait::async_trait;
use aws_sdk_ssm::types::{ParameterTier, ParameterType};

use crate::errors::HandlerError;
use crate::models::{ResourceModel, Tag};

/// Payload of a `PutParameter` call.
///
/// The parameter type is fixed to `SecureString` by the constructor and is not
/// settable from a resource model.
#[derive(Clone, PartialEq)]
pub struct PutParameterRequest {
    pub name: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub allowed_pattern: Option<String>,
    pub key_id: Option<String>,
    pub tier: Option<String>,
    pub policies: Option<String>,
    pub tags: Vec<Tag>,
    pub overwrite: bool,
    parameter_type: ParameterType,
}

impl PutParameterRequest {
    pub fn from_model(model: &ResourceModel, overwrite: bool) -> Self {
        Self {
            name: model.name.clone(),
            value: model.value.clone(),
            description: model.description.clone(),
            allowed_pattern: model.allowed_pattern.clone(),
            key_id: model.key_id.clone(),
            tier: model.tier.clone(),
            policies: model.policies.clone(),
            tags: model.tags.clone(),
            overwrite,
            parameter_type: ParameterType::SecureString,
        }
    }

    pub fn parameter_type(&self) -> &ParameterType {
        &self.parameter_type
    }
}

impl fmt::Debug for PutParameterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PutParameterRequest")
            .field("name", &self.name)
            .field("value", &self.value.as_ref().map(|_| "[REDACTED]"))
            .field("tier", &self.tier)
            .field("tags", &self.tags.len())
            .field("overwrite", &self.overwrite)
            .field("parameter_type", &self.parameter_type)
            .finish_non_exhaustive()
    }
}

/// The part of a `GetParameter` response the handlers consume.
#[derive(Clone, PartialEq)]
pub struct StoredParameter {
    pub value: Option<String>,
}

#[async_trait]
pub trait ParameterStore: Send + Sync {
    async fn put_parameter(&self, request: PutParameterRequest) -> Result<(), HandlerError>;

    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<StoredParameter, HandlerError>;

    async fn delete_parameter(&self, name: &str) -> Result<(), HandlerError>;
}

/// [`ParameterStore`] backed by AWS Systems Manager.
pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    #[tracing::instrument(skip(self))]
    async fn put_parameter(&self, request: PutParameterRequest) -> Result<(), HandlerError> {
        let tags = request
            .tags
            .iter()
            .map(|tag| {
                aws_sdk_ssm::types::Tag::builder()
                    .key(&tag.key)
                    .value(&tag.value)
                    .build()
                    .map_err(|e| HandlerError::ConfigError(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.client
            .put_parameter()
            .name(&request.name)
            .set_value(request.value.clone())
            .set_description(request.description.clone())
            .set_allowed_pattern(request.allowed_pattern.clone())
            .set_key_id(request.key_id.clone())
            .set_tier(request.tier.as_deref().map(ParameterTier::from))
            .set_policies(request.policies.clone())
            .set_tags((!tags.is_empty()).then_some(tags))
            .overwrite(request.overwrite)
            .r#type(request.parameter_type().clone())
            .send()
            .await
            .map_err(aws_sdk_ssm::Error::from)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<StoredParameter, HandlerError> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(aws_sdk_ssm::Error::from)?;

        let parameter = output
            .parameter
            .ok_or_else(|| HandlerError::MissingParameterValue(name.to_string()))?;

        Ok(StoredParameter {
            value: parameter.value,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn delete_parameter(&self, name: &str) -> Result<(), HandlerError> {
        self.client
            .delete_parameter()
            .name(name)
            .send()
            .await
            .map_err(aws_sdk_ssm::Error::from)?;

        Ok(())
    }
}
