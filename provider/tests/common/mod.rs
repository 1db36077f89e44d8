// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! In-memory Parameter Store used by the integration tests.
//!
//! Reproduces the Parameter Store behavior the handlers depend on: puts without
//! overwrite fail on existing names, reads and deletes fail on missing names.
//! Failures use the SDK's own error shapes so error code mapping is exercised.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use aws_sdk_ssm::types::ParameterType;
use aws_sdk_ssm::types::error::{ParameterAlreadyExists, ParameterNotFound};
use secure_parameter_provider::errors::HandlerError;
use secure_parameter_provider::models::Tag;
use secure_parameter_provider::session::{Session, StoreFactory};
use secure_parameter_provider::store::{ParameterStore, PutParameterRequest, StoredParameter};

#[derive(Debug, Clone)]
pub struct Entry {
    pub value: Option<String>,
    pub parameter_type: ParameterType,
    pub tags: Vec<Tag>,
    pub version: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    parameters: Mutex<BTreeMap<String, Entry>>,
}

impl MemoryStore {
    pub fn entry(&self, name: &str) -> Option<Entry> {
        self.parameters.lock().unwrap().get(name).cloned()
    }
}

fn not_found(name: &str) -> HandlerError {
    aws_sdk_ssm::Error::ParameterNotFound(
        ParameterNotFound::builder()
            .message(format!("Parameter {} not found.", name))
            .build(),
    )
    .into()
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn put_parameter(&self, request: PutParameterRequest) -> Result<(), HandlerError> {
        let mut parameters = self.parameters.lock().unwrap();
        let version = match parameters.get(&request.name) {
            Some(_) if !request.overwrite => {
                return Err(aws_sdk_ssm::Error::ParameterAlreadyExists(
                    ParameterAlreadyExists::builder()
                        .message("The parameter already exists.")
                        .build(),
                )
                .into());
            }
            Some(existing) => existing.version + 1,
            None => 1,
        };

        parameters.insert(
            request.name.clone(),
            Entry {
                value: request.value.clone(),
                parameter_type: request.parameter_type().clone(),
                tags: request.tags.clone(),
                version,
            },
        );
        Ok(())
    }

    async fn get_parameter(
        &self,
        name: &str,
        _with_decryption: bool,
    ) -> Result<StoredParameter, HandlerError> {
        let parameters = self.parameters.lock().unwrap();
        let entry = parameters.get(name).ok_or_else(|| not_found(name))?;
        Ok(StoredParameter {
            value: entry.value.clone(),
        })
    }

    async fn delete_parameter(&self, name: &str) -> Result<(), HandlerError> {
        self.parameters
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| not_found(name))
    }
}

/// Hands every session a view onto the same [`MemoryStore`].
#[derive(Clone, Default)]
pub struct MemoryStoreFactory {
    pub store: Arc<MemoryStore>,
}

struct SharedStore(Arc<MemoryStore>);

#[async_trait]
impl ParameterStore for SharedStore {
    async fn put_parameter(&self, request: PutParameterRequest) -> Result<(), HandlerError> {
        self.0.put_parameter(request).await
    }

    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<StoredParameter, HandlerError> {
        self.0.get_parameter(name, with_decryption).await
    }

    async fn delete_parameter(&self, name: &str) -> Result<(), HandlerError> {
        self.0.delete_parameter(name).await
    }
}

#[async_trait]
impl StoreFactory for MemoryStoreFactory {
    async fn connect(&self, _session: &Session) -> Result<Box<dyn ParameterStore>, HandlerError> {
        Ok(Box::new(SharedStore(self.store.clone())))
    }
}
