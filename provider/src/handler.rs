// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Lifecycle handlers for the `SecureString` parameter resource.
//!
//! Each operation builds one request from the current model, makes one
//! Parameter Store call and maps the result into a [`ProgressEvent`]. Failures
//! from the store are returned unchanged; translating them into a failed
//! progress event is left to the caller (see [`crate::routes`]).
//!
//! | Action | Store call | Message |
//! |--------|------------|---------|
//! | Create | `PutParameter`, overwrite disabled | `Create complete` |
//! | Read | `GetParameter`, with decryption | `Read complete` |
//! | Update | `PutParameter`, overwrite enabled | `Update complete` |
//! | Delete | `DeleteParameter` | `Delete complete` |
//! | List | `GetParameter`, with decryption | `Read complete` |

use async_trait::async_trait;

use crate::constants::{CREATE_COMPLETE, DELETE_COMPLETE, READ_COMPLETE, UPDATE_COMPLETE};
use crate::errors::HandlerError;
use crate::models::{Action, ProgressEvent, ResourceModel};
use crate::store::{ParameterStore, PutParameterRequest};

/// One method per lifecycle operation the host can invoke.
///
/// `previous` is only ever populated for updates.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    type Model: Send;

    async fn create(
        &self,
        previous: Option<Self::Model>,
        current: Self::Model,
    ) -> Result<ProgressEvent<Self::Model>, HandlerError>;

    async fn read(
        &self,
        previous: Option<Self::Model>,
        current: Self::Model,
    ) -> Result<ProgressEvent<Self::Model>, HandlerError>;

    async fn update(
        &self,
        previous: Option<Self::Model>,
        current: Self::Model,
    ) -> Result<ProgressEvent<Self::Model>, HandlerError>;

    async fn delete(
        &self,
        previous: Option<Self::Model>,
        current: Self::Model,
    ) -> Result<ProgressEvent<Self::Model>, HandlerError>;

    async fn list(
        &self,
        previous: Option<Self::Model>,
        current: Self::Model,
    ) -> Result<ProgressEvent<Self::Model>, HandlerError>;
}

/// Routes an action to the matching handler method.
pub async fn dispatch<H: ResourceHandler + ?Sized>(
    handler: &H,
    action: Action,
    previous: Option<H::Model>,
    current: H::Model,
) -> Result<ProgressEvent<H::Model>, HandlerError> {
    match action {
        Action::Create => handler.create(previous, current).await,
        Action::Read => handler.read(previous, current).await,
        Action::Update => handler.update(previous, current).await,
        Action::Delete => handler.delete(previous, current).await,
        Action::List => handler.list(previous, current).await,
    }
}

pub struct ParameterResourceHandler<S: ?Sized> {
    store: Box<S>,
}

impl<S: ParameterStore + ?Sized> ParameterResourceHandler<S> {
    pub fn new(store: Box<S>) -> Self {
        Self { store }
    }

    async fn put(&self, model: &ResourceModel, overwrite: bool) -> Result<(), HandlerError> {
        let request = PutParameterRequest::from_model(model, overwrite);
        self.store.put_parameter(request).await
    }

    async fn fetch(&self, mut model: ResourceModel) -> Result<ResourceModel, HandlerError> {
        let parameter = self.store.get_parameter(&model.name, true).await?;
        let value = parameter
            .value
            .ok_or_else(|| HandlerError::MissingParameterValue(model.name.clone()))?;
        model.value = Some(value);
        Ok(model)
    }
}

#[async_trait]
impl<S: ParameterStore + ?Sized> ResourceHandler for ParameterResourceHandler<S> {
    type Model = ResourceModel;

    #[tracing::instrument(skip_all, fields(name = %current.name))]
    async fn create(
        &self,
        _previous: Option<ResourceModel>,
        current: ResourceModel,
    ) -> Result<ProgressEvent<ResourceModel>, HandlerError> {
        self.put(&current, false).await?;
        tracing::info!("[provider] created parameter");
        Ok(ProgressEvent::success(CREATE_COMPLETE, current))
    }

    #[tracing::instrument(skip_all, fields(name = %current.name))]
    async fn read(
        &self,
        _previous: Option<ResourceModel>,
        current: ResourceModel,
    ) -> Result<ProgressEvent<ResourceModel>, HandlerError> {
        let model = self.fetch(current).await?;
        Ok(ProgressEvent::success(READ_COMPLETE, model))
    }

    #[tracing::instrument(skip_all, fields(name = %current.name))]
    async fn update(
        &self,
        _previous: Option<ResourceModel>,
        current: ResourceModel,
    ) -> Result<ProgressEvent<ResourceModel>, HandlerError> {
        self.put(&current, true).await?;
        tracing::info!("[provider] updated parameter");
        Ok(ProgressEvent::success(UPDATE_COMPLETE, current))
    }

    #[tracing::instrument(skip_all, fields(name = %current.name))]
    async fn delete(
        &self,
        _previous: Option<ResourceModel>,
        current: ResourceModel,
    ) -> Result<ProgressEvent<ResourceModel>, HandlerError> {
        self.store.delete_parameter(&current.name).await?;
        tracing::info!("[provider] deleted parameter");
        Ok(ProgressEvent::success(DELETE_COMPLETE, current))
    }

    // Fetches the single parameter named by the model; there is no enumeration.
    #[tracing::instrument(skip_all, fields(name = %current.name))]
    async fn list(
        &self,
        _previous: Option<ResourceModel>,
        current: ResourceModel,
    ) -> Result<ProgressEvent<ResourceModel>, HandlerError> {
        let model = self.fetch(current).await?;
        Ok(ProgressEvent::success(READ_COMPLETE, model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationStatus, Tag};
    use crate::store::StoredParameter;
    use aws_sdk_ssm::types::ParameterType;
    use aws_sdk_ssm::types::error::ParameterNotFound;
    use std::sync::Mutex;

    /// Records every call and answers reads with a fixed value.
    #[derive(Default)]
    struct RecordingStore {
        puts: Mutex<Vec<PutParameterRequest>>,
        reads: Mutex<Vec<(String, bool)>>,
        deletes: Mutex<Vec<String>>,
        value: Option<String>,
    }

    #[async_trait]
    impl ParameterStore for RecordingStore {
        async fn put_parameter(&self, request: PutParameterRequest) -> Result<(), HandlerError> {
            self.puts.lock().unwrap().push(request);
            Ok(())
        }

        async fn get_parameter(
            &self,
            name: &str,
            with_decryption: bool,
        ) -> Result<StoredParameter, HandlerError> {
            self.reads
                .lock()
                .unwrap()
                .push((name.to_string(), with_decryption));
            match &self.value {
                Some(value) => Ok(StoredParameter {
                    value: Some(value.clone()),
                }),
                None => Err(aws_sdk_ssm::Error::ParameterNotFound(
                    ParameterNotFound::builder().build(),
                )
                .into()),
            }
        }

        async fn delete_parameter(&self, name: &str) -> Result<(), HandlerError> {
            self.deletes.lock().unwrap().push(name.to_string());
            Ok(())
        }
    }

    fn handler(value: Option<&str>) -> ParameterResourceHandler<RecordingStore> {
        ParameterResourceHandler::new(Box::new(RecordingStore {
            value: value.map(str::to_string),
            ..Default::default()
        }))
    }

    fn model() -> ResourceModel {
        ResourceModel {
            name: "/app/db/password".to_string(),
            value: Some("s3cr3t".to_string()),
            tags: vec![Tag::new("env", "prod")],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_disables_overwrite() {
        let handler = handler(None);
        let event = handler.create(None, model()).await.unwrap();

        assert_eq!(event.status, OperationStatus::Success);
        assert_eq!(event.message, "Create complete");
        assert_eq!(event.resource_model, Some(model()));

        let puts = handler.store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert!(!puts[0].overwrite);
        assert_eq!(puts[0].parameter_type(), &ParameterType::SecureString);
    }

    #[tokio::test]
    async fn test_update_enables_overwrite() {
        let handler = handler(None);
        let event = handler.update(Some(model()), model()).await.unwrap();

        assert_eq!(event.message, "Update complete");
        let puts = handler.store.puts.lock().unwrap();
        assert!(puts[0].overwrite);
        assert_eq!(puts[0].parameter_type(), &ParameterType::SecureString);
    }

    #[tokio::test]
    async fn test_read_requests_decryption_and_sets_value() {
        let handler = handler(Some("from-store"));
        let current = ResourceModel {
            name: "/app/db/password".to_string(),
            ..Default::default()
        };
        let event = handler.read(None, current).await.unwrap();

        assert_eq!(event.message, "Read complete");
        let model = event.resource_model.unwrap();
        assert_eq!(model.value.as_deref(), Some("from-store"));
        assert_eq!(
            *handler.store.reads.lock().unwrap(),
            vec![("/app/db/password".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn test_read_propagates_store_error() {
        let handler = handler(None);
        let err = handler.read(None, model()).await.unwrap_err();
        assert!(matches!(
            err,
            HandlerError::Ssm(aws_sdk_ssm::Error::ParameterNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_addresses_by_name() {
        let handler = handler(None);
        let event = handler.delete(None, model()).await.unwrap();

        assert_eq!(event.message, "Delete complete");
        assert_eq!(event.resource_model, Some(model()));
        assert_eq!(
            *handler.store.deletes.lock().unwrap(),
            vec!["/app/db/password".to_string()]
        );
    }

    #[tokio::test]
    async fn test_list_matches_read() {
        let handler = handler(Some("from-store"));
        let read = handler.read(None, model()).await.unwrap();
        let list = handler.list(None, model()).await.unwrap();
        assert_eq!(read, list);
    }

    #[tokio::test]
    async fn test_dispatch_routes_actions() {
        let handler = handler(Some("from-store"));
        let event = dispatch(&handler, Action::Delete, None, model()).await.unwrap();
        assert_eq!(event.message, "Delete complete");

        let event = dispatch(&handler, Action::List, None, model()).await.unwrap();
        assert_eq!(event.message, "Read complete");
    }
}
