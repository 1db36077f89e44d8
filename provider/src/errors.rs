// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use aws_sdk_ssm::error::ProvideErrorMetadata;

use crate::models::HandlerErrorCode;

#[derive(thiserror::Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    Ssm(#[from] aws_sdk_ssm::Error),
    #[error("request did not include resource properties")]
    MissingResourceModel,
    #[error("parameter {0} returned no value")]
    MissingParameterValue(String),
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl HandlerError {
    /// The CloudFormation failure code reported for this error.
    pub fn error_code(&self) -> HandlerErrorCode {
        match self {
            Self::Ssm(err) => ssm_error_code(err),
            Self::MissingResourceModel => HandlerErrorCode::InvalidRequest,
            Self::MissingParameterValue(_) => HandlerErrorCode::ServiceInternalError,
            Self::ConfigError(_) => HandlerErrorCode::InternalFailure,
        }
    }
}

fn ssm_error_code(err: &aws_sdk_ssm::Error) -> HandlerErrorCode {
    use aws_sdk_ssm::Error;

    match err {
        Error::ParameterNotFound(_) => HandlerErrorCode::NotFound,
        Error::ParameterAlreadyExists(_) => HandlerErrorCode::AlreadyExists,
        Error::ParameterLimitExceeded(_)
        | Error::ParameterMaxVersionLimitExceeded(_)
        | Error::PoliciesLimitExceededException(_)
        | Error::TooManyTagsError(_) => HandlerErrorCode::ServiceLimitExceeded,
        Error::TooManyUpdates(_) => HandlerErrorCode::Throttling,
        Error::InternalServerError(_) => HandlerErrorCode::ServiceInternalError,
        Error::InvalidKeyId(_)
        | Error::InvalidAllowedPatternException(_)
        | Error::ParameterPatternMismatchException(_)
        | Error::UnsupportedParameterType(_)
        | Error::HierarchyLevelLimitExceededException(_)
        | Error::HierarchyTypeMismatchException(_) => HandlerErrorCode::InvalidRequest,
        other => match other.code() {
            Some("AccessDeniedException") => HandlerErrorCode::AccessDenied,
            Some("ThrottlingException") => HandlerErrorCode::Throttling,
            Some("UnrecognizedClientException")
            | Some("InvalidClientTokenId")
            | Some("ExpiredTokenException") => HandlerErrorCode::InvalidCredentials,
            Some("ValidationException") => HandlerErrorCode::InvalidRequest,
            _ => HandlerErrorCode::GeneralServiceException,
        },
    }
}
