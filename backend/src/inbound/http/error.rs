//! HTTP error envelope and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`crate::domain::Error`] into Actix responses here. The human message is
//! serialised under the `error` key; `code`, `requestId`, and `details`
//! enrich it for clients and log correlation.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error as DomainError, ErrorCode};
use crate::middleware::trace::{REQUEST_ID_HEADER, RequestId};

/// Standard error envelope returned by the HTTP adapter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[schema(example = "not_found")]
    code: ErrorCode,
    /// Human-readable message, serialised under the `error` key.
    #[serde(rename = "error")]
    #[schema(example = "ingredient with id 7 does not exist")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "0192f0c1-7d4e-7bb8-a921-9bdfab4360a1")]
    request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ApiError {
    /// Construct an API error from a domain failure, capturing any ambient
    /// request identifier.
    pub fn from_domain(error: DomainError) -> Self {
        Self {
            code: error.code(),
            message: error.message().to_owned(),
            request_id: RequestId::current().map(|id| id.to_string()),
            details: error.details().cloned(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Request identifier propagated into the response header.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Supplementary error details for clients.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Map a JSON extractor failure onto the envelope.
    ///
    /// A missing or non-JSON content type and an undecodable body are both
    /// client errors reported as 400.
    pub fn from_json_payload(err: &JsonPayloadError) -> Self {
        let message = match err {
            JsonPayloadError::ContentType => {
                "request content type must be application/json".to_owned()
            }
            other => format!("invalid json body: {other}"),
        };
        Self::from_domain(DomainError::invalid_request(message))
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        ApiError::from_domain(value)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.request_id {
            builder.insert_header((REQUEST_ID_HEADER, id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            error!(error = %self.message, "internal error surfaced to client");
            let mut redacted = self.clone();
            redacted.message = "internal server error".to_owned();
            redacted.details = None;
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON extractor configuration routing payload failures through the
/// envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::from_json_payload(&err).into())
}
