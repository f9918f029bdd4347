use thiserror::Error;

use crate::http_client::HttpError;
use crate::ResourceType;

/// Caller-side configuration and input errors. These never reach the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid resource type '{value}', expected one of firm, individual, fund")]
    InvalidResourceType { value: String },

    #[error("unknown resource action '{value}'")]
    UnknownAction { value: String },
    #[error("action '{action}' is not available for resource type '{resource_type}'")]
    UnsupportedAction {
        action: &'static str,
        resource_type: ResourceType,
    },
    #[error("action '{action}' requires a non-empty {token} token")]
    MissingActionToken {
        action: &'static str,
        token: &'static str,
    },

    #[error("credential field '{field}' cannot be empty")]
    EmptyCredential { field: &'static str },
    #[error("environment variable '{name}' is not set")]
    MissingEnvVar { name: &'static str },

    #[error("{label} reference number cannot be empty")]
    EmptyIdentifier { label: &'static str },
    #[error("search query cannot be empty")]
    EmptyQuery,

    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("user agent '{value}' is not a valid header value")]
    InvalidUserAgent { value: String },
}

/// Failures derived from a well-formed HTTP exchange whose content cannot
/// satisfy the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error(
        "no {resource_type} found in FS Register API response for '{name}'. \
         Please check the search parameters and try again."
    )]
    NoMatch {
        resource_type: ResourceType,
        name: String,
    },

    #[error(
        "multiple {resource_type}s returned ({count}). The {resource_type} name needs to be \
         more precise. If you are unsure of the results please use the common search endpoint."
    )]
    AmbiguousMatch {
        resource_type: ResourceType,
        count: usize,
    },

    #[error(
        "unexpected response data structure from the FS Register API for {resource_type} \
         search by name: {detail}"
    )]
    MalformedResponse {
        resource_type: ResourceType,
        detail: String,
    },

    #[error("response body (HTTP {status}) is not valid JSON: {detail}")]
    UnparseableBody { status: u16, detail: String },
}

/// Coarse classification callers branch on for remediation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    Configuration,
    Request,
    Response,
}

/// Top-level error type for client operations.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Configuration(#[from] ValidationError),

    #[error("FS Register API request failed: {0}")]
    Request(#[from] HttpError),

    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl RegisterError {
    pub const fn tier(&self) -> ErrorTier {
        match self {
            Self::Configuration(_) => ErrorTier::Configuration,
            Self::Request(_) => ErrorTier::Request,
            Self::Response(_) => ErrorTier::Response,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration.invalid",
            Self::Request(_) => "request.failed",
            Self::Response(ResponseError::NoMatch { .. }) => "response.no_match",
            Self::Response(ResponseError::AmbiguousMatch { .. }) => "response.ambiguous_match",
            Self::Response(ResponseError::MalformedResponse { .. }) => "response.malformed",
            Self::Response(ResponseError::UnparseableBody { .. }) => "response.unparseable_body",
        }
    }

    pub fn response(&self) -> Option<&ResponseError> {
        match self {
            Self::Response(error) => Some(error),
            _ => None,
        }
    }
}
