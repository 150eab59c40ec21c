//! Error taxonomy for one generation attempt.

use std::time::Duration;

use namegen_adapters::traits::AdapterError;
use thiserror::Error;

use crate::request::RequiredField;

/// Input rejected before any upstream call is made.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were empty.
    #[error("missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<RequiredField>),

    /// The requested number of names could not be used.
    #[error("number of names must be between 1 and 5, got `{0}`")]
    NameCountOutOfRange(String),
}

/// The upstream text-generation call failed. Never retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network, TLS, timeout or client-side configuration failure.
    #[error("text generation service unavailable: {reason}")]
    Unavailable {
        /// Transport detail.
        reason: String,
    },

    /// The service throttled the request.
    #[error("text generation service rate limited the request")]
    RateLimited {
        /// Delay suggested by the service, if any.
        retry_after: Option<Duration>,
    },

    /// The service answered with a non-success status (auth failures included).
    #[error("text generation service rejected the request with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },

    /// A success response did not carry a first candidate's text.
    #[error("malformed response from text generation service: {reason}")]
    MalformedResponse {
        /// Which part of the schema was missing.
        reason: String,
    },
}

impl From<AdapterError> for UpstreamError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::RateLimited { retry_after } => Self::RateLimited { retry_after },
            AdapterError::Rejected { status, .. } => Self::Rejected { status },
            AdapterError::MalformedResponse { reason } => Self::MalformedResponse { reason },
            other @ (AdapterError::Configuration { .. }
            | AdapterError::InvalidRequest { .. }
            | AdapterError::Transport { .. }) => Self::Unavailable {
                reason: other.to_string(),
            },
        }
    }
}

/// Either kind of failure for a full generation attempt.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input rejected locally.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Upstream call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}
