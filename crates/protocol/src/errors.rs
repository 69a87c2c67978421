//! Error and retry-policy types for gateway calls.
//!
//! [`GatewayError`] is what every [`crate::GatewayClient`] method reports on
//! failure. Command builders hand it back to their caller exactly as
//! received; they never wrap, reclassify, or retry it.
//!
//! [`RetryPolicy`] is offered to callers that want to build their own retry
//! loop on top of the commands.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Retry semantics
// ---------------------------------------------------------------------------

/// Whether a failed call is safe to send again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RetryPolicy {
    /// The operation may be retried.
    Retryable {
        /// Minimum back-off before the next attempt. `None` means the caller
        /// applies its own schedule.
        after: Option<Duration>,
    },
    /// Sending the same request again will fail the same way.
    NonRetryable,
}

// ---------------------------------------------------------------------------
// Status codes
// ---------------------------------------------------------------------------

/// Status code attached to a rejection reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    FailedPrecondition,
    ResourceExhausted,
    Unavailable,
    Unimplemented,
    Internal,
    Unknown,
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::Unavailable => "UNAVAILABLE",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::Internal => "INTERNAL",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Gateway errors
// ---------------------------------------------------------------------------

/// Failure of a single gateway call.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum GatewayError {
    /// The gateway received the request and rejected it.
    #[error("Gateway rejected the request ({code}): {message}")]
    Status {
        /// Rejection category.
        code: StatusCode,
        /// Human-readable detail from the gateway.
        message: String,
    },

    /// The request could not be delivered or the reply could not be read.
    #[error("Transport failure: {message}")]
    Transport {
        /// Description of the connection-level problem.
        message: String,
    },

    /// No reply arrived before the call's timeout elapsed.
    #[error("Deadline exceeded after {after:?}")]
    DeadlineExceeded {
        /// The timeout that elapsed.
        after: Duration,
    },

    /// The caller cancelled the call before a reply arrived.
    #[error("Call cancelled by the caller")]
    Cancelled,
}

impl GatewayError {
    /// Convenience constructor for [`GatewayError::Status`].
    pub fn status(code: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`GatewayError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Classifies the failure for callers that implement their own retries.
    ///
    /// Back-pressure, unavailability, connection problems, and elapsed
    /// deadlines are transient. Rejections of the request's content and
    /// caller-initiated cancellation are not.
    pub fn retry_policy(&self) -> RetryPolicy {
        match self {
            Self::Status {
                code: StatusCode::Unavailable | StatusCode::ResourceExhausted,
                ..
            }
            | Self::Transport { .. }
            | Self::DeadlineExceeded { .. } => RetryPolicy::Retryable { after: None },
            Self::Status { .. } | Self::Cancelled => RetryPolicy::NonRetryable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_pressure_is_retryable() {
        let error = GatewayError::status(StatusCode::ResourceExhausted, "partition busy");
        assert_eq!(error.retry_policy(), RetryPolicy::Retryable { after: None });
    }

    #[test]
    fn rejected_content_is_not_retryable() {
        let error = GatewayError::status(StatusCode::NotFound, "no workflow with key 42");
        assert_eq!(error.retry_policy(), RetryPolicy::NonRetryable);
        assert_eq!(GatewayError::Cancelled.retry_policy(), RetryPolicy::NonRetryable);
    }

    #[test]
    fn transport_and_deadline_failures_are_retryable() {
        assert!(matches!(
            GatewayError::transport("connection reset").retry_policy(),
            RetryPolicy::Retryable { .. }
        ));
        assert!(matches!(
            GatewayError::DeadlineExceeded {
                after: Duration::from_secs(1)
            }
            .retry_policy(),
            RetryPolicy::Retryable { .. }
        ));
    }

    #[test]
    fn status_message_names_the_code() {
        let error = GatewayError::status(StatusCode::InvalidArgument, "empty process id");
        assert_eq!(
            error.to_string(),
            "Gateway rejected the request (INVALID_ARGUMENT): empty process id"
        );
    }
}
