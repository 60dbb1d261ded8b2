//! Failure types for the repository API client.
//!
//! # Design
//! A transport reports a `TransportFailure`, which is either a
//! `TransferFailure` (an exchange was attempted, so a request exists and a
//! response may exist) or a `GenericFailure` (no request context at all).
//! Request presence is therefore a property of the variant, not something
//! callers have to check at runtime.
//!
//! `RequestFailure` is what callers of the API client see. It is produced
//! once by `translate` and owns the transport failure it was built from.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// Returned when a string is not a supported HTTP method token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);

/// Stage of the exchange at which a `TransferFailure` happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// No connection could be opened. Never has a response.
    Connect,
    /// The request went (or was going) out on an open connection.
    Exchange,
}

impl TransferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferKind::Connect => "connect",
            TransferKind::Exchange => "exchange",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure during an attempted HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} failure on {} {}: {detail}", .request.method, .request.full_url)]
pub struct TransferFailure {
    kind: TransferKind,
    request: HttpRequest,
    response: Option<HttpResponse>,
    detail: String,
}

impl TransferFailure {
    /// The connection to the host could not be established.
    pub fn connect(request: HttpRequest, detail: impl Into<String>) -> Self {
        Self {
            kind: TransferKind::Connect,
            request,
            response: None,
            detail: detail.into(),
        }
    }

    /// The exchange failed after the connection was up. `response` is set
    /// when a reply was received, e.g. an error status.
    pub fn exchange(
        request: HttpRequest,
        response: Option<HttpResponse>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: TransferKind::Exchange,
            request,
            response,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> TransferKind {
        self.kind
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Any transport failure without request context: bad configuration, a URI
/// the transport refused, TLS setup and the like.
#[derive(Debug, Error)]
#[error("{detail}")]
pub struct GenericFailure {
    detail: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl GenericFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            source: None,
        }
    }

    /// Keep the low-level error around as `Error::source`.
    pub fn with_source(
        detail: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            detail: detail.into(),
            source: Some(source.into()),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// A failure reported by the HTTP transport.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error(transparent)]
    Transfer(#[from] TransferFailure),

    #[error(transparent)]
    Generic(#[from] GenericFailure),
}

impl TransportFailure {
    /// The request being attempted. Only transfer failures have one.
    pub fn request(&self) -> Option<&HttpRequest> {
        match self {
            TransportFailure::Transfer(t) => Some(t.request()),
            TransportFailure::Generic(_) => None,
        }
    }

    /// The response received before failing, if any.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            TransportFailure::Transfer(t) => t.response(),
            TransportFailure::Generic(_) => None,
        }
    }

    /// Short label for log records.
    pub fn label(&self) -> &'static str {
        match self {
            TransportFailure::Transfer(t) => t.kind().as_str(),
            TransportFailure::Generic(_) => "generic",
        }
    }
}

/// Normalized failure of a repository API request.
///
/// `code` is the HTTP status when one was received, `0` when the exchange
/// produced no response, and `500` for failures with no request context.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestFailure {
    message: String,
    code: u16,
    #[source]
    cause: TransportFailure,
}

impl RequestFailure {
    pub(crate) fn new(message: String, code: u16, cause: TransportFailure) -> Self {
        Self {
            message,
            code,
            cause,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn cause(&self) -> &TransportFailure {
        &self.cause
    }

    pub fn into_cause(self) -> TransportFailure {
        self.cause
    }

    /// The original request; `None` unless the cause is a transfer failure.
    pub fn request(&self) -> Option<&HttpRequest> {
        self.cause.request()
    }

    /// The original response; `None` unless a transfer failure received one.
    pub fn response(&self) -> Option<&HttpResponse> {
        self.cause.response()
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}
