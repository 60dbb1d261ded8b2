//! Translation of transport failures into `RequestFailure` values.
//!
//! # Design
//! `translate` is total: every `TransportFailure` maps to exactly one
//! `RequestFailure`, so callers can convert with `?` and never need a
//! fallback path. Transfer failures get a message naming the method, host,
//! status and full URL; everything else gets a fixed message and code 500.

use log::debug;

use crate::error::{RequestFailure, TransferFailure, TransportFailure};
use crate::http::{HttpRequest, HttpResponse};

/// Message for failures that carry no request context.
pub const GENERIC_FAILURE_MESSAGE: &str = "Api Request Failed";

/// Code for failures that carry no request context.
pub const GENERIC_FAILURE_CODE: u16 = 500;

/// Reason used in the message when the exchange produced no response.
pub const NO_RESPONSE_REASON: &str = "No Response";

/// Normalize a transport failure into a `RequestFailure`.
pub fn translate(failure: TransportFailure) -> RequestFailure {
    let (message, code) = match &failure {
        TransportFailure::Transfer(transfer) => describe_transfer(transfer),
        TransportFailure::Generic(_) => (GENERIC_FAILURE_MESSAGE.to_string(), GENERIC_FAILURE_CODE),
    };
    debug!("translated {} transport failure into request failure {code}", failure.label());
    RequestFailure::new(message, code, failure)
}

fn describe_transfer(transfer: &TransferFailure) -> (String, u16) {
    let response = transfer.response();
    let code = response.map_or(0, |r| r.status);
    let reason = response.map_or(NO_RESPONSE_REASON, HttpResponse::reason_phrase);
    let request = transfer.request();
    let message = format!(
        "The {} request to the repository {} resulted in a {code} {reason} error. Complete URL: {}",
        request.method,
        request.host(),
        request.full_url,
    );
    (message, code)
}

impl From<TransportFailure> for RequestFailure {
    fn from(failure: TransportFailure) -> Self {
        translate(failure)
    }
}

impl From<TransferFailure> for RequestFailure {
    fn from(failure: TransferFailure) -> Self {
        translate(TransportFailure::Transfer(failure))
    }
}

/// Treat any status of 400 or above as a failed exchange.
///
/// Transports configured to hand back error responses as data use this to
/// get the same `TransportFailure` a status-as-error transport would report.
pub fn check_status(
    request: &HttpRequest,
    response: HttpResponse,
) -> Result<HttpResponse, TransportFailure> {
    if response.status < 400 {
        return Ok(response);
    }
    let detail = format!("HTTP {}", response.status);
    Err(TransferFailure::exchange(request.clone(), Some(response), detail).into())
}
