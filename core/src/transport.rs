//! Classification of `ureq` errors into transport failures.
//!
//! Only compiled with the `ureq` feature. `ureq` reports HTTP error statuses
//! as `Error::StatusCode` unless the agent is built with
//! `http_status_as_error(false)`; in that case run the response through
//! `check_status` instead.

use std::io;

use log::trace;

use crate::error::{GenericFailure, TransferFailure, TransportFailure};
use crate::http::{HttpRequest, HttpResponse};

/// Classify a `ureq` error raised while executing `request`.
pub fn from_ureq(request: HttpRequest, error: ureq::Error) -> TransportFailure {
    let detail = error.to_string();
    let failure: TransportFailure = match error {
        ureq::Error::StatusCode(status) => {
            TransferFailure::exchange(request, Some(HttpResponse::with_status(status)), detail).into()
        }
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
            TransferFailure::connect(request, detail).into()
        }
        ureq::Error::Io(ref e) if is_connect_error(e.kind()) => {
            TransferFailure::connect(request, detail).into()
        }
        ureq::Error::Timeout(_) | ureq::Error::Io(_) => {
            TransferFailure::exchange(request, None, detail).into()
        }
        other => GenericFailure::with_source(detail, other).into(),
    };
    trace!("classified ureq error as {} failure", failure.label());
    failure
}

/// I/O errors ureq raises when the socket never opened.
fn is_connect_error(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::HostUnreachable
            | io::ErrorKind::NetworkUnreachable
    )
}
