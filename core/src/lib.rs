//! Transport failure translation for the repository API client.
//!
//! # Overview
//! The host executes HTTP exchanges itself (host-does-IO). When an exchange
//! fails, the host describes the failure as a `TransportFailure` and hands it
//! to `translate`, which returns a `RequestFailure` with a readable message,
//! a status code, and the original request and response when they exist.
//!
//! # Design
//! - `TransportFailure` is a closed sum type: transfer failures always carry
//!   a request, generic failures never do.
//! - `translate` is total and pure apart from a `debug!` record.
//! - Request and response types are owned plain data so they can cross the
//!   C ABI in `prismic-ffi` without lifetime concerns.
//! - The `ureq` feature adds `transport::from_ureq` for hosts that use ureq.

pub mod error;
pub mod http;
pub mod translate;
#[cfg(feature = "ureq")]
pub mod transport;

pub use error::{
    GenericFailure, RequestFailure, TransferFailure, TransferKind, TransportFailure, UnknownMethod,
};
pub use crate::http::{HttpMethod, HttpRequest, HttpResponse};
pub use translate::{
    check_status, translate, GENERIC_FAILURE_CODE, GENERIC_FAILURE_MESSAGE, NO_RESPONSE_REASON,
};
#[cfg(feature = "ureq")]
pub use transport::from_ureq;
