//! C-ABI wrapper around `prismic-core`'s failure translation.
//!
//! # Overview
//! A host that runs its own HTTP stack describes a failed exchange through
//! these functions and gets back the translated message and code, plus the
//! request and response details the translation was built from.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A URI that does not parse means there is no request context, so the
//!   result is a generic failure rather than a call error.
//! - The C caller owns every returned pointer and must release it with
//!   `prismic_failure_free`.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use log::warn;
use prismic_core::{
    translate, GenericFailure, HttpRequest, HttpResponse, TransferFailure, TransportFailure,
};

use types::*;

/// Read a nullable C string, replacing invalid UTF-8.
fn read_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Parse the request, or fall back to a generic failure when the URI is bad.
fn request_or_generic(
    method: FfiHttpMethod,
    uri: &str,
) -> Result<HttpRequest, TransportFailure> {
    HttpRequest::new(method.into(), uri).map_err(|e| {
        warn!("request uri {uri:?} does not parse: {e}");
        GenericFailure::with_source(format!("invalid request uri: {e}"), e).into()
    })
}

fn finish(failure: TransportFailure) -> *mut FfiRequestFailure {
    FfiRequestFailure::from_core(&translate(failure))
}

// ---------------------------------------------------------------------------
// Translate functions
// ---------------------------------------------------------------------------

/// Translate a failed exchange. `response` may be null when nothing was
/// received; `detail` may be null.
///
/// Returns a result with `error_code = NullArg` if `uri` is null.
#[unsafe(no_mangle)]
pub extern "C" fn prismic_failure_from_response(
    method: FfiHttpMethod,
    uri: *const c_char,
    response: *const FfiHttpResponse,
    detail: *const c_char,
) -> *mut FfiRequestFailure {
    catch_unwind(|| {
        let Some(uri) = read_str(uri) else {
            return FfiRequestFailure::null_arg("uri");
        };
        let detail = read_str(detail).unwrap_or_default();
        let request = match request_or_generic(method, &uri) {
            Ok(request) => request,
            Err(generic) => return finish(generic),
        };
        let response = if response.is_null() {
            None
        } else {
            let resp = unsafe { &*response };
            Some(HttpResponse {
                status: resp.status,
                reason: read_str(resp.reason),
                headers: Vec::new(),
                body: String::new(),
            })
        };
        finish(TransferFailure::exchange(request, response, detail).into())
    })
    .unwrap_or_else(|_| FfiRequestFailure::panic("panic in prismic_failure_from_response"))
}

/// Translate a failure to connect to the repository host.
///
/// Returns a result with `error_code = NullArg` if `uri` is null.
#[unsafe(no_mangle)]
pub extern "C" fn prismic_failure_from_connect(
    method: FfiHttpMethod,
    uri: *const c_char,
    detail: *const c_char,
) -> *mut FfiRequestFailure {
    catch_unwind(|| {
        let Some(uri) = read_str(uri) else {
            return FfiRequestFailure::null_arg("uri");
        };
        let detail = read_str(detail).unwrap_or_default();
        match request_or_generic(method, &uri) {
            Ok(request) => finish(TransferFailure::connect(request, detail).into()),
            Err(generic) => finish(generic),
        }
    })
    .unwrap_or_else(|_| FfiRequestFailure::panic("panic in prismic_failure_from_connect"))
}

/// Translate a transport failure that has no request context. `detail` may
/// be null.
#[unsafe(no_mangle)]
pub extern "C" fn prismic_failure_generic(detail: *const c_char) -> *mut FfiRequestFailure {
    catch_unwind(|| {
        let detail = read_str(detail).unwrap_or_default();
        finish(GenericFailure::new(detail).into())
    })
    .unwrap_or_else(|_| FfiRequestFailure::panic("panic in prismic_failure_generic"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiRequestFailure` returned by any `prismic_failure_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn prismic_failure_free(failure: *mut FfiRequestFailure) {
    if failure.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let failure = unsafe { Box::from_raw(failure) };
        for ptr in [failure.error_message, failure.message, failure.url] {
            if !ptr.is_null() {
                drop(unsafe { CString::from_raw(ptr) });
            }
        }
    });
}
