//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, a `bool` flag next to every optional
//! field, and enums with explicit discriminants. Conversion functions live
//! here to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use prismic_core::{HttpMethod, RequestFailure};

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Patch = 3,
    Delete = 4,
    Head = 5,
    Options = 6,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Patch => FfiHttpMethod::Patch,
            HttpMethod::Delete => FfiHttpMethod::Delete,
            HttpMethod::Head => FfiHttpMethod::Head,
            HttpMethod::Options => FfiHttpMethod::Options,
        }
    }
}

impl From<FfiHttpMethod> for HttpMethod {
    fn from(m: FfiHttpMethod) -> Self {
        match m {
            FfiHttpMethod::Get => HttpMethod::Get,
            FfiHttpMethod::Post => HttpMethod::Post,
            FfiHttpMethod::Put => HttpMethod::Put,
            FfiHttpMethod::Patch => HttpMethod::Patch,
            FfiHttpMethod::Delete => HttpMethod::Delete,
            FfiHttpMethod::Head => HttpMethod::Head,
            FfiHttpMethod::Options => HttpMethod::Options,
        }
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// The response the host received before the exchange failed.
///
/// The C caller constructs this on the stack. `reason` may be null, in which
/// case the canonical reason phrase for `status` is used. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub reason: *const c_char,
}

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Whether the FFI call itself succeeded.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    NullArg = 1,
    Panic = 2,
}

/// A translated request failure exposed to C.
///
/// When `error_code` is `Ok`, `message` and `code` hold the translation.
/// `method` and `url` are meaningful only if `has_request`; `response_status`
/// only if `has_response`. Otherwise `error_message` says why the call failed
/// and the remaining fields are zeroed.
#[repr(C)]
pub struct FfiRequestFailure {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub code: u16,
    pub message: *mut c_char,
    pub has_request: bool,
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub has_response: bool,
    pub response_status: u16,
}

impl FfiRequestFailure {
    /// Copy a core `RequestFailure` into a heap-allocated `FfiRequestFailure`.
    pub(crate) fn from_core(failure: &RequestFailure) -> *mut Self {
        let request = failure.request();
        let response = failure.response();
        let result = Box::new(FfiRequestFailure {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            code: failure.code(),
            message: c_string(failure.message()),
            has_request: request.is_some(),
            method: request.map_or(FfiHttpMethod::Get, |r| r.method.into()),
            url: request.map_or(std::ptr::null_mut(), |r| c_string(&r.full_url)),
            has_response: response.is_some(),
            response_status: response.map_or(0, |r| r.status),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::call_error(FfiErrorCode::NullArg, &format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::call_error(FfiErrorCode::Panic, msg)
    }

    fn call_error(error_code: FfiErrorCode, msg: &str) -> *mut Self {
        let result = Box::new(FfiRequestFailure {
            error_code,
            error_message: c_string(msg),
            code: 0,
            message: std::ptr::null_mut(),
            has_request: false,
            method: FfiHttpMethod::Get,
            url: std::ptr::null_mut(),
            has_response: false,
            response_status: 0,
        });
        Box::into_raw(result)
    }
}

/// Allocate a C string, dropping interior NUL bytes rather than failing.
pub(crate) fn c_string(s: &str) -> *mut c_char {
    let cleaned: String = s.chars().filter(|&c| c != '\0').collect();
    CString::new(cleaned)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}
