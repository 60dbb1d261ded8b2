//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! never touches the network: whoever executes the exchange hands these
//! values back when something goes wrong, and the translator reads the
//! method, host and status from them.
//!
//! Requests hold a parsed `Url` so the host component is always available
//! when a failure message is formatted, next to the URI exactly as the
//! caller wrote it, which is what messages print.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::UnknownMethod;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// The upper-case request-line token.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// An HTTP request described as plain data.
///
/// `full_url` is the caller's URI string, unnormalized; `uri` is its parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: Url,
    pub full_url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Build a header-less, body-less request, parsing `uri`.
    pub fn new(method: HttpMethod, uri: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            method,
            uri: Url::parse(uri)?,
            full_url: uri.to_string(),
            headers: Vec::new(),
            body: None,
        })
    }

    /// Host component of the URI, or `""` for host-less URIs.
    pub fn host(&self) -> &str {
        self.uri.host_str().unwrap_or("")
    }
}

/// An HTTP response described as plain data.
///
/// `reason` is only set when the transport reported a reason phrase; most
/// HTTP/2 stacks never do, so `reason_phrase` falls back to the canonical one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub body: String,
}

impl HttpResponse {
    /// A response with only a status line.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            reason: None,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn reason_phrase(&self) -> &str {
        if let Some(reason) = &self.reason {
            return reason;
        }
        ::http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!("OPTIONS".parse::<HttpMethod>().unwrap(), HttpMethod::Options);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = "BREW".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err.0, "BREW");
        assert_eq!(err.to_string(), "unknown HTTP method: BREW");
    }

    #[test]
    fn method_serializes_upper_case() {
        assert_eq!(serde_json::to_value(HttpMethod::Delete).unwrap(), "DELETE");
        let m: HttpMethod = serde_json::from_str(r#""HEAD""#).unwrap();
        assert_eq!(m, HttpMethod::Head);
    }

    #[test]
    fn request_exposes_host() {
        let req = HttpRequest::new(HttpMethod::Get, "https://example.prismic.io/api/v2").unwrap();
        assert_eq!(req.host(), "example.prismic.io");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn full_url_keeps_the_uri_as_written() {
        let req = HttpRequest::new(HttpMethod::Get, "https://example.prismic.io").unwrap();
        assert_eq!(req.full_url, "https://example.prismic.io");
        assert_eq!(req.uri.as_str(), "https://example.prismic.io/");

        let raw = "https://example.prismic.io/api/v2/../v2/documents/search?q=a b";
        let req = HttpRequest::new(HttpMethod::Get, raw).unwrap();
        assert_eq!(req.full_url, raw);
        assert_eq!(req.host(), "example.prismic.io");
    }

    #[test]
    fn hostless_uri_has_empty_host() {
        let req = HttpRequest::new(HttpMethod::Get, "data:text/plain,hello").unwrap();
        assert_eq!(req.host(), "");
    }

    #[test]
    fn invalid_uri_is_a_parse_error() {
        assert!(HttpRequest::new(HttpMethod::Get, "not a uri").is_err());
    }

    #[test]
    fn reason_phrase_prefers_explicit_reason() {
        let mut resp = HttpResponse::with_status(404);
        assert_eq!(resp.reason_phrase(), "Not Found");
        resp.reason = Some("Gone Fishing".to_string());
        assert_eq!(resp.reason_phrase(), "Gone Fishing");
    }

    #[test]
    fn reason_phrase_is_empty_for_unregistered_status() {
        assert_eq!(HttpResponse::with_status(599).reason_phrase(), "");
        assert_eq!(HttpResponse::with_status(42).reason_phrase(), "");
    }
}
