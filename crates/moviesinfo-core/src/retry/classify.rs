//! Classify HTTP status codes and curl errors.

use crate::retry::policy::FailureKind;

/// Coarse class of a final HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx: body should be a movie record.
    Success,
    /// 404: the record does not exist. Never retried.
    NotFound,
    /// 4xx other than 404: defect in the request. Never retried.
    ClientError,
    /// 5xx: possibly transient remote failure.
    ServerError,
    /// 1xx or 3xx (redirects are not followed).
    Unexpected,
}

/// Classify a final HTTP status code.
pub fn classify_http_status(code: u16) -> StatusClass {
    match code {
        200..=299 => StatusClass::Success,
        404 => StatusClass::NotFound,
        400..=499 => StatusClass::ClientError,
        500..=599 => StatusClass::ServerError,
        _ => StatusClass::Unexpected,
    }
}

/// Curl failures that repeat identically on every attempt: a bad URL or
/// scheme, or a redirect loop. Never retried, whatever the policy says.
pub fn is_permanent_curl_error(e: &curl::Error) -> bool {
    e.is_unsupported_protocol() || e.is_url_malformed() || e.is_too_many_redirects()
}

/// Classify a curl error (no HTTP response was obtained).
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FailureKind::Connection;
    }
    FailureKind::Transport
}
