//! Turn one completed HTTP exchange into an attempt outcome.

use super::transport::{RawResponse, MAX_BODY_BYTES};
use crate::error::FetchError;
use crate::movie_info::MovieInfo;
use crate::retry::{classify_http_status, AttemptOutcome, FailureCause, StatusClass};

pub(crate) fn interpret(id: &str, response: RawResponse) -> AttemptOutcome<MovieInfo> {
    let status = response.status;
    match classify_http_status(status) {
        StatusClass::Success if response.truncated => {
            AttemptOutcome::Terminal(FetchError::MalformedResponse {
                message: format!("response body exceeds {MAX_BODY_BYTES} bytes"),
            })
        }
        StatusClass::Success => match MovieInfo::from_json(&response.body) {
            Ok(movie) => AttemptOutcome::Success(movie),
            Err(e) => AttemptOutcome::Terminal(FetchError::MalformedResponse {
                message: e.to_string(),
            }),
        },
        StatusClass::NotFound => {
            AttemptOutcome::Terminal(FetchError::NotFound { id: id.to_string() })
        }
        StatusClass::ClientError => AttemptOutcome::Terminal(FetchError::ClientError {
            status,
            message: response.text(),
        }),
        StatusClass::ServerError => AttemptOutcome::Retryable(FailureCause::Server {
            status,
            message: response.text(),
        }),
        StatusClass::Unexpected => AttemptOutcome::Terminal(FetchError::MalformedResponse {
            message: format!("unexpected HTTP status {status}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.as_bytes().to_vec(),
            truncated: false,
        }
    }

    #[test]
    fn ok_with_valid_body_is_success() {
        let body = r#"{"id":"abc","name":"Batman Begins","year":2005,"cast":["Christian Bale"],"releaseDate":"2005-06-15"}"#;
        match interpret("abc", resp(200, body)) {
            AttemptOutcome::Success(m) => assert_eq!(m.name, "Batman Begins"),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn ok_with_missing_field_is_terminal_malformed() {
        let body = r#"{"id":"abc","year":2005,"cast":[],"releaseDate":"2005-06-15"}"#;
        match interpret("abc", resp(200, body)) {
            AttemptOutcome::Terminal(FetchError::MalformedResponse { message }) => {
                assert!(message.contains("name"), "{message}")
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn not_found_is_terminal() {
        match interpret("def", resp(404, "")) {
            AttemptOutcome::Terminal(FetchError::NotFound { id }) => assert_eq!(id, "def"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn bad_request_keeps_status_and_body() {
        match interpret("abc", resp(400, "movieInfo.name must be present\n")) {
            AttemptOutcome::Terminal(FetchError::ClientError { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "movieInfo.name must be present");
            }
            other => panic!("expected client error, got {other:?}"),
        }
    }

    #[test]
    fn server_error_is_retryable_with_body() {
        match interpret("abc", resp(503, "restarting")) {
            AttemptOutcome::Retryable(cause) => {
                assert_eq!(cause.status(), Some(503));
                assert_eq!(cause.message(), "restarting");
            }
            other => panic!("expected retryable, got {other:?}"),
        }
    }

    #[test]
    fn redirect_is_terminal() {
        assert!(matches!(
            interpret("abc", resp(302, "")),
            AttemptOutcome::Terminal(FetchError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn oversized_ok_body_is_terminal_malformed() {
        let raw = RawResponse {
            status: 200,
            body: vec![b' '; 16],
            truncated: true,
        };
        match interpret("abc", raw) {
            AttemptOutcome::Terminal(FetchError::MalformedResponse { message }) => {
                assert!(message.contains("exceeds"), "{message}")
            }
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn oversized_server_error_stays_retryable_with_capped_message() {
        let raw = RawResponse {
            status: 500,
            body: vec![b'e'; 4096],
            truncated: true,
        };
        match interpret("abc", raw) {
            AttemptOutcome::Retryable(cause) => {
                assert_eq!(cause.status(), Some(500));
                assert!(cause.message().len() < 1024);
            }
            other => panic!("expected retryable, got {other:?}"),
        }
    }
}
