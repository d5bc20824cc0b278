//! One HTTP GET over libcurl.

use super::Timeouts;

/// Largest body kept in memory; the transfer is cut off past this.
pub(crate) const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Longest response text carried in an error message.
const MAX_MESSAGE_CHARS: usize = 512;

/// Final status and body of one completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
    /// Body was longer than `MAX_BODY_BYTES` and the transfer was stopped.
    pub truncated: bool,
}

impl RawResponse {
    /// Body as text (lossy), trimmed and capped; used as the error message for non-2xx.
    pub fn text(&self) -> String {
        let text = String::from_utf8_lossy(&self.body);
        let text = text.trim();
        if text.chars().count() <= MAX_MESSAGE_CHARS && !self.truncated {
            return text.to_string();
        }
        let mut capped: String = text.chars().take(MAX_MESSAGE_CHARS).collect();
        capped.push_str("...");
        capped
    }
}

/// Performs a single GET with `Accept: application/json` and returns the
/// status and body. Redirects are not followed: one call is one round trip.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub(crate) fn get(url: &str, timeouts: &Timeouts) -> Result<RawResponse, curl::Error> {
    let mut body: Vec<u8> = Vec::new();
    let mut truncated = false;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(false)?;
    easy.connect_timeout(timeouts.connect)?;
    easy.timeout(timeouts.request)?;

    let mut list = curl::easy::List::new();
    list.append("Accept: application/json")?;
    easy.http_headers(list)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            let room = MAX_BODY_BYTES - body.len();
            if data.len() > room {
                body.extend_from_slice(&data[..room]);
                truncated = true;
                // Short count makes curl abort with a write error.
                return Ok(0);
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };
    if let Err(e) = performed {
        if !(truncated && e.is_write_error()) {
            return Err(e);
        }
    }

    let code = easy.response_code()?;
    Ok(RawResponse {
        // Out-of-range codes classify as unexpected.
        status: u16::try_from(code).unwrap_or(0),
        body,
        truncated,
    })
}
