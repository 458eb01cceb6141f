//! Per-host update outcome and reply classification.

/// Reply prefixes that signal failure even with HTTP 200.
///
/// Compared case-insensitively against the start of the trimmed body.
/// `nochg` and `good` are absent on purpose: both mean the record is current.
pub const FAILURE_MARKERS: [&str; 9] = [
    "badauth", "nohost", "notfqdn", "badagent", "abuse", "dnserr", "911", "<error", "error",
];

/// Outcome of updating one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    /// Host that was updated
    pub host: String,
    /// IP address sent to the provider
    pub ip: String,
    /// HTTP status code, or 0 when no response was obtained
    pub http_status: u16,
    /// Response body, or `request_error: ...` when no response was obtained
    pub body: String,
    /// Whether the provider accepted the update
    pub success: bool,
}

impl UpdateResult {
    /// Creates a result.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        ip: impl Into<String>,
        http_status: u16,
        body: impl Into<String>,
        success: bool,
    ) -> Self {
        Self {
            host: host.into(),
            ip: ip.into(),
            http_status,
            body: body.into(),
            success,
        }
    }

    /// Creates a failed result for a request that got no response.
    #[must_use]
    pub fn transport_failure(
        host: impl Into<String>,
        ip: impl Into<String>,
        error: &impl std::fmt::Display,
    ) -> Self {
        Self::new(host, ip, 0, format!("request_error: {error}"), false)
    }

    /// Creates a result from a response, classifying it with [`classify_reply`].
    #[must_use]
    pub fn from_reply(
        host: impl Into<String>,
        ip: impl Into<String>,
        http_status: u16,
        body: &str,
    ) -> Self {
        let body = single_line(body);
        let success = classify_reply(http_status, &body);
        Self::new(host, ip, http_status, body, success)
    }
}

/// Returns true if the reply means the update was accepted.
///
/// Only HTTP 200 can succeed, and only when the body does not start with
/// one of the [`FAILURE_MARKERS`].
#[must_use]
pub fn classify_reply(http_status: u16, body: &str) -> bool {
    if http_status != 200 {
        return false;
    }
    let normalized = body.trim().to_lowercase();
    !FAILURE_MARKERS
        .iter()
        .any(|marker| normalized.starts_with(marker))
}

/// Trims the body and joins its lines so each result prints on one line.
fn single_line(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
