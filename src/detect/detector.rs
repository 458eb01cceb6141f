//! Sequential fallback over IP echo services.

use std::net::Ipv4Addr;
use std::time::Duration;

use url::Url;

use crate::address::parse_ipv4;
use crate::config::defaults;
use crate::transport::{HttpClient, HttpRequest};

use super::{DetectAttempt, DetectError};

/// Detects the public IPv4 address by querying echo services in order.
///
/// Each endpoint gets exactly one GET request. A transport error, a non-2xx
/// status, or a body that is not an IPv4 address moves on to the next
/// endpoint; the first valid answer is returned and later endpoints are
/// not contacted.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
#[derive(Debug)]
pub struct IpDetector<'a, H> {
    client: &'a H,
    endpoints: Vec<Url>,
    timeout: Duration,
}

impl<'a, H: HttpClient> IpDetector<'a, H> {
    /// Creates a detector over the given endpoints with the default timeout.
    #[must_use]
    pub fn new(client: &'a H, endpoints: Vec<Url>) -> Self {
        Self {
            client,
            endpoints,
            timeout: defaults::timeout(),
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Queries the endpoints until one returns a valid IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::AllSourcesFailed`] with one attempt per endpoint
    /// if none of them produced a valid address.
    pub async fn detect(&self) -> Result<Ipv4Addr, DetectError> {
        let mut attempts = Vec::with_capacity(self.endpoints.len());

        for endpoint in &self.endpoints {
            match self.query(endpoint).await {
                Ok(ip) => {
                    tracing::debug!("Detected public IP {ip} via {endpoint}");
                    return Ok(ip);
                }
                Err(reason) => {
                    tracing::warn!("IP detection via {endpoint} failed: {reason}");
                    attempts.push(DetectAttempt {
                        endpoint: endpoint.clone(),
                        reason,
                    });
                }
            }
        }

        Err(DetectError::AllSourcesFailed { attempts })
    }

    /// Performs one request; the error is a description of why it was rejected.
    async fn query(&self, endpoint: &Url) -> Result<Ipv4Addr, String> {
        let request = HttpRequest::get(endpoint.clone()).with_timeout(self.timeout);

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| e.to_string())?;

        if !response.is_success() {
            return Err(format!("HTTP {}", response.status.as_u16()));
        }

        let body = response.body_lossy();
        let candidate = body.trim();
        parse_ipv4(candidate).ok_or_else(|| format!("not an IPv4 address: {}", preview(candidate)))
    }
}

/// Shortens a rejected body for log and error messages.
fn preview(body: &str) -> String {
    const MAX_CHARS: usize = 40;

    if body.chars().count() <= MAX_CHARS {
        return format!("{body:?}");
    }
    let head: String = body.chars().take(MAX_CHARS).collect();
    format!("{head:?}...")
}
