//! Sequential per-host update execution.

use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

use url::Url;

use crate::config::ResolvedConfig;
use crate::transport::{HttpClient, HttpError, HttpRequest};

use super::UpdateResult;

/// Sends one authenticated update request per host.
///
/// Hosts are updated one after another in configuration order. A failure
/// on one host is recorded and never stops the remaining hosts, so
/// [`run`](Self::run) always yields exactly one result per host.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
pub struct UpdateExecutor<'a, H> {
    client: &'a H,
    update_url: Url,
    user: String,
    token: String,
    timeout: Duration,
}

impl<H> fmt::Debug for UpdateExecutor<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateExecutor")
            .field("update_url", &self.update_url.as_str())
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl<'a, H: HttpClient> UpdateExecutor<'a, H> {
    /// Creates an executor targeting `update_url` with the given credentials.
    #[must_use]
    pub fn new(
        client: &'a H,
        update_url: Url,
        user: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            update_url,
            user: user.into(),
            token: token.into(),
            timeout,
        }
    }

    /// Creates an executor from resolved configuration.
    #[must_use]
    pub fn from_config(client: &'a H, config: &ResolvedConfig) -> Self {
        Self::new(
            client,
            config.update_url.clone(),
            &config.user,
            &config.token,
            config.timeout,
        )
    }

    /// Updates every host with `ip`, returning results in host order.
    pub async fn run(&self, hosts: &[String], ip: Ipv4Addr) -> Vec<UpdateResult> {
        let mut results = Vec::with_capacity(hosts.len());
        for host in hosts {
            results.push(self.update_host(host, ip).await);
        }
        results
    }

    /// Updates one host. Never fails; errors become failed results.
    pub async fn update_host(&self, host: &str, ip: Ipv4Addr) -> UpdateResult {
        let ip_text = ip.to_string();

        let response = match self.build_request(host, &ip_text) {
            Ok(request) => self.client.request(request).await,
            Err(e) => Err(e),
        };

        let result = match response {
            Ok(response) => UpdateResult::from_reply(
                host,
                &ip_text,
                response.status.as_u16(),
                &response.body_lossy(),
            ),
            Err(e) => UpdateResult::transport_failure(host, &ip_text, &e),
        };

        if result.success {
            tracing::debug!("Updated {host} to {ip_text} (HTTP {})", result.http_status);
        } else {
            tracing::warn!(
                "Update of {host} failed (HTTP {}): {}",
                result.http_status,
                result.body
            );
        }

        result
    }

    fn build_request(&self, host: &str, ip: &str) -> Result<HttpRequest, HttpError> {
        Ok(HttpRequest::get(self.update_url.clone())
            .with_query("hostname", host)
            .with_query("myip", ip)
            .with_basic_auth(&self.user, &self.token)?
            .with_timeout(self.timeout))
    }
}
