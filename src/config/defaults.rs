//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// ZoneEdit dynamic DNS update endpoint.
pub const UPDATE_URL: &str = "https://api.cp.zoneedit.com/dyn/generic.php";

/// Public IPv4 detection services, tried in this order.
pub const DETECT_ENDPOINTS: [&str; 3] = [
    "https://api.ipify.org",
    "https://ipv4.icanhazip.com",
    "https://ifconfig.me/ip",
];

/// Default HTTP timeout in seconds.
pub const TIMEOUT_SECS: f64 = 10.0;

/// Default YAML configuration file path, relative to the working directory.
pub const CONFIG_PATH: &str = "config/ZoneEdit.yaml";

/// Default dotenv file path, relative to the working directory.
pub const ENV_FILE: &str = ".env";

/// Default HTTP timeout as Duration.
#[must_use]
pub fn timeout() -> Duration {
    Duration::from_secs_f64(TIMEOUT_SECS)
}

/// Key names shared by the dotenv file and the process environment.
pub mod env_key {
    /// ZoneEdit user name.
    pub const USER: &str = "ZONEEDIT_USER";
    /// Dynamic DNS token.
    pub const TOKEN: &str = "ZONEEDIT_TOKEN";
    /// Comma-separated host list.
    pub const HOSTS: &str = "ZONEEDIT_HOSTS";
    /// Explicit IPv4 address.
    pub const IP: &str = "ZONEEDIT_IP";
    /// HTTP timeout in seconds.
    pub const TIMEOUT: &str = "ZONEEDIT_TIMEOUT";
}

/// Default update endpoint as a parsed URL.
///
/// # Panics
///
/// Never; [`UPDATE_URL`] is a valid absolute URL.
#[must_use]
pub fn update_url() -> url::Url {
    url::Url::parse(UPDATE_URL).expect("UPDATE_URL is a valid URL")
}

/// Default detection endpoints as parsed URLs, in order.
///
/// # Panics
///
/// Never; every entry of [`DETECT_ENDPOINTS`] is a valid absolute URL.
#[must_use]
pub fn detect_endpoints() -> Vec<url::Url> {
    DETECT_ENDPOINTS
        .iter()
        .map(|raw| url::Url::parse(raw).expect("DETECT_ENDPOINTS are valid URLs"))
        .collect()
}
