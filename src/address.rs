//! IPv4 address validation shared by detection and explicit `--ip` handling.

use std::net::Ipv4Addr;

/// Parses a strict dotted-quad IPv4 address.
///
/// Surrounding whitespace is not accepted; callers trim response bodies first.
/// Octets above 255, missing octets and leading zeros are rejected.
#[must_use]
pub fn parse_ipv4(candidate: &str) -> Option<Ipv4Addr> {
    candidate.parse::<Ipv4Addr>().ok()
}

/// Returns true if `candidate` is a syntactically valid IPv4 dotted-quad.
#[must_use]
pub fn is_valid_ipv4(candidate: &str) -> bool {
    parse_ipv4(candidate).is_some()
}
