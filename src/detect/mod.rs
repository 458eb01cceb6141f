//! Public IPv4 detection.
//!
//! Echo services are tried one at a time in a fixed order. The first one
//! that answers with a valid IPv4 address wins ([`IpDetector`]).

mod detector;
mod error;


pub use detector::IpDetector;
pub use error::{DetectAttempt, DetectError};
