//! HTTP transport layer shared by IP detection and record updates.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod request;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use request::{HttpClient, HttpRequest, HttpResponse};
