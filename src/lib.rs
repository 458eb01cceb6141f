//! zoneedit-ddns: ZoneEdit Dynamic DNS updater
//!
//! A library for resolving updater configuration from several sources,
//! detecting the public IPv4 address, and updating ZoneEdit dynamic DNS
//! records one host at a time.

pub mod address;
pub mod config;
pub mod detect;
pub mod report;
pub mod transport;
pub mod update;
