//! Dynamic DNS record updates.
//!
//! This module provides:
//! - Per-host outcomes ([`UpdateResult`])
//! - Provider reply classification ([`classify_reply`])
//! - Sequential update execution over every configured host ([`UpdateExecutor`])

mod executor;
mod result;


pub use executor::UpdateExecutor;
pub use result::{FAILURE_MARKERS, UpdateResult, classify_reply};
