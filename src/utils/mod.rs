//! Utility functions and helpers for the http-lambda gateway.
//!
//! # Submodules
//!
//! - `logging`: Tracing subscriber initialization and level resolution.
//! - `request_id`: Per-request correlation ids.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
pub mod request_id;
