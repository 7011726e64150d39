//! Axum-based HTTP server for the http-lambda gateway.
//!
//! Every inbound request passes through three stages:
//!
//! - `inbound`: derive the target function, sub-path, headers and body.
//! - translation (see [`crate::translation`]): invoke the function.
//! - `outbound`: apply the function's status, headers and body.
//!
//! `handlers` runs the stages per request and `routes` wires the router.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
pub mod inbound;
pub mod outbound;
mod routes;

pub use routes::{create_router, AppState};
