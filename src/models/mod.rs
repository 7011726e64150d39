//! Data models exchanged between the gateway and the invocation backend.
//!
//! - `envelope`: the API Gateway style request envelope sent to a function
//!   and the result envelope it returns.
//! - `request`: the parsed inbound request and its target.

// Author: kelexine (https://github.com/kelexine)

pub mod envelope;
pub mod request;

pub use envelope::{InvocationEnvelope, InvocationResult, RawInvocationResult};
pub use request::{InboundRequest, TargetRef};
