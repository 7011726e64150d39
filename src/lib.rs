// http-lambda - HTTP to serverless function invocation gateway
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod lambda;
pub mod metrics;
pub mod models;
pub mod server;
pub mod translation;
pub mod utils;
