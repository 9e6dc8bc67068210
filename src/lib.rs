//! Courier - minimal HTTP/1.1 server
//!
//! Core library: request parsing, routing, handlers and response assembly.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
