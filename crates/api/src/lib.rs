//! HTTP API: one inventory evaluation per request.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
