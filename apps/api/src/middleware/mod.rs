//! Middleware components for the songbridge API
//!
//! - `build_cors_layer`: cross-origin policy for the browser client

pub mod cors;

pub use cors::build_cors_layer;
