//! # Echo backend
//!
//! A small HTTP service with two endpoints: a static welcome text on `GET /`
//! and `POST /process-data`, which pulls `input_text` out of a JSON body and
//! returns it inside a fixed envelope.
//!
//! ## Architecture
//!
//! - [`config`]: Server configuration (TOML file plus environment overrides)
//! - [`echo`]: Request-independent echo logic and fixed texts
//! - [`http`]: Axum-based HTTP server and request handlers
//!

pub mod config;
pub mod echo;

#[cfg(feature = "http-server")]
pub mod http;
