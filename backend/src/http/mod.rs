//! HTTP server module for the echo backend.
//!
//! This module provides an axum-based HTTP server exposing the
//! [`crate::echo`] logic as two endpoints.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Body reading and JSON parsing                          │
//! │  - Error bodies (400 on empty / malformed JSON)           │
//! │  - CORS, tracing, body limit                              │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Echo Layer (echo.rs)                                     │
//! │  - input_text extraction and defaulting                   │
//! │  - Fixed welcome / enroute texts                          │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
