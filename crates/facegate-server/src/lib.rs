//! Facegate server library - static front-end delivery with CORS.
//!
//! Split from main.rs so the router can be exercised in integration tests.

pub mod app;
pub mod config;
pub mod logging;
pub mod routes;
pub mod shutdown;
