//! API Module
//!
//! HTTP handlers and routing for the answer cache REST API.
//!
//! # Endpoints
//! - `POST /ask` - Resolve a question through the cache and upstream
//! - `GET /stats` - Resolver counters and cache occupancy
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
