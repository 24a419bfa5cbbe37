//! Oracle Cache - a request-coalescing answer cache
//!
//! Sits between many concurrent callers and a slow upstream generator,
//! guaranteeing at most one in-flight generation per question, reusing
//! successful answers for a bounded TTL, and chunking oversized answers
//! for size-limited transports.

pub mod api;
pub mod cache;
pub mod chunk;
pub mod config;
pub mod error;
pub mod models;
pub mod resolve;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use resolve::Resolver;
pub use tasks::spawn_sweep_task;
