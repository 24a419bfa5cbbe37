//! Upstream Module
//!
//! Client for the slow backend that generates answers. The resolver
//! treats it as an opaque generator; nothing outside this module knows
//! about the wire format.

mod client;

pub use client::UpstreamClient;
