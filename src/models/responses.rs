//! Response DTOs for the answer cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::resolve::MetricsSnapshot;

/// Response body for the ASK operation (POST /ask)
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    /// The resolved question (trimmed form, as cached)
    pub question: String,
    /// The full answer
    pub answer: String,
    /// The answer split into transport-sized segments
    pub chunks: Vec<String>,
}

impl AskResponse {
    /// Creates a new AskResponse
    pub fn new(question: impl Into<String>, answer: impl Into<String>, chunks: Vec<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            chunks,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Requests answered straight from the cache
    pub hits: u64,
    /// Requests that found no fresh cache entry
    pub misses: u64,
    /// Successful upstream generations
    pub generations: u64,
    /// Failed upstream generations
    pub generation_failures: u64,
    /// Requests that waited on another caller's generation
    pub coalesced_waits: u64,
    /// Entries currently occupying cache storage
    pub entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a metrics snapshot
    pub fn new(metrics: MetricsSnapshot, entries: usize) -> Self {
        let hit_rate = metrics.hit_rate();
        Self {
            hits: metrics.hits,
            misses: metrics.misses,
            generations: metrics.generations,
            generation_failures: metrics.generation_failures,
            coalesced_waits: metrics.coalesced_waits,
            entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(hits: u64, misses: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            hits,
            misses,
            generations: 0,
            generation_failures: 0,
            coalesced_waits: 0,
        }
    }

    #[test]
    fn test_ask_response_serialize() {
        let resp = AskResponse::new("q", "a long answer", vec!["a long ".to_string(), "answer".to_string()]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("a long answer"));
        assert!(json.contains("chunks"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let resp = StatsResponse::new(snapshot(80, 20), 5);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.entries, 5);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(snapshot(0, 0), 0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
