//! LeadScout Core - scoring and relay service for the LeadScout dashboard
//!
//! This library provides the profile relevance scoring pipeline used by the
//! LeadScout lead-generation dashboard, together with a stateless CORS relay
//! that forwards browser-blocked requests to third-party APIs.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    rank_by_relevance, score_profile, split_criteria, FixedJitter, JitterSource, Scorer,
    ThreadRngJitter,
};
pub use crate::models::{ProfileRecord, ScoredProfile, ScoringWeights};
pub use crate::services::{RelayClient, RelayError, RelayResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let criteria = split_criteria("Rust, Python");
        assert_eq!(criteria.len(), 2);
    }
}
