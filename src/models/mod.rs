// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ProfileRecord, ScoredProfile, ScoringWeights};
pub use requests::{RelayRequest, ScoreProfilesRequest};
pub use responses::{ErrorResponse, HealthResponse, ScoreProfilesResponse};
