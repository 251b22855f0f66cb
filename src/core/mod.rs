// Core algorithm exports
pub mod jitter;
pub mod ranker;
pub mod scoring;

pub use jitter::{FixedJitter, JitterSource, ThreadRngJitter};
pub use ranker::{rank_by_relevance, ScoreResult, Scorer};
pub use scoring::{score_profile, split_criteria};
