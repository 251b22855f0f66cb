use crate::core::jitter::{JitterSource, ThreadRngJitter};
use crate::core::scoring::{score_profile, split_criteria};
use crate::models::{ProfileRecord, ScoredProfile, ScoringWeights};
use std::cmp::Ordering;
use std::sync::Arc;

/// Result of scoring a batch of candidates
#[derive(Debug)]
pub struct ScoreResult {
    pub results: Vec<ScoredProfile>,
    pub total_candidates: usize,
}

/// Rank scored profiles by relevance
///
/// Sorts descending by score, then by confidence. The underlying sort is
/// stable, so profiles tied on both keys keep their input order.
pub fn rank_by_relevance(mut profiles: Vec<ScoredProfile>) -> Vec<ScoredProfile> {
    profiles.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(Ordering::Equal)
            })
    });
    profiles
}

/// Scoring orchestrator - splits criteria, scores candidates, ranks results
///
/// Holds the configured weights and the injected jitter source. Scoring is a
/// pure synchronous computation; the orchestrator is cheap to clone and safe
/// to share across request handlers.
#[derive(Clone)]
pub struct Scorer {
    weights: ScoringWeights,
    jitter: Arc<dyn JitterSource>,
}

impl Scorer {
    pub fn new(weights: ScoringWeights, jitter: Arc<dyn JitterSource>) -> Self {
        Self { weights, jitter }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            jitter: Arc::new(ThreadRngJitter),
        }
    }

    /// Score candidates against a raw comma-separated criteria string
    ///
    /// Each profile is scored against every criterion and keeps its best
    /// single-criterion score. When the criteria string splits to nothing the
    /// ranking degrades to jitter only, matching the no-hit case.
    ///
    /// # Arguments
    /// * `raw_criteria` - comma-separated free-text criteria
    /// * `candidates` - profiles extracted by the search layer
    /// * `limit` - maximum number of results to return
    pub fn score_and_rank(
        &self,
        raw_criteria: &str,
        candidates: Vec<ProfileRecord>,
        limit: usize,
    ) -> ScoreResult {
        let total_candidates = candidates.len();
        let criteria = split_criteria(raw_criteria);

        let scored: Vec<ScoredProfile> = candidates
            .into_iter()
            .map(|profile| {
                let score = if criteria.is_empty() {
                    (self.jitter.sample() * self.weights.jitter).min(1.0)
                } else {
                    criteria
                        .iter()
                        .map(|criterion| {
                            score_profile(criterion, &profile, &self.weights, self.jitter.as_ref())
                        })
                        .fold(0.0_f64, f64::max)
                };

                ScoredProfile::from_record(profile, score)
            })
            .collect();

        let mut results = rank_by_relevance(scored);
        results.truncate(limit);

        ScoreResult {
            results,
            total_candidates,
        }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
