use crate::core::jitter::JitterSource;
use crate::models::{ProfileRecord, ScoringWeights};

/// Calculate a relevance score (0-1) for a profile against a single criterion
///
/// Scoring formula (weights are additive, not mutually exclusive):
/// ```text
/// score = name_hit    * 0.7
///       + title_hit   * 0.8
///       + company_hit * 0.8
///       + skill_hit   * 0.5     # any skill, counted at most once
///       + url_hit     * 0.3
///       + jitter                # uniform [0, 0.3), diversifies ties
/// ```
/// The total is clamped to 1.0; all terms are non-negative so no lower clamp
/// is needed. A profile matching on several fields saturates at the cap.
pub fn score_profile(
    criterion: &str,
    profile: &ProfileRecord,
    weights: &ScoringWeights,
    jitter: &dyn JitterSource,
) -> f64 {
    let needle = criterion.to_lowercase();

    let mut score = 0.0;

    if field_contains(profile.name.as_deref(), &needle) {
        score += weights.name;
    }
    if field_contains(profile.title.as_deref(), &needle) {
        score += weights.title;
    }
    if field_contains(profile.company.as_deref(), &needle) {
        score += weights.company;
    }
    // First matching skill wins; further matches add nothing
    if profile
        .skills
        .iter()
        .any(|skill| skill.to_lowercase().contains(&needle))
    {
        score += weights.skill;
    }
    if field_contains(profile.url.as_deref(), &needle) {
        score += weights.url;
    }

    // Random tie-breaker so low-information profiles do not all rank equal
    score += jitter.sample() * weights.jitter;

    score.min(1.0)
}

#[inline]
fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Split a raw comma-separated criteria string into normalized criteria
///
/// Tokens are trimmed and empties discarded, so an input of only commas and
/// whitespace yields an empty list rather than an error.
pub fn split_criteria(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
