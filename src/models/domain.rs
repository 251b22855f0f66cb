use serde::{Deserialize, Serialize};

/// Candidate profile as extracted by the search layer
///
/// All text fields are optional: upstream extractors routinely return partial
/// records, and absent fields simply contribute nothing to the match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Extraction trust metric supplied by the search layer; absent → 0
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl ProfileRecord {
    /// Helper to get confidence as a number, defaulting to 0
    pub fn confidence(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }
}

/// Profile annotated with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub url: Option<String>,
    pub skills: Vec<String>,
    pub confidence: f64,
    /// Relevance score in [0, 1]
    pub score: f64,
}

impl ScoredProfile {
    pub fn from_record(record: ProfileRecord, score: f64) -> Self {
        let confidence = record.confidence();
        Self {
            name: record.name,
            title: record.title,
            company: record.company,
            url: record.url,
            skills: record.skills,
            confidence,
            score,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub name: f64,
    pub title: f64,
    pub company: f64,
    pub skill: f64,
    pub url: f64,
    /// Magnitude of the random tie-breaking term
    pub jitter: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name: 0.7,
            title: 0.8,
            company: 0.8,
            skill: 0.5,
            url: 0.3,
            jitter: 0.3,
        }
    }
}
