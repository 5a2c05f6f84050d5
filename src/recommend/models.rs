use serde::{Deserialize, Serialize};

/// One recommended career for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub career: String,
    /// Cosine similarity between the user's skills and the career, 0.0 to 1.0
    pub match_score: f64,
    /// Mean qualifying score of people in this career. `None` when no row
    /// for the career has a score, so it is never reported as 0.
    pub avg_score_required: Option<f64>,
    /// Career skills the user didn't list (case-insensitive), in profile order
    pub missing_skills: Vec<String>,
    /// Number of dataset rows for this career (not deduplicated)
    pub peer_count: usize,
}

/// Knobs for the composer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendParams {
    /// Careers must score strictly above this (default 0.1)
    pub min_score: f64,
    /// Maximum recommendations returned (default 5)
    pub top_n: usize,
    /// Maximum missing skills listed per career (default 5)
    pub max_missing_skills: usize,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            min_score: 0.1,
            top_n: 5,
            max_missing_skills: 5,
        }
    }
}
