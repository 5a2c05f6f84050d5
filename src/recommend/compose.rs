// Recommendation composer.
//
// Takes the ranked (career, score) list and keeps careers scoring strictly
// above the threshold, in ranked order, up to `top_n`. For each survivor it
// attaches statistics from the raw rows and the user's skill gap.
//
// The composer never produces user-facing text. An empty result means
// "nothing matched" and the caller decides what to say.

use std::collections::HashSet;

use tracing::debug;

use super::models::{RecommendParams, Recommendation};
use crate::dataset::DatasetRow;
use crate::matching::index::CorpusIndex;

/// Build the final recommendation list from a ranking.
pub fn compose<S: AsRef<str>>(
    ranked: &[(String, f64)],
    rows: &[DatasetRow],
    index: &CorpusIndex,
    user_skills: &[S],
    params: &RecommendParams,
) -> Vec<Recommendation> {
    let recommendations: Vec<Recommendation> = ranked
        .iter()
        .filter(|(_, score)| *score > params.min_score)
        .take(params.top_n)
        .map(|(career, score)| {
            let (peer_count, avg_score_required) = career_stats(rows, career);
            let required = index
                .profile(career)
                .map(|p| p.skills.as_slice())
                .unwrap_or(&[]);
            Recommendation {
                career: career.clone(),
                match_score: *score,
                avg_score_required,
                missing_skills: missing_skills(required, user_skills, params.max_missing_skills),
                peer_count,
            }
        })
        .collect();

    debug!(
        ranked = ranked.len(),
        recommended = recommendations.len(),
        min_score = params.min_score,
        "Composed recommendations"
    );

    recommendations
}

/// Row count and mean qualifying score for one career.
///
/// The mean covers only rows that have a score; if none do it is `None`.
pub fn career_stats(rows: &[DatasetRow], career: &str) -> (usize, Option<f64>) {
    let mut peers = 0usize;
    let mut scored = 0usize;
    let mut total = 0.0;

    for row in rows.iter().filter(|r| r.career_path.trim() == career) {
        peers += 1;
        if let Some(score) = row.qualifying_score {
            scored += 1;
            total += score;
        }
    }

    let mean = if scored > 0 {
        Some(total / scored as f64)
    } else {
        None
    };
    (peers, mean)
}

/// Required skills the user doesn't have, compared case-insensitively,
/// capped at `limit` and kept in profile order.
pub fn missing_skills<S: AsRef<str>>(
    required: &[String],
    user_skills: &[S],
    limit: usize,
) -> Vec<String> {
    let have: HashSet<String> = user_skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .collect();

    required
        .iter()
        .filter(|skill| !have.contains(&skill.trim().to_lowercase()))
        .take(limit)
        .cloned()
        .collect()
}
