// Similarity ranker — scores a user's skills against every career.

use std::cmp::Ordering;

use tracing::debug;

use super::tfidf::{SparseVector, TermVectorSpace};

/// Cosine similarity between two unit-length sparse vectors.
///
/// Both vectors must be sorted by column (as produced by
/// `TermVectorSpace`). Empty vectors score 0.0. The result is clamped to
/// [0, 1] so rounding can never push a perfect match above 1.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot.clamp(0.0, 1.0)
}

/// Rank every career in the space by similarity to the user's skills.
///
/// Returns `(career, score)` pairs sorted by descending score; ties keep
/// the space's career order. Empty (or all-blank) skill input returns an
/// empty ranking, as does an empty space.
pub fn rank<S: AsRef<str>>(space: &TermVectorSpace, user_skills: &[S]) -> Vec<(String, f64)> {
    let skills: Vec<&str> = user_skills
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect();

    if skills.is_empty() || space.is_empty() {
        return Vec::new();
    }

    let query = space.project(&skills.join(" "));

    let mut scored: Vec<(String, f64)> = space
        .careers()
        .iter()
        .zip(space.vectors())
        .map(|(career, vector)| (career.clone(), cosine_similarity(&query, vector)))
        .collect();

    // sort_by is stable, so equal scores stay in career order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    debug!(
        skills = skills.len(),
        query_terms = query.len(),
        top = scored.first().map(|(c, _)| c.as_str()).unwrap_or(""),
        "Ranked careers"
    );

    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical() {
        let v = vec![(0, 0.6), (3, 0.8)];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_disjoint() {
        let a = vec![(0, 1.0)];
        let b = vec![(1, 1.0)];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_empty() {
        assert_eq!(cosine_similarity(&Vec::new(), &vec![(0, 1.0)]), 0.0);
    }

    #[test]
    fn test_cosine_partial_overlap() {
        let a = vec![(0, 0.6), (1, 0.8)];
        let b = vec![(1, 0.6), (2, 0.8)];
        assert!((cosine_similarity(&a, &b) - 0.48).abs() < 1e-12);
    }
}
