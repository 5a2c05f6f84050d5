// Skill matcher trait — swap-ready abstraction.
//
// The engine ranks careers through this trait so the TF-IDF space can be
// replaced (or stubbed in tests) without touching the composer.

use super::rank;
use super::tfidf::TermVectorSpace;

/// Anything that can rank careers against a list of user skills.
pub trait SkillMatcher {
    /// Score every known career, highest first. Empty input ranks nothing.
    fn rank(&self, user_skills: &[String]) -> Vec<(String, f64)>;
}

impl SkillMatcher for TermVectorSpace {
    fn rank(&self, user_skills: &[String]) -> Vec<(String, f64)> {
        rank::rank(self, user_skills)
    }
}
