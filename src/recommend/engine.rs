// CareerEngine — the dataset plus everything derived from it, built once.
//
// The engine owns the rows, the corpus index and the TF-IDF space. None of
// them change after `build`, so an engine can be wrapped in an `Arc` and
// queried from any number of threads. Reloading the dataset means building
// a new engine and swapping it in whole.

use std::collections::HashSet;

use tracing::info;

use super::compose::compose;
use super::models::{RecommendParams, Recommendation};
use crate::dataset::DatasetRow;
use crate::matching::index::CorpusIndex;
use crate::matching::tfidf::TermVectorSpace;
use crate::matching::traits::SkillMatcher;

pub struct CareerEngine {
    rows: Vec<DatasetRow>,
    index: CorpusIndex,
    space: TermVectorSpace,
}

impl CareerEngine {
    /// Index the rows and fit the skill vector space.
    pub fn build(rows: Vec<DatasetRow>) -> Self {
        let index = CorpusIndex::build(&rows);
        let space = TermVectorSpace::build(index.profiles());

        info!(
            rows = rows.len(),
            careers = index.career_count(),
            specializations = index.specializations().len(),
            "Career engine ready"
        );

        Self { rows, index, space }
    }

    /// Rank careers for the user's skills and compose the recommendations.
    pub fn recommend(&self, user_skills: &[String], params: &RecommendParams) -> Vec<Recommendation> {
        self.recommend_with(&self.space, user_skills, params)
    }

    /// Same as `recommend`, but ranking through an arbitrary matcher.
    pub fn recommend_with(
        &self,
        matcher: &dyn SkillMatcher,
        user_skills: &[String],
        params: &RecommendParams,
    ) -> Vec<Recommendation> {
        let ranked = matcher.rank(user_skills);
        compose(&ranked, &self.rows, &self.index, user_skills, params)
    }

    /// Full ranking with scores for every career, before any filtering.
    pub fn ranking(&self, user_skills: &[String]) -> Vec<(String, f64)> {
        self.space.rank(user_skills)
    }

    /// Careers commonly taken by people with this specialization.
    pub fn specialization_careers(&self, specialization: &str) -> &[String] {
        self.index.specializations().careers_for(specialization)
    }

    /// Distinct undergraduate courses, upper-cased, in first-seen order.
    pub fn qualifications(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|r| r.undergraduate_course.trim().to_uppercase())
            .filter(|q| !q.is_empty() && seen.insert(q.clone()))
            .collect()
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn space(&self) -> &TermVectorSpace {
        &self.space
    }
}
