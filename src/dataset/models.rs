use serde::{Deserialize, Serialize};

/// One observed record from the career dataset.
///
/// Rows are loaded once at startup and never mutated; every derived
/// structure (index, vector space, statistics) is rebuilt from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Degree the person holds (e.g. "B.Tech")
    pub undergraduate_course: String,
    /// Specialization within that degree (e.g. "Computer Science")
    pub ug_specialization: String,
    /// The career this person ended up in
    pub career_path: String,
    /// Trimmed, non-empty skill tokens in the order they appeared
    pub skills: Vec<String>,
    /// CGPA or percentage; `None` when blank or unparseable
    pub qualifying_score: Option<f64>,
}

impl DatasetRow {
    /// Convenience constructor used by tests and fixtures.
    pub fn new(
        specialization: &str,
        career: &str,
        skills: &[&str],
        qualifying_score: Option<f64>,
    ) -> Self {
        Self {
            undergraduate_course: String::new(),
            ug_specialization: specialization.to_string(),
            career_path: career.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            qualifying_score,
        }
    }
}
