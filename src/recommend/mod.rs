// Recommendations — turning a ranked career list into records a person
// can act on: match score, typical qualifying score, skill gap, peer count.

pub mod compose;
pub mod engine;
pub mod models;

pub use engine::CareerEngine;
pub use models::{RecommendParams, Recommendation};
