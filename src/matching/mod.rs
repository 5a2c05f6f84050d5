// Skill matching — corpus indexing, TF-IDF vector space, and ranking.

pub mod index;
pub mod rank;
pub mod tfidf;
pub mod tokenizer;
pub mod traits;
