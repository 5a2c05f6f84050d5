// Careerpath: skill-based career and course recommendations
//
// This is the library root. Each module corresponds to a stage of the
// recommendation pipeline or one of the surfaces around it.

pub mod config;
pub mod courses;
pub mod dataset;
pub mod guide;
pub mod matching;
pub mod output;
pub mod recommend;
pub mod status;
