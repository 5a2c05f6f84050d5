use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::recommend::models::RecommendParams;

/// Default location of the career dataset, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "./career_recommender_dataset.csv";

/// Default location of the course catalog, relative to the working directory.
pub const DEFAULT_COURSES_PATH: &str = "./All_Streams_Ernakulam_Course_Colleges.csv";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default, so an empty environment is a valid configuration.
/// Numeric settings are kept as raw text and only validated by
/// `recommend_params`, so commands that never rank careers are not
/// affected by a bad threshold.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Career dataset CSV (CAREERPATH_DATASET)
    pub dataset_path: PathBuf,
    /// Course catalog CSV (CAREERPATH_COURSES)
    pub courses_path: PathBuf,
    /// Raw CAREERPATH_MIN_SCORE, if set
    pub min_score: Option<String>,
    /// Raw CAREERPATH_TOP_N, if set
    pub top_n: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Paths fall back to the working directory.
    pub fn load() -> Self {
        let dataset_path = env::var("CAREERPATH_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));
        let courses_path = env::var("CAREERPATH_COURSES")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_COURSES_PATH));

        Self {
            dataset_path,
            courses_path,
            min_score: env::var("CAREERPATH_MIN_SCORE").ok(),
            top_n: env::var("CAREERPATH_TOP_N").ok(),
        }
    }

    /// Recommendation parameters derived from this configuration.
    ///
    /// Fails if CAREERPATH_MIN_SCORE or CAREERPATH_TOP_N is set to an
    /// invalid value, so a typo in .env fails loudly instead of silently
    /// changing the ranking.
    pub fn recommend_params(&self) -> Result<RecommendParams> {
        let mut params = RecommendParams::default();
        if let Some(raw) = &self.min_score {
            params.min_score = parse_min_score(raw).context("Invalid CAREERPATH_MIN_SCORE")?;
        }
        if let Some(raw) = &self.top_n {
            params.top_n = parse_top_n(raw).context("Invalid CAREERPATH_TOP_N")?;
        }
        Ok(params)
    }

    /// Check that the career dataset exists.
    /// Call this before any operation that builds the recommendation engine.
    pub fn require_dataset(&self) -> Result<()> {
        if !self.dataset_path.exists() {
            anyhow::bail!(
                "Career dataset not found: {}\n\
                 Set CAREERPATH_DATASET in your .env file to point at the CSV.",
                self.dataset_path.display()
            );
        }
        Ok(())
    }

    /// Check that the course catalog exists.
    pub fn require_courses(&self) -> Result<()> {
        if !self.courses_path.exists() {
            anyhow::bail!(
                "Course catalog not found: {}\n\
                 Set CAREERPATH_COURSES in your .env file to point at the CSV.",
                self.courses_path.display()
            );
        }
        Ok(())
    }
}

/// Parse a similarity threshold, which must lie in [0, 1].
pub fn parse_min_score(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("min score is not a number: {raw:?}"))?;
    if !(0.0..=1.0).contains(&value) {
        anyhow::bail!("min score must be between 0 and 1, got {value}");
    }
    Ok(value)
}

/// Parse a recommendation cap, which must be a positive integer.
pub fn parse_top_n(raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("top count is not a positive integer: {raw:?}"))?;
    if value == 0 {
        anyhow::bail!("top count must be at least 1");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_min_score() {
        assert!((parse_min_score(" 0.25 ").unwrap() - 0.25).abs() < 1e-12);
        assert!(parse_min_score("1.5").is_err());
        assert!(parse_min_score("-0.1").is_err());
        assert!(parse_min_score("high").is_err());
    }

    #[test]
    fn test_parse_top_n() {
        assert_eq!(parse_top_n("3").unwrap(), 3);
        assert!(parse_top_n("0").is_err());
        assert!(parse_top_n("-2").is_err());
    }

    #[test]
    fn test_recommend_params_keep_gap_cap() {
        let config = Config {
            min_score: Some("0.2".to_string()),
            top_n: Some("3".to_string()),
            ..Config::default()
        };
        let params = config.recommend_params().unwrap();
        assert_eq!(params.top_n, 3);
        assert!((params.min_score - 0.2).abs() < 1e-12);
        assert_eq!(params.max_missing_skills, 5);
    }

    #[test]
    fn test_unset_numbers_use_defaults() {
        let params = Config::default().recommend_params().unwrap();
        assert_eq!(params, RecommendParams::default());
    }

    #[test]
    fn test_bad_threshold_only_fails_ranking() {
        let config = Config {
            dataset_path: PathBuf::from("a.csv"),
            courses_path: PathBuf::from("b.csv"),
            min_score: Some("high".to_string()),
            top_n: None,
        };
        // Paths are still usable by course and listing commands
        assert_eq!(config.courses_path, PathBuf::from("b.csv"));

        let err = config.recommend_params().unwrap_err();
        assert!(format!("{err:#}").contains("CAREERPATH_MIN_SCORE"));

        let config = Config {
            top_n: Some("0".to_string()),
            ..Config::default()
        };
        assert!(format!("{:#}", config.recommend_params().unwrap_err()).contains("CAREERPATH_TOP_N"));
    }
}
