// CSV loader for the career dataset.
//
// The dataset carries more columns than we use; only the five named below
// are required. Rows that fail to deserialize are skipped with a warning
// rather than aborting the whole load, since one bad line in a survey
// export shouldn't take the recommender down.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::models::DatasetRow;

/// Columns the loader needs to find in the header row.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Undergraduate Course",
    "UG Specialization",
    "Career Path",
    "Skills",
    "UG CGPA/Percentage",
];

/// Delimiter between skills inside the `Skills` column.
pub const SKILL_DELIMITER: char = ';';

/// Raw CSV row before skill splitting and score parsing.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Undergraduate Course", default)]
    undergraduate_course: String,
    #[serde(rename = "UG Specialization", default)]
    ug_specialization: String,
    #[serde(rename = "Career Path", default)]
    career_path: String,
    #[serde(rename = "Skills", default)]
    skills: String,
    #[serde(rename = "UG CGPA/Percentage", default)]
    qualifying_score: String,
}

/// Load the career dataset from a CSV file on disk.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetRow>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open career dataset {}", path.display()))?;
    let rows = read_dataset(file)
        .with_context(|| format!("Failed to read career dataset {}", path.display()))?;
    info!(rows = rows.len(), path = %path.display(), "Loaded career dataset");
    Ok(rows)
}

/// Parse the career dataset from any CSV source.
///
/// Fails only when the header row is unreadable or a required column is
/// missing. Individual bad rows are skipped.
pub fn read_dataset<R: Read>(source: R) -> Result<Vec<DatasetRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers().context("Failed to read CSV headers")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            anyhow::bail!(
                "Career dataset is missing the {column:?} column. Available columns: {:?}",
                headers.iter().collect::<Vec<_>>()
            );
        }
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (index, result) in reader.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(raw) => rows.push(convert_row(raw, index)),
            Err(e) => {
                skipped += 1;
                // +2: one for the header, one for 1-based line numbers
                warn!(line = index + 2, error = %e, "Skipping unreadable dataset row");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "Some dataset rows could not be read");
    }

    Ok(rows)
}

/// Split a semicolon-delimited skills field into trimmed, non-empty tokens.
pub fn split_skills(field: &str) -> Vec<String> {
    field
        .split(SKILL_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn convert_row(raw: RawRow, index: usize) -> DatasetRow {
    DatasetRow {
        undergraduate_course: raw.undergraduate_course.trim().to_string(),
        ug_specialization: raw.ug_specialization.trim().to_string(),
        career_path: raw.career_path.trim().to_string(),
        skills: split_skills(&raw.skills),
        qualifying_score: parse_score(&raw.qualifying_score, index),
    }
}

fn parse_score(field: &str, index: usize) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(line = index + 2, value = trimmed, "Ignoring non-numeric qualifying score");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Name,Undergraduate Course,UG Specialization,Career Path,Skills,UG CGPA/Percentage\n";

    #[test]
    fn test_split_skills_trims_and_drops_empty() {
        assert_eq!(
            split_skills(" Python ; SQL;;Excel ;"),
            vec!["Python", "SQL", "Excel"]
        );
        assert!(split_skills("").is_empty());
        assert!(split_skills(" ; ").is_empty());
    }

    #[test]
    fn test_read_dataset_parses_rows() {
        let csv = format!(
            "{HEADER}Asha,B.Tech,Computer Science,Data Analyst,Python;SQL;Excel,82.5\n\
             Ravi,B.Com,Accounting,Auditor,,\n"
        );
        let rows = read_dataset(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].undergraduate_course, "B.Tech");
        assert_eq!(rows[0].career_path, "Data Analyst");
        assert_eq!(rows[0].skills, vec!["Python", "SQL", "Excel"]);
        assert_eq!(rows[0].qualifying_score, Some(82.5));

        assert!(rows[1].skills.is_empty());
        assert_eq!(rows[1].qualifying_score, None);
    }

    #[test]
    fn test_non_numeric_score_is_none() {
        let csv = format!("{HEADER}Asha,B.Tech,CS,Developer,Rust,unknown\n");
        let rows = read_dataset(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].qualifying_score, None);
    }

    #[test]
    fn test_missing_column_fails() {
        let csv = "Undergraduate Course,Career Path,Skills\nB.Tech,Developer,Rust\n";
        let err = read_dataset(csv.as_bytes()).unwrap_err();
        assert!(
            err.to_string().contains("UG Specialization"),
            "Error should name the missing column: {err}"
        );
    }

    #[test]
    fn test_header_only_is_empty() {
        let rows = read_dataset(HEADER.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}
