// Course catalog: colleges and their courses, grouped by stream.
//
// Loaded once from CSV. Recommendations filter by stream first, then by
// the interest's keyword list.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::interests::keywords_for;

/// A course offered by a college within a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "Stream")]
    pub stream: String,
    #[serde(rename = "Course")]
    pub course: String,
    #[serde(rename = "College")]
    pub college: String,
}

/// All known courses, loaded once.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Load the catalog from a CSV with `Stream`, `Course` and `College`
    /// columns.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open course catalog {}", path.display()))?;
        let catalog = Self::read(file)
            .with_context(|| format!("Failed to read course catalog {}", path.display()))?;
        info!(courses = catalog.courses.len(), path = %path.display(), "Loaded course catalog");
        Ok(catalog)
    }

    /// Parse a catalog from any CSV source. Unreadable rows are skipped.
    pub fn read<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers().context("Failed to read CSV headers")?.clone();
        for column in ["Stream", "Course", "College"] {
            if !headers.iter().any(|h| h == column) {
                anyhow::bail!(
                    "Course catalog is missing the {column:?} column. Available columns: {:?}",
                    headers.iter().collect::<Vec<_>>()
                );
            }
        }

        let mut courses = Vec::new();
        for (index, result) in reader.deserialize::<Course>().enumerate() {
            match result {
                Ok(course) => courses.push(course),
                Err(e) => warn!(line = index + 2, error = %e, "Skipping unreadable course row"),
            }
        }
        Ok(Self { courses })
    }

    /// Distinct streams, sorted.
    pub fn streams(&self) -> Vec<String> {
        self.courses
            .iter()
            .map(|c| c.stream.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Courses in a stream that match an interest.
    ///
    /// Interests with a keyword list keep courses whose name contains any
    /// keyword (case-sensitive). `All Courses`, or any interest without
    /// keywords, returns the whole stream.
    pub fn recommend(&self, stream: &str, interest: &str) -> Vec<&Course> {
        let in_stream = self.courses.iter().filter(|c| c.stream == stream);
        match keywords_for(interest) {
            Some(keywords) => in_stream
                .filter(|c| keywords.iter().any(|k| c.course.contains(k)))
                .collect(),
            None => in_stream.collect(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::ALL_COURSES;

    const CSV: &str = "Stream,Course,College\n\
        Science,B.Tech Computer Science,Model Engineering College\n\
        Science,MBBS,Govt Medical College\n\
        Commerce,B.Com Finance,St. Albert's\n\
        Science,B.Sc. Physics,Maharaja's College\n";

    #[test]
    fn test_streams_sorted_distinct() {
        let catalog = CourseCatalog::read(CSV.as_bytes()).unwrap();
        assert_eq!(catalog.streams(), vec!["Commerce", "Science"]);
    }

    #[test]
    fn test_recommend_by_keyword() {
        let catalog = CourseCatalog::read(CSV.as_bytes()).unwrap();
        let medical = catalog.recommend("Science", "Medical");
        assert_eq!(medical.len(), 1);
        assert_eq!(medical[0].college, "Govt Medical College");
    }

    #[test]
    fn test_all_courses_returns_stream() {
        let catalog = CourseCatalog::read(CSV.as_bytes()).unwrap();
        assert_eq!(catalog.recommend("Science", ALL_COURSES).len(), 3);
        assert!(catalog.recommend("Arts", ALL_COURSES).is_empty());
    }

    #[test]
    fn test_missing_column_fails() {
        assert!(CourseCatalog::read("Stream,Course\nScience,MBBS\n".as_bytes()).is_err());
    }
}
