// Dataset status display — row and career counts, vocabulary size, gaps.

use std::path::Path;

use colored::Colorize;

use crate::recommend::CareerEngine;

/// Counts describing a loaded engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub rows: usize,
    pub careers: usize,
    pub specializations: usize,
    pub vocabulary: usize,
    /// Rows with no usable qualifying score
    pub rows_without_score: usize,
    /// Careers whose profile has no skills at all
    pub careers_without_skills: usize,
}

impl DatasetSummary {
    pub fn from_engine(engine: &CareerEngine) -> Self {
        let index = engine.index();
        Self {
            rows: engine.rows().len(),
            careers: index.career_count(),
            specializations: index.specializations().len(),
            vocabulary: engine.space().vocabulary_size(),
            rows_without_score: engine
                .rows()
                .iter()
                .filter(|r| r.qualifying_score.is_none())
                .count(),
            careers_without_skills: index
                .profiles()
                .iter()
                .filter(|p| p.skills.is_empty())
                .count(),
        }
    }
}

/// Display dataset status to the terminal.
pub fn show(engine: &CareerEngine, dataset_path: &Path) {
    let file_size = std::fs::metadata(dataset_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Dataset: {} ({})", dataset_path.display(), file_size);

    let summary = DatasetSummary::from_engine(engine);
    println!("Rows: {}", summary.rows);
    println!(
        "Careers: {} ({} without any listed skills)",
        summary.careers, summary.careers_without_skills
    );
    println!("Specializations: {}", summary.specializations);
    println!("Skill vocabulary: {} terms", summary.vocabulary);

    if summary.rows_without_score > 0 {
        println!(
            "{}",
            format!(
                "Rows without a qualifying score: {} (excluded from averages)",
                summary.rows_without_score
            )
            .yellow()
        );
    }

    if summary.careers == 0 {
        println!(
            "\n{}",
            "The dataset has no careers; every recommendation will be empty.".yellow()
        );
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
