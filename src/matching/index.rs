// Corpus indexer — derives per-career skill profiles and the
// specialization → career mapping from raw dataset rows.
//
// Everything here is built in one pass and frozen. Callers get plain
// values back; nothing is updated in place after `CorpusIndex::build`.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::dataset::DatasetRow;

/// The union of skills observed for one career across all dataset rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerSkillProfile {
    pub career: String,
    /// Distinct skills in first-seen order
    pub skills: Vec<String>,
    /// Skills joined by whitespace, the text that gets vectorized
    pub document: String,
}

impl CareerSkillProfile {
    fn new(career: String, skills: Vec<String>) -> Self {
        let document = skills.join(" ");
        Self {
            career,
            skills,
            document,
        }
    }
}

/// Which careers have been observed for each undergraduate specialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecializationMap {
    entries: Vec<(String, Vec<String>)>,
    lookup: HashMap<String, usize>,
}

impl SpecializationMap {
    /// Careers observed for a specialization. Unknown specializations map
    /// to an empty slice.
    pub fn careers_for(&self, specialization: &str) -> &[String] {
        self.lookup
            .get(specialization.trim())
            .map(|&i| self.entries[i].1.as_slice())
            .unwrap_or(&[])
    }

    /// Specializations in first-seen order.
    pub fn specializations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(spec, _)| spec.as_str())
    }

    /// (specialization, careers) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(spec, careers)| (spec.as_str(), careers.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derived mappings over the dataset: career skill profiles plus the
/// specialization map.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    profiles: Vec<CareerSkillProfile>,
    lookup: HashMap<String, usize>,
    specializations: SpecializationMap,
}

impl CorpusIndex {
    /// Build the index from dataset rows.
    ///
    /// Career order is the order in which careers first appear in `rows`.
    /// Rows without skills still register their career (with whatever
    /// skills other rows contribute). An empty input yields an empty index.
    pub fn build(rows: &[DatasetRow]) -> Self {
        let mut careers: Vec<(String, Vec<String>, HashSet<String>)> = Vec::new();
        let mut career_lookup: HashMap<String, usize> = HashMap::new();

        let mut spec_entries: Vec<(String, Vec<String>, HashSet<String>)> = Vec::new();
        let mut spec_lookup: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let career = row.career_path.trim();
            let specialization = row.ug_specialization.trim();

            if career.is_empty() {
                debug!(specialization, "Skipping dataset row without a career path");
                continue;
            }

            if !specialization.is_empty() {
                let idx = *spec_lookup
                    .entry(specialization.to_string())
                    .or_insert_with(|| {
                        spec_entries.push((specialization.to_string(), Vec::new(), HashSet::new()));
                        spec_entries.len() - 1
                    });
                let (_, spec_careers, seen) = &mut spec_entries[idx];
                if seen.insert(career.to_string()) {
                    spec_careers.push(career.to_string());
                }
            }

            let idx = *career_lookup.entry(career.to_string()).or_insert_with(|| {
                careers.push((career.to_string(), Vec::new(), HashSet::new()));
                careers.len() - 1
            });
            let (_, skills, seen) = &mut careers[idx];
            for skill in &row.skills {
                let skill = skill.trim();
                if !skill.is_empty() && seen.insert(skill.to_string()) {
                    skills.push(skill.to_string());
                }
            }
        }

        let profiles: Vec<CareerSkillProfile> = careers
            .into_iter()
            .map(|(career, skills, _)| CareerSkillProfile::new(career, skills))
            .collect();

        let entries: Vec<(String, Vec<String>)> = spec_entries
            .into_iter()
            .map(|(spec, careers, _)| (spec, careers))
            .collect();

        debug!(
            careers = profiles.len(),
            specializations = entries.len(),
            "Built corpus index"
        );

        Self {
            profiles,
            lookup: career_lookup,
            specializations: SpecializationMap {
                entries,
                lookup: spec_lookup,
            },
        }
    }

    /// Career profiles in stable career order.
    pub fn profiles(&self) -> &[CareerSkillProfile] {
        &self.profiles
    }

    pub fn profile(&self, career: &str) -> Option<&CareerSkillProfile> {
        self.lookup.get(career).map(|&i| &self.profiles[i])
    }

    pub fn specializations(&self) -> &SpecializationMap {
        &self.specializations
    }

    pub fn career_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
