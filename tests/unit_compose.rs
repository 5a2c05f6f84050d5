// Unit tests for the recommendation composer.
//
// Uses hand-built rankings so thresholds and caps can be hit exactly,
// independent of TF-IDF arithmetic.

use careerpath::dataset::DatasetRow;
use careerpath::matching::index::CorpusIndex;
use careerpath::recommend::compose::{compose, missing_skills};
use careerpath::recommend::RecommendParams;

fn rows() -> Vec<DatasetRow> {
    vec![
        DatasetRow::new("CS", "Data Analyst", &["SQL", "Excel", "Python"], Some(80.0)),
        DatasetRow::new("CS", "Data Analyst", &["Tableau"], Some(60.0)),
        DatasetRow::new("Mech", "Welder", &["Welding", "Metalwork"], None),
        DatasetRow::new("Mech", "Welder", &["Blueprint Reading"], None),
    ]
}

fn ranked(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs.iter().map(|(c, s)| (c.to_string(), *s)).collect()
}

// ============================================================
// Threshold
// ============================================================

#[test]
fn score_equal_to_threshold_is_excluded() {
    let rows = rows();
    let index = CorpusIndex::build(&rows);
    let recs = compose(
        &ranked(&[("Data Analyst", 0.1)]),
        &rows,
        &index,
        &["SQL"],
        &RecommendParams::default(),
    );
    assert!(recs.is_empty(), "Score of exactly 0.1 must be excluded");
}

#[test]
fn score_just_above_threshold_is_included() {
    let rows = rows();
    let index = CorpusIndex::build(&rows);
    let recs = compose(
        &ranked(&[("Data Analyst", 0.1 + 1e-9)]),
        &rows,
        &index,
        &["SQL"],
        &RecommendParams::default(),
    );
    assert_eq!(recs.len(), 1);
}

#[test]
fn custom_threshold_respected() {
    let rows = rows();
    let index = CorpusIndex::build(&rows);
    let params = RecommendParams {
        min_score: 0.5,
        ..RecommendParams::default()
    };
    let recs = compose(
        &ranked(&[("Data Analyst", 0.6), ("Welder", 0.4)]),
        &rows,
        &index,
        &["SQL"],
        &params,
    );
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].career, "Data Analyst");
}

// ============================================================
// Statistics and skill gap
// ============================================================

#[test]
fn stats_and_gap_filled_in() {
    let rows = rows();
    let index = CorpusIndex::build(&rows);
    let recs = compose(
        &ranked(&[("Data Analyst", 0.8), ("Welder", 0.3)]),
        &rows,
        &index,
        &["sql", "PYTHON"],
        &RecommendParams::default(),
    );

    assert_eq!(recs.len(), 2);

    let analyst = &recs[0];
    assert_eq!(analyst.career, "Data Analyst");
    assert!((analyst.match_score - 0.8).abs() < 1e-12);
    assert_eq!(analyst.peer_count, 2);
    assert!((analyst.avg_score_required.unwrap() - 70.0).abs() < 1e-12);
    assert_eq!(analyst.missing_skills, vec!["Excel", "Tableau"]);

    let welder = &recs[1];
    assert_eq!(welder.peer_count, 2);
    assert_eq!(
        welder.avg_score_required, None,
        "All-missing scores must stay undefined, not 0"
    );
}

#[test]
fn missing_skills_invariant_under_case() {
    let required = vec!["SQL".to_string(), "Excel".to_string(), "Python".to_string()];
    let lower = missing_skills(&required, &["sql"], 5);
    let upper = missing_skills(&required, &["SQL"], 5);
    assert_eq!(lower, upper);

    let required_lower: Vec<String> = required.iter().map(|s| s.to_lowercase()).collect();
    let flipped = missing_skills(&required_lower, &["Sql"], 5);
    assert_eq!(flipped, vec!["excel", "python"]);
}

// ============================================================
// Caps
// ============================================================

#[test]
fn missing_skills_never_exceed_five() {
    let skills: Vec<String> = (1..=9).map(|i| format!("Skill {i}")).collect();
    let skill_refs: Vec<&str> = skills.iter().map(String::as_str).collect();
    let rows = vec![DatasetRow::new("CS", "Generalist", &skill_refs, Some(50.0))];
    let index = CorpusIndex::build(&rows);

    let recs = compose(
        &ranked(&[("Generalist", 0.9)]),
        &rows,
        &index,
        &Vec::<String>::new(),
        &RecommendParams::default(),
    );
    assert_eq!(recs[0].missing_skills.len(), 5);
    assert_eq!(recs[0].missing_skills[0], "Skill 1");
}

#[test]
fn list_capped_at_top_n_keeping_highest() {
    let rows: Vec<DatasetRow> = (0..8)
        .map(|i| DatasetRow::new("CS", &format!("Career {i}"), &["Skill"], Some(50.0)))
        .collect();
    let index = CorpusIndex::build(&rows);
    let ranking: Vec<(String, f64)> = (0..8)
        .map(|i| (format!("Career {i}"), 0.9 - i as f64 * 0.05))
        .collect();

    let recs = compose(&ranking, &rows, &index, &["Skill"], &RecommendParams::default());
    assert_eq!(recs.len(), 5);
    let careers: Vec<&str> = recs.iter().map(|r| r.career.as_str()).collect();
    assert_eq!(
        careers,
        vec!["Career 0", "Career 1", "Career 2", "Career 3", "Career 4"]
    );
}

#[test]
fn empty_ranking_composes_nothing() {
    let rows = rows();
    let index = CorpusIndex::build(&rows);
    let recs = compose(&[], &rows, &index, &["SQL"], &RecommendParams::default());
    assert!(recs.is_empty());
}
