// Colored terminal output for recommendations, courses and listings.
//
// The `format_*` functions build the text so the interactive guide can
// write it to any sink; the `display_*` wrappers print to stdout.

use std::fmt::Write as _;

use colored::Colorize;

use crate::courses::Course;
use crate::matching::index::SpecializationMap;
use crate::recommend::Recommendation;

/// Format a ranked recommendation list for a person.
///
/// `specialization_careers` are the careers observed for the person's
/// specialization; matching recommendations get a marker. An empty list
/// renders the "no match" advice, which lives here rather than in the
/// composer.
pub fn format_recommendations(
    name: &str,
    recommendations: &[Recommendation],
    specialization_careers: &[String],
) -> String {
    let mut out = String::new();
    let name = if name.trim().is_empty() { "there" } else { name.trim() };

    if recommendations.is_empty() {
        let _ = writeln!(
            out,
            "Dear {name}, based on your profile, I couldn't find specific career matches. \
             Consider exploring more skills or different specializations."
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{}\n",
        format!("Dear {name}, here are your personalized career recommendations:").bold()
    );

    for (i, rec) in recommendations.iter().enumerate() {
        let common = if specialization_careers.iter().any(|c| c == &rec.career) {
            format!("  {}", "(common for your specialization)".cyan())
        } else {
            String::new()
        };
        let _ = writeln!(out, "{}. {}{}", i + 1, rec.career.bold(), common);
        let _ = writeln!(out, "   Match Score: {}", colorize_match(rec.match_score));

        let avg = match rec.avg_score_required {
            Some(avg) => format!("{avg:.1}%"),
            None => "n/a".dimmed().to_string(),
        };
        let _ = writeln!(out, "   Average Required Score: {avg}");

        if !rec.missing_skills.is_empty() {
            let _ = writeln!(
                out,
                "   Recommended skills to acquire: {}",
                rec.missing_skills.join(", ").yellow()
            );
        }
        let _ = writeln!(out, "   Similar profiles in our database: {}\n", rec.peer_count);
    }

    out
}

/// Print a recommendation list to stdout.
pub fn display_recommendations(
    name: &str,
    recommendations: &[Recommendation],
    specialization_careers: &[String],
) {
    print!(
        "{}",
        format_recommendations(name, recommendations, specialization_careers)
    );
}

/// Format the courses recommended for a stream and interest.
pub fn format_courses(courses: &[&Course]) -> String {
    let mut out = String::new();
    if courses.is_empty() {
        let _ = writeln!(out, "I couldn't find any courses matching your criteria.");
        return out;
    }

    let _ = writeln!(
        out,
        "{}\n",
        "Based on your interests, here are my recommendations:".bold()
    );
    for (i, course) in courses.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, course.course);
        let _ = writeln!(
            out,
            "     College: {}",
            super::truncate_chars(&course.college, 80).dimmed()
        );
    }
    out
}

pub fn display_courses(courses: &[&Course]) {
    print!("{}", format_courses(courses));
}

/// Print every specialization with the careers observed for it.
pub fn display_specializations(map: &SpecializationMap) {
    if map.is_empty() {
        println!("No specializations in the dataset.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Specializations ({}) ===", map.len()).bold()
    );
    for (spec, careers) in map.iter() {
        println!("  {}", spec.bold());
        println!("      Careers: {}", careers.join(", ").dimmed());
    }
}

/// Print each stream with its interest options.
pub fn display_streams(streams: &[(String, Vec<&str>)]) {
    if streams.is_empty() {
        println!("No streams in the course catalog.");
        return;
    }

    println!("\n{}", "=== Streams ===".bold());
    for (stream, interests) in streams {
        println!("  {:<12} {}", stream.bold(), interests.join(", ").dimmed());
    }
}

/// Color a match score by band and show it as a percentage.
fn colorize_match(score: f64) -> colored::ColoredString {
    let text = format!("{:.1}%", score * 100.0);
    if score >= 0.5 {
        text.green().bold()
    } else if score >= 0.25 {
        text.yellow()
    } else {
        text.normal()
    }
}
