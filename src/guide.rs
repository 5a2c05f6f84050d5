// Interactive guide — question/answer flows for careers and courses.
//
// Both flows read from any `BufRead` and write to any `Write`, so the CLI
// passes stdin/stdout and tests pass byte buffers. End of input ends the
// flow quietly; it is not an error.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::courses::{interests_for, normalize_stream, CourseCatalog};
use crate::output::terminal::{format_courses, format_recommendations};
use crate::recommend::{CareerEngine, RecommendParams, Recommendation};

/// Write a bot line, then read one trimmed answer. `None` at end of input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    writeln!(output, "\nBot: {message}")?;
    write!(output, "You: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Split a comma-separated answer into trimmed, non-empty skills.
pub fn parse_skill_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Ask for name, qualification, specialization and skills, then print
/// the recommendations.
///
/// Returns the recommendations, or `None` if input ended early.
pub fn run_career_guide<R: BufRead, W: Write>(
    engine: &CareerEngine,
    params: &RecommendParams,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Vec<Recommendation>>> {
    let Some(name) = prompt(
        input,
        output,
        "Hello! I'm your career guidance assistant. What's your name?",
    )?
    else {
        return Ok(None);
    };

    let mut question = format!(
        "Hi {name}! What's your educational qualification?\nAvailable qualifications from our dataset:"
    );
    for (i, qualification) in engine.qualifications().iter().enumerate() {
        question.push_str(&format!("\n{}. {qualification}", i + 1));
    }
    let Some(education) = prompt(input, output, &question)? else {
        return Ok(None);
    };

    let mut question =
        String::from("What's your specialization?\nAvailable specializations from our dataset:");
    for spec in engine.index().specializations().specializations() {
        question.push_str(&format!("\n- {spec}"));
    }
    let Some(specialization) = prompt(input, output, &question)? else {
        return Ok(None);
    };

    let Some(skills_answer) = prompt(
        input,
        output,
        "What skills do you have? (Enter comma-separated skills)",
    )?
    else {
        return Ok(None);
    };
    let skills = parse_skill_list(&skills_answer);

    debug!(
        education = %education,
        specialization = %specialization,
        skills = skills.len(),
        "Career guide answers collected"
    );

    let recommendations = engine.recommend(&skills, params);
    let text = format_recommendations(
        &name,
        &recommendations,
        engine.specialization_careers(&specialization),
    );
    writeln!(output, "\nBot: {text}")?;

    Ok(Some(recommendations))
}

/// Ask for a stream and interest, list matching courses, and repeat until
/// the person answers anything other than "yes".
pub fn run_course_guide<R: BufRead, W: Write>(
    catalog: &CourseCatalog,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "\nBot: Hi! I'm your course recommendation assistant. I can help you find courses and colleges."
    )?;

    let streams = catalog.streams();
    loop {
        let Some(answer) = prompt(
            input,
            output,
            &format!("What stream interests you? ({})", streams.join("/")),
        )?
        else {
            return Ok(());
        };
        let stream = normalize_stream(&answer);
        if !streams.contains(&stream) {
            writeln!(output, "\nBot: Please select a valid stream.")?;
            continue;
        }

        let interests = interests_for(&stream);
        let Some(interest) = prompt(
            input,
            output,
            &format!(
                "What specific area interests you within {stream}? Options: {}",
                interests.join(", ")
            ),
        )?
        else {
            return Ok(());
        };
        if !interests.contains(&interest.as_str()) {
            writeln!(output, "\nBot: Please select a valid interest.")?;
            continue;
        }

        let courses = catalog.recommend(&stream, &interest);
        writeln!(output, "\nBot: {}", format_courses(&courses))?;

        let again = prompt(
            input,
            output,
            "Would you like to search for more courses? (yes/no)",
        )?;
        if again.map(|a| a.to_lowercase()) != Some("yes".to_string()) {
            writeln!(
                output,
                "\nBot: Thank you for using the course recommendation assistant! Good luck with your studies!"
            )?;
            return Ok(());
        }
    }
}
