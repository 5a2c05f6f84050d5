use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use careerpath::config::{parse_min_score, parse_top_n, Config};
use careerpath::courses::{interests_for, normalize_stream, CourseCatalog, ALL_COURSES};
use careerpath::dataset::load_dataset;
use careerpath::guide::{self, parse_skill_list};
use careerpath::output::{json, terminal};
use careerpath::recommend::CareerEngine;

/// Careerpath: career and course recommendations from your skills.
///
/// Matches the skills you have against careers observed in a dataset of
/// graduates, and shows which skills you'd still need for each match.
#[derive(Parser)]
#[command(name = "careerpath", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend careers for a set of skills
    Recommend {
        /// Comma-separated skills (e.g. "Python, SQL, Excel")
        #[arg(long)]
        skills: String,

        /// Your undergraduate specialization (marks careers common for it)
        #[arg(long, default_value = "")]
        specialization: String,

        /// Name used in the greeting
        #[arg(long, default_value = "")]
        name: String,

        /// Only recommend careers scoring above this (default: CAREERPATH_MIN_SCORE or 0.1)
        #[arg(long, value_parser = parse_min_score)]
        min_score: Option<f64>,

        /// Maximum recommendations (default: CAREERPATH_TOP_N or 5)
        #[arg(long, value_parser = parse_top_n)]
        top: Option<usize>,

        /// Print recommendations as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List specializations and the careers observed for each
    Specializations,

    /// Recommend courses for a stream and interest
    Courses {
        /// Stream (Science, Commerce, Arts, Generic)
        #[arg(long)]
        stream: String,

        /// Area of interest within the stream
        #[arg(long, default_value = ALL_COURSES)]
        interest: String,
    },

    /// List course streams and their interest options
    Streams,

    /// Show dataset status (rows, careers, vocabulary)
    Status,

    /// Interactive guide for careers or courses
    Guide,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `recommend --json` output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("careerpath=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Recommend {
            skills,
            specialization,
            name,
            min_score,
            top,
            json: as_json,
        } => {
            // Flags override the environment, which is only read when a flag is missing
            let mut params = match (min_score, top) {
                (Some(_), Some(_)) => Default::default(),
                _ => config.recommend_params()?,
            };
            if let Some(min_score) = min_score {
                params.min_score = min_score;
            }
            if let Some(top) = top {
                params.top_n = top;
            }

            let engine = build_engine(&config)?;
            let skills = parse_skill_list(&skills);
            info!(
                skills = skills.len(),
                min_score = params.min_score,
                top_n = params.top_n,
                "Recommending careers"
            );

            let recommendations = engine.recommend(&skills, &params);

            if as_json {
                println!("{}", json::render_recommendations(&recommendations)?);
            } else {
                terminal::display_recommendations(
                    &name,
                    &recommendations,
                    engine.specialization_careers(&specialization),
                );
                if skills.is_empty() {
                    println!(
                        "{}",
                        "Tip: pass your skills with --skills \"Python, SQL\"".dimmed()
                    );
                }
            }
        }

        Commands::Specializations => {
            let engine = build_engine(&config)?;
            terminal::display_specializations(engine.index().specializations());
        }

        Commands::Courses { stream, interest } => {
            let catalog = load_catalog(&config)?;
            let stream = normalize_stream(&stream);
            let streams = catalog.streams();
            if !streams.contains(&stream) {
                anyhow::bail!(
                    "Unknown stream {stream:?}. Available streams: {}",
                    streams.join(", ")
                );
            }
            let interests = interests_for(&stream);
            if !interests.contains(&interest.as_str()) {
                anyhow::bail!(
                    "Unknown interest {interest:?} for {stream}. Options: {}",
                    interests.join(", ")
                );
            }
            let courses = catalog.recommend(&stream, &interest);
            terminal::display_courses(&courses);
        }

        Commands::Streams => {
            let catalog = load_catalog(&config)?;
            let streams: Vec<(String, Vec<&str>)> = catalog
                .streams()
                .into_iter()
                .map(|s| {
                    let interests = interests_for(&s);
                    (s, interests)
                })
                .collect();
            terminal::display_streams(&streams);
        }

        Commands::Status => {
            let engine = build_engine(&config)?;
            careerpath::status::show(&engine, &config.dataset_path);
        }

        Commands::Guide => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();

            println!("Welcome to the Career and Course Suggestion System!");
            println!("Choose an option:");
            println!("1. Career Suggestion");
            println!("2. Course Suggestion");

            let choice = guide::prompt(&mut input, &mut output, "Enter 1 or 2:")?;
            match choice.as_deref() {
                Some("1") => {
                    let params = config.recommend_params()?;
                    let engine = build_engine(&config)?;
                    guide::run_career_guide(
                        &engine,
                        &params,
                        &mut input,
                        &mut output,
                    )?;
                }
                Some("2") => {
                    let catalog = load_catalog(&config)?;
                    guide::run_course_guide(&catalog, &mut input, &mut output)?;
                }
                _ => {
                    println!(
                        "{}",
                        "Invalid choice. Please restart and choose 1 or 2.".yellow()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Load the career dataset and build the recommendation engine.
fn build_engine(config: &Config) -> Result<CareerEngine> {
    config.require_dataset()?;
    let rows = load_dataset(&config.dataset_path)?;
    Ok(CareerEngine::build(rows))
}

fn load_catalog(config: &Config) -> Result<CourseCatalog> {
    config.require_courses()?;
    CourseCatalog::load(&config.courses_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommend_flags(args: &[&str]) -> Result<(Option<f64>, Option<usize>), clap::Error> {
        let argv = ["careerpath", "recommend", "--skills", "Python"]
            .into_iter()
            .chain(args.iter().copied());
        match Cli::try_parse_from(argv)?.command {
            Commands::Recommend { min_score, top, .. } => Ok((min_score, top)),
            _ => unreachable!("parsed a recommend command"),
        }
    }

    #[test]
    fn test_numeric_flags_are_typed() {
        assert_eq!(recommend_flags(&[]).unwrap(), (None, None));
        assert_eq!(
            recommend_flags(&["--min-score", "0.25", "--top", "3"]).unwrap(),
            (Some(0.25), Some(3))
        );
    }

    #[test]
    fn test_numeric_flags_rejected_at_parse_time() {
        assert!(recommend_flags(&["--min-score", "2"]).is_err());
        assert!(recommend_flags(&["--min-score", "high"]).is_err());
        assert!(recommend_flags(&["--top", "0"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
