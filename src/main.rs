//! recomendar CLI: content-based movie recommendations from a CSV catalog.
//!
//! Point it at a CSV with `title` and `overview` columns (optionally
//! `genres` and `keywords`), then query once or start an interactive loop.

use clap::{Parser, Subcommand};
use recomendar::data::TextFrame;
use recomendar::recommend::ContentRecommender;
use recomendar::RecomendarError;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "recomendar")]
#[command(about = "Content-based movie recommendations from a CSV catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend titles similar to a single query title
    Query {
        /// The title to look up (case-insensitive)
        title: String,

        /// Path to the catalog CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Number of recommendations to print
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Vocabulary cap for the TF-IDF model
        #[arg(long, default_value = "5000")]
        max_features: usize,
    },

    /// Interactive loop: prompt for titles until 'q' / 'quit' / 'exit'
    Repl {
        /// Path to the catalog CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Number of recommendations per query
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Vocabulary cap for the TF-IDF model
        #[arg(long, default_value = "5000")]
        max_features: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            title,
            data,
            top,
            max_features,
        } => {
            let recommender = build_recommender(&data, max_features)?;
            let recs = recommender.recommend(&title, top)?;
            print_recommendations(&title, &recs);
        }
        Commands::Repl {
            data,
            top,
            max_features,
        } => {
            let recommender = build_recommender(&data, max_features)?;
            run_repl(&recommender, top)?;
        }
    }

    Ok(())
}

/// Load the catalog and fit the similarity model, narrating progress.
fn build_recommender(
    path: &Path,
    max_features: usize,
) -> Result<ContentRecommender, Box<dyn Error>> {
    eprintln!("Loading catalog from {}...", path.display());
    let catalog = TextFrame::from_csv_path(path)?;

    eprintln!("Fitting TF-IDF similarity model over {} items...", catalog.n_rows());
    let mut recommender = ContentRecommender::new().with_max_features(max_features);
    recommender.fit(&catalog)?;

    eprintln!("Ready.");
    Ok(recommender)
}

fn print_recommendations(query: &str, recs: &[(String, f64)]) {
    if recs.is_empty() {
        println!("No candidates for '{query}'.");
        return;
    }

    println!("Top recommendations similar to '{query}':");
    for (rank, (title, score)) in recs.iter().enumerate() {
        println!("{:2}. {title}  (similarity: {score:.3})", rank + 1);
    }
}

/// Prompt loop: unknown titles are reported and re-prompted, everything
/// else aborts the loop.
fn run_repl(recommender: &ContentRecommender, top: usize) -> Result<(), Box<dyn Error>> {
    println!("Enter a title to get recommendations (or 'q' to quit):");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "q" | "quit" | "exit") {
            break;
        }

        match recommender.recommend(input, top) {
            Ok(recs) => print_recommendations(input, &recs),
            Err(err @ RecomendarError::TitleNotFound { .. }) => {
                eprintln!("{err}");
                eprintln!("Try another title that exists in the catalog.");
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("Goodbye!");
    Ok(())
}
