mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "takeoff",
    version,
    about = "Bill-of-quantities estimation from floor-plan documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract room areas from a floor plan (without estimating)
    Extract {
        /// Path to a PDF, image, or plain-text OCR dump
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted rooms to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Estimate a BOQ from a document, text dump, or extracted-rooms JSON
    Estimate {
        /// Path to a PDF, image, .txt OCR dump, or rooms JSON from `extract -O`
        input_file: PathBuf,

        /// Wall height in meters used by the paint rule (default: 3.0)
        #[arg(long, value_name = "METERS")]
        wall_height: Option<f64>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Directory to write boq.csv and boq.xlsx into
        #[arg(short = 'd', long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Inspect the quantity rule table
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List the rules in evaluation order
    List,
    /// Explain the rules and their assumptions in plain language
    Explain,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(input_file, &output, out),
        Commands::Estimate {
            input_file,
            wall_height,
            output,
            out_dir,
        } => commands::estimate::run(input_file, wall_height, &output, out_dir),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain => commands::rules::explain(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
