use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use sheet_cleaner::{clean_file, logging, summarize, CleanOptions};
use std::path::PathBuf;

/// Clean an Excel, CSV, or delimited text file by removing bad characters,
/// then re-export it next to a report of what was removed.
#[derive(Debug, Parser)]
#[command(name = "sheet-cleaner", version)]
struct Args {
    /// Input file to clean (.xlsx, .xls, .csv, or .txt)
    input_file: PathBuf,

    /// Existing folder the cleaned file is written into
    output_folder: PathBuf,

    /// New filename for the cleaned file; the extension is added automatically
    filename: String,

    /// Emit the removal report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init_logging()?;
    let args = Args::parse();

    if !args.input_file.exists() || !args.output_folder.is_dir() {
        eprintln!("{}", "Filepath not correct".red());
        std::process::exit(1);
    }

    let options = CleanOptions::default();
    match clean_file(
        &args.input_file,
        &args.output_folder,
        &args.filename,
        &options,
    ) {
        Ok(outcome) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", summarize(&outcome.removed));
                println!(
                    "{} {}",
                    "Cleaned file written to:".green(),
                    outcome.output_path.display()
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}
