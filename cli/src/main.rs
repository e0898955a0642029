//! docstruct CLI - reconstruct document structure from a PDF

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docstruct::{output, parse_file_with_options, JsonFormat, ParseOptions};

#[derive(Parser)]
#[command(name = "docstruct")]
#[command(version)]
#[command(about = "Reconstruct section structure, tables, and charts from a PDF", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output JSON file
    #[arg(short, long, value_name = "FILE", default_value = "output.json")]
    output: PathBuf,

    /// Extract page images alongside the record
    #[arg(long)]
    images: bool,

    /// Directory for extracted images
    #[arg(long, value_name = "DIR", default_value = "extracted_images")]
    image_dir: PathBuf,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Suppress the summary output
    #[arg(short, long)]
    quiet: bool,

    /// Show page-by-page progress narration
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> docstruct::Result<()> {
    let options = ParseOptions::new()
        .with_images(cli.images)
        .with_image_dir(&cli.image_dir);

    if !cli.quiet {
        println!(
            "{} {}",
            "Processing".cyan().bold(),
            cli.input.display().to_string().bold()
        );
    }

    let spinner = progress_spinner(cli.quiet);
    spinner.set_message("reconstructing document structure");

    let doc = parse_file_with_options(&cli.input, options)?;

    spinner.set_message("writing output record");
    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    // No artifact is written unless the whole parse succeeded.
    output::write_json(&doc, &cli.output, format)?;

    spinner.finish_and_clear();

    if !cli.quiet {
        let saved_images: usize = doc
            .pages
            .iter()
            .filter_map(|p| p.images.as_ref().map(|i| i.len()))
            .sum();

        println!("{}", "Processing complete".green().bold());
        println!("  Pages processed:      {}", doc.page_count());
        println!("  Total content units:  {}", doc.total_units());
        if cli.images {
            println!("  Images saved:         {}", saved_images);
        }
        println!("  Results saved to:     {}", cli.output.display());
    }

    Ok(())
}

fn progress_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
