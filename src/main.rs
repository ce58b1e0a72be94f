// Thu Jan 22 2026 - Alex

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ip_region_sampler::{config::Config, pipeline::Pipeline, ui::Banner, utils::logging};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "IP geolocation summary generator", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "data/ip.txt")]
    input: PathBuf,

    #[arg(long, default_value = "data/ip_country_1.txt")]
    raw_output: PathBuf,

    #[arg(long, default_value = "data/ip_country_2.txt")]
    coarse_output: PathBuf,

    #[arg(long, default_value = "data/ip_country_3.json")]
    json_output: PathBuf,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    logging::init_logger(args.verbose);

    if !args.no_banner {
        Banner::print_default();
    }

    let config = Config::new()
        .with_input_file(args.input)
        .with_raw_output(args.raw_output)
        .with_coarse_output(args.coarse_output)
        .with_json_output(args.json_output);

    if let Err(e) = config.validate() {
        eprintln!("{} Invalid configuration: {}", "[!]".red(), e);
        std::process::exit(1);
    }

    let start_time = Instant::now();
    let pipeline = Pipeline::new(config);

    println!(
        "{} Reading input: {}",
        "[*]".blue(),
        pipeline.config().input_file.display()
    );

    let progress = if !args.no_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Ingesting records...");
        Some(pb)
    } else {
        None
    };

    let (raw, report) = match pipeline.ingest_file() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} Ingestion failed: {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    if let Some(ref pb) = progress {
        pb.set_message("Coarsening tables...");
    }

    let coarse = pipeline.coarsen(&raw);

    if let Some(ref pb) = progress {
        pb.set_message("Writing outputs...");
    }

    if let Err(e) = pipeline.write_outputs(&raw, &coarse) {
        eprintln!("{} Failed to write outputs: {:#}", "[!]".red(), e);
        std::process::exit(1);
    }

    if let Some(ref pb) = progress {
        pb.finish_and_clear();
    }

    println!(
        "{} Raw table saved to: {}",
        "[+]".green(),
        pipeline.config().raw_output.display()
    );
    println!(
        "{} Coarse table saved to: {}",
        "[+]".green(),
        pipeline.config().coarse_output.display()
    );
    println!(
        "{} JSON records saved to: {}",
        "[+]".green(),
        pipeline.config().json_output.display()
    );

    let elapsed = start_time.elapsed();

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!(
        "{} Lines read: {} ({} valid, {} malformed)",
        "[+]".green(),
        report.total_lines,
        report.valid_records,
        report.malformed_lines
    );
    if report.malformed_lines > 0 {
        println!(
            "{} {} malformed lines were skipped",
            "[!]".yellow(),
            report.malformed_lines
        );
    }
    println!("{} Raw leaves: {}", "[+]".green(), raw.leaf_count());
    println!("{} Coarse leaves: {}", "[+]".green(), coarse.leaf_count());
    println!(
        "{} Completed in {:.2}s",
        "[+]".green(),
        elapsed.as_secs_f64()
    );
}
