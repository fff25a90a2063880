use clap::Parser;
use std::error::Error;
use yield_jobs::Jobs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search keywords
    #[arg(short, long)]
    keywords: String,

    /// Path to JSON configuration file
    #[arg(short, long)]
    config_file: Option<String>,

    /// Maximum number of pages
    #[arg(short, long)]
    max_pages: Option<usize>,

    /// Seconds between page requests
    #[arg(short, long)]
    delay: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let args = Args::parse();

    // Start from a config file if given, otherwise from the keywords alone
    let mut jobs = match &args.config_file {
        Some(path) => {
            println!("Loading configuration from file: {}", path);
            Jobs::with_config_file(path)?
        }
        None => Jobs::new(&args.keywords),
    };

    // Apply command-line overrides
    if let Some(max_pages) = args.max_pages {
        jobs = jobs.with_max_pages(max_pages);
    }
    if let Some(delay) = args.delay {
        jobs = jobs.with_request_delay(delay);
    }

    let config = jobs.config();
    println!("Search configuration:");
    println!("  Keywords: {}", config.keywords);
    println!("  Region: {}", config.region);
    println!("  Max pages: {}", config.max_pages);
    println!("  Delay: {}s", config.request_delay_secs);

    // Collect without writing a file and print what came back
    let records = jobs.collect().await?;
    for (i, job) in records.iter().enumerate() {
        println!("{:>4}. {} @ {} ({})", i + 1, job.title, job.company, job.location);
        println!("      {}", job.url);
    }
    println!("Found {} jobs", records.len());

    Ok(())
}
