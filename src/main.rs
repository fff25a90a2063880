use clap::Parser;
use std::error::Error;
use yield_jobs::{Jobs, SearchConfig};

mod args;
mod prompt;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };
    args.apply(&mut config);

    if args.interactive {
        prompt::ask(&mut config)?;
    }
    if args.name_from_keywords {
        config.output = yield_jobs::utils::output_file_name(&config.keywords).into();
    }

    ::log::info!(
        "Searching {:?} in {} (up to {} pages)",
        config.keywords,
        config.region,
        config.max_pages
    );

    let start_time = std::time::Instant::now();
    let output = config.output.clone();
    let count = Jobs::with_config(config).run().await?;

    println!("Scraped {} jobs total.", count);
    println!("Saved to {}", output.display());
    ::log::info!(
        "Finished in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
