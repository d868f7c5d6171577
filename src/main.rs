use clap::Parser;
use std::process::ExitCode;

mod args;
use args::{Args, resolve_config};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging; RUST_LOG still wins over the verbose flag
    let level = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    println!("Note: course crawling requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL or --webdriver-url if not using the default http://localhost:4444"
    );

    ::log::info!("Starting course crawl from {}", config.seed_url);
    let start_time = std::time::Instant::now();

    match course_crawl::crawl(config).await {
        Ok(summary) => {
            ::log::info!(
                "Crawling complete - {} subjects ({} empty, {} failed), {} courses saved, {} skipped in {:.2} seconds",
                summary.subjects,
                summary.empty_subjects,
                summary.failed_subjects,
                summary.courses_saved,
                summary.courses_skipped,
                start_time.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Crawl aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
