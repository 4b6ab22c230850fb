use clap::Parser;
use link_scraper::LinkScraper;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Override the output path with an environment variable if provided
    if let Ok(output) = std::env::var("LINK_SCRAPER_OUTPUT") {
        if !output.is_empty() {
            config.output_path = output.into();
        }
    }

    if config.seed_urls.is_empty() {
        ::log::warn!("No seed URLs given, an empty link list will be written");
    }

    let start_time = std::time::Instant::now();
    let scraper = LinkScraper::with_config(config);
    let summary = scraper.run().await;

    ::log::info!(
        "Processed {} of {} seeds ({} failed), {} unique links in {:.2} seconds",
        summary.pages_fetched,
        summary.seeds,
        summary.pages_failed,
        summary.links,
        start_time.elapsed().as_secs_f64()
    );
}
