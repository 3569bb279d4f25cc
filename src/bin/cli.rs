use anyhow::{Context, Result};
use clap::Parser;
use mlb_stats::baseball_reference::BaseballReferenceScraper;
use mlb_stats::report::{render_text, write_html_report};
use mlb_stats::{fetch_all_team_stats, Config};
use tracing::info;

/// Win/loss streaks and handicap counts for every MLB team
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Render the HTML report into public/index.html instead of printing to the console
    #[arg(long)]
    template: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for the console report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::default();
    let scraper =
        BaseballReferenceScraper::new(&config).context("Failed to build HTTP client")?;

    info!(
        season = config.season,
        teams = config.registry.len(),
        "fetching schedules"
    );
    let stats = fetch_all_team_stats(&scraper, &config).await;

    if args.template {
        write_html_report(&stats, config.season, &config.report_path)?;
        info!(path = %config.report_path.display(), "report written");
    } else {
        print!("{}", render_text(&stats));
    }

    Ok(())
}
