pub mod config;
pub mod error;
pub mod models;
pub mod scrapers;
pub mod utils;

pub use config::*;
pub use error::ScrapeError;
pub use models::*;
pub use scrapers::*;
pub use utils::*;

use tracing::{info, warn};
use utils::stats::aggregate;

/// Fetch every registry team's results in order.
///
/// A team whose page cannot be fetched or read is logged and reported with
/// zero stats; the remaining teams are still processed.
pub async fn collect_team_results<S>(source: &S, config: &Config) -> Vec<TeamResults>
where
    S: ResultSource + ?Sized,
{
    let mut all_results = Vec::with_capacity(config.registry.len());
    let mut failed = 0usize;

    for team in config.registry.teams() {
        let results = match source.fetch_results(team, config.season).await {
            Ok(results) => {
                info!(team = %team.name, games = results.outcomes.len(), "fetched results");
                results
            }
            Err(e) => {
                warn!(team = %team.name, error = %e, "failed to fetch results, reporting zero stats");
                failed += 1;
                TeamResults::empty(team.name.clone())
            }
        };
        all_results.push(results);
    }

    if failed > 0 {
        warn!(failed, total = config.registry.len(), "some teams have no data");
    }

    all_results
}

/// Fetch results for every team and compute their stats, in registry order
pub async fn fetch_all_team_stats<S>(source: &S, config: &Config) -> Vec<TeamStats>
where
    S: ResultSource + ?Sized,
{
    let results = collect_team_results(source, config).await;
    aggregate(&results)
}
