pub mod baseball_reference;

use crate::config::Team;
use crate::error::ScrapeError;
use crate::models::TeamResults;
use async_trait::async_trait;

/// Anything that can produce a team's played games for a season
#[async_trait]
pub trait ResultSource: Send + Sync {
    async fn fetch_results(&self, team: &Team, season: u16) -> Result<TeamResults, ScrapeError>;
}
