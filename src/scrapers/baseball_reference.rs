use crate::config::{Config, Team};
use crate::error::ScrapeError;
use crate::models::{GameRecord, Outcome, TeamResults};
use crate::scrapers::ResultSource;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const SCHEDULE_TABLE: &str = "table#team_schedule";
const GAME_ROWS: &str = "tbody > tr:not(.thead)";
const GAME_NUMBER_CELL: &str = r#"th[data-stat="team_game"]"#;
const RESULT_CELL: &str = r#"td[data-stat="win_loss_result"]"#;
const RUNS_CELL: &str = r#"td[data-stat="R"]"#;
const RUNS_ALLOWED_CELL: &str = r#"td[data-stat="RA"]"#;

struct ScheduleSelectors {
    table: Selector,
    rows: Selector,
    game_number: Selector,
    result: Selector,
    runs: Selector,
    runs_allowed: Selector,
}

impl ScheduleSelectors {
    fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            table: parse_selector(SCHEDULE_TABLE)?,
            rows: parse_selector(GAME_ROWS)?,
            game_number: parse_selector(GAME_NUMBER_CELL)?,
            result: parse_selector(RESULT_CELL)?,
            runs: parse_selector(RUNS_CELL)?,
            runs_allowed: parse_selector(RUNS_ALLOWED_CELL)?,
        })
    }
}

fn parse_selector(selector: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|_| ScrapeError::InvalidSelector(selector))
}

/// Reads season results from baseball-reference.com schedule pages
pub struct BaseballReferenceScraper {
    client: reqwest::Client,
}

impl BaseballReferenceScraper {
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(html)
    }

    /// Parse the played games out of a schedule page.
    ///
    /// Rows are read in order until the first one that is not a finished
    /// game (the rest of the season has not been played yet).
    fn parse_schedule(&self, team: &str, url: &str, html: &str) -> Result<TeamResults, ScrapeError> {
        let selectors = ScheduleSelectors::new()?;
        let document = Html::parse_document(html);

        let table = document
            .select(&selectors.table)
            .next()
            .ok_or_else(|| ScrapeError::ScheduleTableMissing {
                url: url.to_string(),
            })?;

        let mut games = Vec::new();
        let rows = table
            .select(&selectors.rows)
            .filter(|row| row.select(&selectors.game_number).next().is_some());

        for row in rows {
            match self.parse_game_row(row, &selectors) {
                Some(game) => games.push(game),
                None => break,
            }
        }

        debug!(team, games = games.len(), "parsed schedule");
        Ok(TeamResults::from_games(team, &games))
    }

    fn parse_game_row(&self, row: ElementRef, selectors: &ScheduleSelectors) -> Option<GameRecord> {
        let outcome = Outcome::from_result_code(&cell_text(row, &selectors.result)?)?;
        let runs_scored = first_number(&cell_text(row, &selectors.runs)?)?;
        let runs_allowed = first_number(&cell_text(row, &selectors.runs_allowed)?)?;

        Some(GameRecord {
            outcome,
            runs_scored,
            runs_allowed,
        })
    }
}

#[async_trait]
impl ResultSource for BaseballReferenceScraper {
    async fn fetch_results(&self, team: &Team, season: u16) -> Result<TeamResults, ScrapeError> {
        let url = team.schedule_url(season);
        debug!(team = %team.name, %url, "fetching schedule");

        let html = self.fetch_page(&url).await?;
        self.parse_schedule(&team.name, &url, &html)
    }
}

fn cell_text(row: ElementRef, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|cell| cell.text().collect::<String>())
}

/// First run of ASCII digits in the text, e.g. "5" out of " 5 (10)"
fn first_number(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}
