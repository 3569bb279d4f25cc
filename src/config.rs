use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const BASEBALL_REFERENCE_URL: &str = "https://www.baseball-reference.com";

pub const DEFAULT_SEASON: u16 = 2020;
pub const DEFAULT_REPORT_PATH: &str = "public/index.html";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Display name and baseball-reference franchise code for every club
const MLB_TEAMS: [(&str, &str); 30] = [
    ("Los Angeles Dodgers", "LAD"),
    ("New York Yankees", "NYY"),
    ("Minnesota Twins", "MIN"),
    ("Atlanta Braves", "ATL"),
    ("Milwaukee Brewers", "MIL"),
    ("Miami Marlins", "MIA"),
    ("Tampa Bay Rays", "TBR"),
    ("Detroit Tigers", "DET"),
    ("Philadelphia Phillies", "PHI"),
    ("Cincinnati Reds", "CIN"),
    ("San Diego Padres", "SDP"),
    ("San Francisco Giants", "SFG"),
    ("Arizona Diamondbacks", "ARI"),
    ("Pittsburgh Pirates", "PIT"),
    ("Colorado Rockies", "COL"),
    ("Boston Red Sox", "BOS"),
    ("Cleveland Indians", "CLE"),
    ("Chicago White Sox", "CHW"),
    ("Kansas City Royals", "KCR"),
    ("Oakland Athletics", "OAK"),
    ("Seattle Mariners", "SEA"),
    ("Baltimore Orioles", "BAL"),
    ("Los Angeles Angels", "LAA"),
    ("Texas Rangers", "TEX"),
    ("Houston Astros", "HOU"),
    ("Toronto Blue Jays", "TOR"),
    ("Chicago Cubs", "CHC"),
    ("Washington Nationals", "WSN"),
    ("New York Mets", "NYM"),
    ("St. Louis Cardinals", "STL"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub code: String,
}

impl Team {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Schedule & results page for the given season
    pub fn schedule_url(&self, season: u16) -> String {
        format!(
            "{}/teams/{}/{}-schedule-scores.shtml",
            BASEBALL_REFERENCE_URL, self.code, season
        )
    }
}

/// Fixed, ordered set of teams to report on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// All thirty MLB clubs
    pub fn mlb() -> Self {
        Self::new(
            MLB_TEAMS
                .iter()
                .map(|(name, code)| Team::new(*name, *code))
                .collect(),
        )
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Settings for a single run, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub season: u16,
    pub registry: TeamRegistry,
    pub report_path: PathBuf,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
            registry: TeamRegistry::mlb(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schedule_url() {
        let team = Team::new("New York Yankees", "NYY");
        assert_eq!(
            team.schedule_url(2020),
            "https://www.baseball-reference.com/teams/NYY/2020-schedule-scores.shtml"
        );
        assert_eq!(
            team.schedule_url(2023),
            "https://www.baseball-reference.com/teams/NYY/2023-schedule-scores.shtml"
        );
    }

    #[test]
    fn test_mlb_registry() {
        let registry = TeamRegistry::mlb();
        assert_eq!(registry.len(), 30);

        // Insertion order is report order
        assert_eq!(registry.teams()[0].name, "Los Angeles Dodgers");
        assert_eq!(registry.teams()[29].name, "St. Louis Cardinals");

        let codes: HashSet<&str> = registry.teams().iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes.len(), 30);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.season, DEFAULT_SEASON);
        assert_eq!(config.report_path, PathBuf::from("public/index.html"));
        assert_eq!(config.registry, TeamRegistry::mlb());
    }
}
