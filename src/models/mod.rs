use serde::{Deserialize, Serialize};

/// Score margin a game has to exceed to count as a handicap game
pub const HANDICAP_MARGIN: u32 = 1;

/// Result of a single played game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Parse a schedule result code such as "W", "L" or "W-wo" (walk-off)
    pub fn from_result_code(code: &str) -> Option<Self> {
        match code.trim().chars().next()? {
            'W' => Some(Outcome::Win),
            'L' => Some(Outcome::Loss),
            _ => None,
        }
    }
}

/// One played game as read from a schedule page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub runs_scored: u32,
    pub runs_allowed: u32,
}

impl GameRecord {
    pub fn margin(&self) -> u32 {
        self.runs_scored.abs_diff(self.runs_allowed)
    }

    pub fn is_handicap(&self) -> bool {
        self.margin() > HANDICAP_MARGIN
    }
}

/// Games decided by more than one run, split by outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandicapCounts {
    pub wins: u32,
    pub losses: u32,
}

/// Everything the extractor produces for one team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResults {
    pub team: String,
    pub outcomes: Vec<Outcome>,  // Chronological, played games only
    pub handicaps: HandicapCounts,
}

impl TeamResults {
    /// Record used when a team's page could not be fetched or read
    pub fn empty(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Default::default()
        }
    }

    pub fn from_games(team: impl Into<String>, games: &[GameRecord]) -> Self {
        let mut handicaps = HandicapCounts::default();
        for game in games.iter().filter(|g| g.is_handicap()) {
            match game.outcome {
                Outcome::Win => handicaps.wins += 1,
                Outcome::Loss => handicaps.losses += 1,
            }
        }

        Self {
            team: team.into(),
            outcomes: games.iter().map(|g| g.outcome).collect(),
            handicaps,
        }
    }
}

/// A maximal block of consecutive identical outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub outcome: Outcome,
    pub length: usize,
}

/// Longest streak of one outcome and how many separate streaks reach it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub max_length: usize,
    pub occurrences: usize,
}

/// Per-team statistics shown in the reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team: String,
    pub win_streak: StreakResult,
    pub loss_streak: StreakResult,
    pub handicaps: HandicapCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(outcome: Outcome, runs_scored: u32, runs_allowed: u32) -> GameRecord {
        GameRecord {
            outcome,
            runs_scored,
            runs_allowed,
        }
    }

    #[test]
    fn test_outcome_from_result_code() {
        assert_eq!(Outcome::from_result_code("W"), Some(Outcome::Win));
        assert_eq!(Outcome::from_result_code("L"), Some(Outcome::Loss));
        assert_eq!(Outcome::from_result_code("W-wo"), Some(Outcome::Win));
        assert_eq!(Outcome::from_result_code(" L-wo "), Some(Outcome::Loss));
        assert_eq!(Outcome::from_result_code(""), None);
        assert_eq!(Outcome::from_result_code("T"), None);
    }

    #[test]
    fn test_handicap_needs_margin_over_one_run() {
        assert!(!game(Outcome::Win, 3, 2).is_handicap());
        assert!(!game(Outcome::Loss, 4, 4).is_handicap());
        assert!(game(Outcome::Win, 5, 3).is_handicap());
        assert!(game(Outcome::Loss, 1, 9).is_handicap());
        assert_eq!(game(Outcome::Loss, 1, 9).margin(), 8);
    }

    #[test]
    fn test_team_results_from_games() {
        let games = [
            game(Outcome::Win, 7, 1),
            game(Outcome::Win, 2, 1),
            game(Outcome::Loss, 0, 4),
            game(Outcome::Loss, 5, 6),
            game(Outcome::Win, 10, 2),
        ];
        let results = TeamResults::from_games("Texas Rangers", &games);

        assert_eq!(results.team, "Texas Rangers");
        assert_eq!(
            results.outcomes,
            vec![
                Outcome::Win,
                Outcome::Win,
                Outcome::Loss,
                Outcome::Loss,
                Outcome::Win
            ]
        );
        assert_eq!(results.handicaps, HandicapCounts { wins: 2, losses: 1 });
    }

    #[test]
    fn test_empty_team_results() {
        let results = TeamResults::empty("Miami Marlins");
        assert!(results.outcomes.is_empty());
        assert_eq!(results.handicaps, HandicapCounts::default());
    }
}
