use crate::models::{Outcome, TeamResults, TeamStats};
use crate::utils::streaks::longest_run;

/// Streaks and handicaps for one team
pub fn team_stats(results: &TeamResults) -> TeamStats {
    TeamStats {
        team: results.team.clone(),
        win_streak: longest_run(&results.outcomes, Outcome::Win),
        loss_streak: longest_run(&results.outcomes, Outcome::Loss),
        handicaps: results.handicaps,
    }
}

/// Compute stats for every team, keeping the input (registry) order
pub fn aggregate(results: &[TeamResults]) -> Vec<TeamStats> {
    results.iter().map(team_stats).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome::{Loss as L, Win as W};
    use crate::models::{HandicapCounts, StreakResult};

    fn results(team: &str, outcomes: &[Outcome], wins: u32, losses: u32) -> TeamResults {
        TeamResults {
            team: team.to_string(),
            outcomes: outcomes.to_vec(),
            handicaps: HandicapCounts { wins, losses },
        }
    }

    #[test]
    fn test_two_team_scenario() {
        let input = vec![
            results("Team A", &[W, W, L, W, W, W], 1, 0),
            results("Team B", &[], 0, 0),
        ];
        let stats = aggregate(&input);

        assert_eq!(stats.len(), 2);
        assert_eq!(
            stats[0],
            TeamStats {
                team: "Team A".to_string(),
                win_streak: StreakResult {
                    max_length: 3,
                    occurrences: 1
                },
                loss_streak: StreakResult {
                    max_length: 1,
                    occurrences: 1
                },
                handicaps: HandicapCounts { wins: 1, losses: 0 },
            }
        );
        assert_eq!(
            stats[1],
            TeamStats {
                team: "Team B".to_string(),
                win_streak: StreakResult::default(),
                loss_streak: StreakResult::default(),
                handicaps: HandicapCounts::default(),
            }
        );
    }

    #[test]
    fn test_preserves_registry_order() {
        let names = ["Zeta", "Alpha", "Mu", "Beta"];
        let input: Vec<_> = names.iter().map(|n| results(n, &[W, L], 0, 0)).collect();
        let stats = aggregate(&input);

        let output: Vec<&str> = stats.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(output, names);
    }

    #[test]
    fn test_deterministic() {
        let input = vec![
            results("Team A", &[L, L, W, L, L], 0, 3),
            results("Team B", &[W, W, W], 2, 0),
        ];
        assert_eq!(aggregate(&input), aggregate(&input));
    }

    #[test]
    fn test_no_teams() {
        assert!(aggregate(&[]).is_empty());
    }
}
