use crate::models::{Outcome, Run, StreakResult};

/// Split a chronological sequence into maximal runs of identical outcomes
pub fn runs(sequence: &[Outcome]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for &outcome in sequence {
        match runs.last_mut() {
            Some(run) if run.outcome == outcome => run.length += 1,
            _ => runs.push(Run { outcome, length: 1 }),
        }
    }

    runs
}

/// Longest streak of `target` and how many separate streaks reach that length.
///
/// Ties are counted rather than broken. A sequence without `target` (including
/// an empty one) yields `(0, 0)`.
pub fn longest_run(sequence: &[Outcome], target: Outcome) -> StreakResult {
    runs(sequence)
        .into_iter()
        .filter(|run| run.outcome == target)
        .fold(StreakResult::default(), |best, run| {
            if run.length > best.max_length {
                StreakResult {
                    max_length: run.length,
                    occurrences: 1,
                }
            } else if run.length == best.max_length {
                StreakResult {
                    occurrences: best.occurrences + 1,
                    ..best
                }
            } else {
                best
            }
        })
}
