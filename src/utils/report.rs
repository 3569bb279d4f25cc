use crate::models::TeamStats;
use anyhow::{Context, Result};
use askama::Template;
use chrono::Local;
use std::fmt::Write;
use std::path::Path;

const TEAM_COLUMN_WIDTH: usize = 25;

// Custom filters for formatting
mod filters {
    pub fn times<T: std::fmt::Display>(count: T) -> ::askama::Result<String> {
        Ok(format!("{}x", count))
    }
}

#[derive(Template)]
#[template(path = "mlb_stats.html")]
pub struct StatsReportTemplate {
    pub season: u16,
    pub generated_at: String,
    pub teams: Vec<TeamStats>,
}

impl StatsReportTemplate {
    pub fn new(stats: &[TeamStats], season: u16) -> Self {
        Self {
            season,
            generated_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            teams: stats.to_vec(),
        }
    }
}

/// One console line for a team
pub fn format_stats_line(stats: &TeamStats) -> String {
    format!(
        "|{:^width$}|: maximálna séria výhier:{:>2}; nastala:{:>2}x; handicaps: {:>2} <====> maximálna séria prehier:{:>2}; nastala:{:>2}x; handicaps: {:>2} |",
        stats.team,
        stats.win_streak.max_length,
        stats.win_streak.occurrences,
        stats.handicaps.wins,
        stats.loss_streak.max_length,
        stats.loss_streak.occurrences,
        stats.handicaps.losses,
        width = TEAM_COLUMN_WIDTH,
    )
}

/// `|---...---|` spanning `width` characters
pub fn separator_line(width: usize) -> String {
    format!("|{}|", "-".repeat(width.saturating_sub(2)))
}

/// Console report: a separator and a stats line per team, each followed by a blank line
pub fn render_text(stats: &[TeamStats]) -> String {
    let mut out = String::new();

    for team in stats {
        let line = format_stats_line(team);
        // Width in characters; the labels contain non-ASCII letters
        let separator = separator_line(line.chars().count());
        let _ = write!(out, "{}\n\n{}\n\n", separator, line);
    }

    out
}

pub fn render_html(stats: &[TeamStats], season: u16) -> Result<String> {
    StatsReportTemplate::new(stats, season)
        .render()
        .context("Failed to render stats template")
}

/// Render the HTML report and write it to `path`, creating parent directories
pub fn write_html_report(stats: &[TeamStats], season: u16, path: &Path) -> Result<()> {
    let html = render_html(stats, season)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory {}", dir.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(())
}
