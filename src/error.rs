use thiserror::Error;

/// Failures while fetching or reading a team's schedule page
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No schedule table found at {url}")]
    ScheduleTableMissing { url: String },

    #[error("Invalid selector: {0}")]
    InvalidSelector(&'static str),
}
