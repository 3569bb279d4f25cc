pub mod report;
pub mod stats;
pub mod streaks;
