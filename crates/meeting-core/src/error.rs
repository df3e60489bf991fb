//! Error types for meeting-core operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A time range that is empty, reversed, or runs past the end of the day.
    #[error("Invalid time range [{start}, {end}): start must be before end and end at most 1440")]
    InvalidRange { start: u32, end: u32 },

    /// A requested meeting length that cannot fit in a day.
    #[error("Invalid meeting duration: {0} minutes (expected 1..=1440)")]
    InvalidDuration(u32),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
