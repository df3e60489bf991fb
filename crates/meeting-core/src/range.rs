//! Half-open spans of minutes within a single day.
//!
//! A [`TimeRange`] covers `[start, end)` where both bounds are minutes from
//! midnight. Ranges are immutable; narrowing a range always produces a new one.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Number of minutes in a day; the exclusive upper bound for any range end.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A half-open interval `[start, end)` of minutes within one day.
///
/// Invariant: `start < end <= 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Unvalidated wire form, checked on the way in.
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = ScheduleError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        Self::from_start_end(raw.start, raw.end, false)
    }
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: u32 = 0;

    /// Last minute of the day (inclusive).
    pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;

    /// The entire day, `[00:00, 24:00)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: Self::END_OF_DAY + 1,
    };

    /// Build a range from a start minute and a length in minutes.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidRange` if `duration` is zero or the range
    /// would end after midnight.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::from_start_end(start, start.saturating_add(duration), false)
    }

    /// Build a range from start and end minutes.
    ///
    /// When `inclusive_end` is true, `end` names the last minute covered by the
    /// range, so `from_start_end(0, END_OF_DAY, true)` is the whole day.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidRange` if the range is empty, reversed, or
    /// ends after midnight.
    pub fn from_start_end(start: u32, end: u32, inclusive_end: bool) -> Result<Self> {
        let end = if inclusive_end {
            end.saturating_add(1)
        } else {
            end
        };
        if start >= end || end > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `start < end <= MINUTES_PER_DAY`.
    pub(crate) const fn new_unchecked(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Inclusive start minute.
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end minute.
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// True if `other` lies entirely within this range. Equal ranges contain
    /// each other.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// True if `point` falls in `[start, end)`.
    pub const fn contains_minute(&self, point: u32) -> bool {
        point >= self.start && point < self.end
    }

    /// True if the two ranges share at least one minute.
    ///
    /// Adjacent ranges (one ends where the other starts) do not overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Compare by start minute only.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Compare by end minute only.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end)
    }
}

/// Convert a wall-clock time to minutes from midnight.
pub const fn minutes_of_day(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:02}:{:02}, {:02}:{:02})",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
