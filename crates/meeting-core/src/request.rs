//! The meeting being scheduled.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::range::MINUTES_PER_DAY;

/// Who must attend, who would ideally attend, and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Required attendees. Every returned slot is free for all of them.
    #[serde(default)]
    pub attendees: BTreeSet<String>,
    /// Attendees dropped from consideration if including them leaves no slot.
    #[serde(default)]
    pub optional_attendees: BTreeSet<String>,
    /// Meeting length in minutes.
    pub duration: u32,
}

impl MeetingRequest {
    /// A request with the given required attendees and no optional ones.
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    /// Builder: set the optional attendees.
    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }

    /// Check that the duration can fit within one day.
    ///
    /// The query engine does not call this; a request that fails validation
    /// simply yields no slots.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDuration` for zero or over-long durations.
    pub fn validate(&self) -> Result<()> {
        if self.duration == 0 || self.duration > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidDuration(self.duration));
        }
        Ok(())
    }
}
