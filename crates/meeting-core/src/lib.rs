//! # meeting-core
//!
//! Finds the time slots in a single day where a proposed meeting fits.
//!
//! Given the day's calendar events (each with a time range and the people
//! attending it) and a [`MeetingRequest`], the engine carves busy time out of
//! the whole day and returns every remaining gap that is long enough. Optional
//! attendees are honored when they can be, and dropped when including them
//! would leave no slot at all.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_core::{find_meeting_slots, Event, MeetingRequest, TimeRange};
//!
//! let standup = Event::new(
//!     "Standup",
//!     TimeRange::from_start_duration(600, 100).unwrap(),
//!     ["alice"],
//! );
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = find_meeting_slots(&[standup], &request);
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots[0], TimeRange::from_start_end(0, 600, false).unwrap());
//! assert_eq!(slots[1], TimeRange::from_start_end(700, 1440, false).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange`, a half-open span of minutes within one day
//! - [`event`] — `Event`, a titled time range with its attendees
//! - [`request`] — `MeetingRequest`, required/optional attendees and duration
//! - [`query`] — the slot-carving engine (`find_meeting_slots`, `narrow`)
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod query;
pub mod range;
pub mod request;

pub use error::ScheduleError;
pub use event::Event;
pub use query::{drop_short_slots, find_meeting_slots, narrow};
pub use range::TimeRange;
pub use request::MeetingRequest;
