//! Event types -- the single-occurrence event and the polymorphic event wrapper.
//!
//! `SingleEvent` is the base shape shared by every event kind: a title, a start
//! datetime, and a duration. Recurring kinds in [`crate::recurrence`] embed it
//! and layer a recurrence rule on top. `Event` is the closed dispatch point the
//! agenda stores: day-occurrence queries go through [`Event::occurs_on`], which
//! forwards to the most specific predicate for each kind.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::recurrence::{FixedTerminationEvent, RepetitiveEvent};

/// A titled event with a start datetime and a duration, occurring exactly once.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleEvent {
    title: String,
    start: NaiveDateTime,
    duration_minutes: u32,
}

impl SingleEvent {
    /// Create a single-occurrence event.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, duration_minutes: u32) -> Self {
        Self {
            title: title.into(),
            start,
            duration_minutes,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The calendar date of the start datetime.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// End of the occurrence: start plus duration.
    pub fn end(&self) -> NaiveDateTime {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// True iff this event's single occurrence falls on `day`.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        day == self.date()
    }
}

/// The closed set of event kinds an agenda can hold.
///
/// Queries dispatch per kind: a `Single` event occurs on exactly one date, a
/// `Repetitive` event recurs forever, and a `FixedTermination` event recurs up
/// to an inclusive end date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Single(SingleEvent),
    Repetitive(RepetitiveEvent),
    FixedTermination(FixedTerminationEvent),
}

impl Event {
    pub fn title(&self) -> &str {
        match self {
            Event::Single(e) => e.title(),
            Event::Repetitive(e) => e.title(),
            Event::FixedTermination(e) => e.title(),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        match self {
            Event::Single(e) => e.start(),
            Event::Repetitive(e) => e.start(),
            Event::FixedTermination(e) => e.start(),
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            Event::Single(e) => e.duration_minutes(),
            Event::Repetitive(e) => e.duration_minutes(),
            Event::FixedTermination(e) => e.duration_minutes(),
        }
    }

    /// True iff this event (under its own recurrence rule, if any) occurs on `day`.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        match self {
            Event::Single(e) => e.occurs_on(day),
            Event::Repetitive(e) => e.occurs_on(day),
            Event::FixedTermination(e) => e.occurs_on(day),
        }
    }

    /// True iff this is a single-occurrence event (no recurrence rule).
    pub fn is_single(&self) -> bool {
        matches!(self, Event::Single(_))
    }
}

impl From<SingleEvent> for Event {
    fn from(event: SingleEvent) -> Self {
        Event::Single(event)
    }
}

impl From<RepetitiveEvent> for Event {
    fn from(event: RepetitiveEvent) -> Self {
        Event::Repetitive(event)
    }
}

impl From<FixedTerminationEvent> for Event {
    fn from(event: FixedTerminationEvent) -> Self {
        Event::FixedTermination(event)
    }
}
