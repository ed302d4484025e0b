//! Recurrence rule evaluation -- decides whether a recurring event occurs on a
//! given calendar day.
//!
//! Recurrence is expressed as a predicate over a single day rather than a
//! materialized occurrence list, keeping every query O(1) and side-effect-free.
//! The rule is: `day` is an occurrence iff `day == start` OR (`day > start` AND
//! the frequency pattern matches). Exception dates always suppress a match, and
//! a fixed termination bounds the recurrence from above (inclusive).

use std::collections::BTreeSet;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};
use crate::event::SingleEvent;

/// The recurrence unit of a repetitive event.
///
/// There is no "no repetition" value -- a [`SingleEvent`] represents the
/// non-repeating case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Advance `date` by `units` steps of this frequency.
    ///
    /// Month steps follow chrono's rollover convention: the day-of-month is
    /// clamped to the target month's length (Jan 31 + 1 month = Feb 28/29).
    /// Arithmetic that would leave chrono's representable range clamps to
    /// `NaiveDate::MAX`.
    pub fn advance(self, date: NaiveDate, units: u64) -> NaiveDate {
        match self {
            Frequency::Daily => date
                .checked_add_days(Days::new(units))
                .unwrap_or(NaiveDate::MAX),
            Frequency::Weekly => date
                .checked_add_days(Days::new(units.saturating_mul(7)))
                .unwrap_or(NaiveDate::MAX),
            Frequency::Monthly => {
                let months = u32::try_from(units).unwrap_or(u32::MAX);
                date.checked_add_months(Months::new(months))
                    .unwrap_or(NaiveDate::MAX)
            }
        }
    }

    /// Whole steps of this frequency from `from` to `to` (requires `to >= from`).
    ///
    /// This is the largest `n` such that `advance(from, n) <= to`, which for
    /// months accounts for end-of-month clamping (Jan 31 → Feb 29 counts as one
    /// whole month).
    pub fn span_between(self, from: NaiveDate, to: NaiveDate) -> i64 {
        match self {
            Frequency::Daily => to.signed_duration_since(from).num_days(),
            Frequency::Weekly => to.signed_duration_since(from).num_days() / 7,
            Frequency::Monthly => {
                let mut months = i64::from(to.year() - from.year()) * 12
                    + (i64::from(to.month()) - i64::from(from.month()));
                if months > 0 && self.advance(from, months as u64) > to {
                    months -= 1;
                }
                months.max(0)
            }
        }
    }
}

/// The unbounded occurrence rule shared by all recurring event kinds.
///
/// The start date is always an occurrence; every later candidate must match
/// the frequency pattern (daily: any day; weekly: same weekday; monthly: same
/// day-of-month). Days before the start never occur.
fn occurs_unbounded(start: NaiveDate, frequency: Frequency, day: NaiveDate) -> bool {
    if day == start {
        return true;
    }
    if day < start {
        return false;
    }
    match frequency {
        Frequency::Daily => true,
        Frequency::Weekly => day.weekday() == start.weekday(),
        Frequency::Monthly => day.day() == start.day(),
    }
}

/// A repetitive event with no upper bound: it recurs forever at its frequency.
///
/// Exception dates are the only mutable state in the whole model -- they can be
/// added at any time via [`RepetitiveEvent::add_exception`] and suppress exactly
/// the named dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitiveEvent {
    base: SingleEvent,
    frequency: Frequency,
    exceptions: BTreeSet<NaiveDate>,
}

impl RepetitiveEvent {
    /// Create an unbounded repetitive event.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        duration_minutes: u32,
        frequency: Frequency,
    ) -> Self {
        Self {
            base: SingleEvent::new(title, start, duration_minutes),
            frequency,
            exceptions: BTreeSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        self.base.title()
    }

    pub fn start(&self) -> NaiveDateTime {
        self.base.start()
    }

    pub fn date(&self) -> NaiveDate {
        self.base.date()
    }

    pub fn duration_minutes(&self) -> u32 {
        self.base.duration_minutes()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.base.end()
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Exclude `date` from the recurrence. Idempotent.
    pub fn add_exception(&mut self, date: NaiveDate) {
        self.exceptions.insert(date);
    }

    /// The exception dates, sorted. Returns a copy -- the internal set is
    /// never aliased.
    pub fn exceptions(&self) -> Vec<NaiveDate> {
        self.exceptions.iter().copied().collect()
    }

    /// True iff the recurrence produces an occurrence on `day`.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        if self.exceptions.contains(&day) {
            return false;
        }
        occurs_unbounded(self.base.date(), self.frequency, day)
    }
}

/// A repetitive event bounded by a termination date (inclusive) or,
/// equivalently, by a number of occurrences.
///
/// The two bounds are derived from each other once at construction and are
/// immutable afterwards, so they can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedTerminationEvent {
    recurrence: RepetitiveEvent,
    termination_date: NaiveDate,
    occurrence_count: i64,
}

impl FixedTerminationEvent {
    /// Create a bounded repetitive event ending on `termination` (inclusive).
    ///
    /// The occurrence count is derived as the frequency-specific whole-unit
    /// distance from the start date to `termination`, plus one.
    ///
    /// # Errors
    ///
    /// Returns [`AgendaError::TerminationBeforeStart`] if `termination` is
    /// before the start date.
    pub fn with_termination(
        title: impl Into<String>,
        start: NaiveDateTime,
        duration_minutes: u32,
        frequency: Frequency,
        termination: NaiveDate,
    ) -> Result<Self> {
        let start_date = start.date();
        if termination < start_date {
            return Err(AgendaError::TerminationBeforeStart {
                start: start_date,
                termination,
            });
        }
        let occurrence_count = frequency.span_between(start_date, termination) + 1;
        Ok(Self {
            recurrence: RepetitiveEvent::new(title, start, duration_minutes, frequency),
            termination_date: termination,
            occurrence_count,
        })
    }

    /// Create a bounded repetitive event ending after `occurrences` occurrences.
    ///
    /// The termination date is derived by advancing the start date by
    /// `occurrences - 1` frequency units. Zero occurrences is a degenerate but
    /// accepted case: the termination date collapses to the start date and the
    /// event never occurs, not even on its start date.
    ///
    /// # Errors
    ///
    /// Returns [`AgendaError::NegativeOccurrenceCount`] if `occurrences` is
    /// negative.
    pub fn with_occurrences(
        title: impl Into<String>,
        start: NaiveDateTime,
        duration_minutes: u32,
        frequency: Frequency,
        occurrences: i64,
    ) -> Result<Self> {
        if occurrences < 0 {
            return Err(AgendaError::NegativeOccurrenceCount(occurrences));
        }
        let start_date = start.date();
        let termination_date = if occurrences == 0 {
            start_date
        } else {
            frequency.advance(start_date, (occurrences - 1) as u64)
        };
        Ok(Self {
            recurrence: RepetitiveEvent::new(title, start, duration_minutes, frequency),
            termination_date,
            occurrence_count: occurrences,
        })
    }

    pub fn title(&self) -> &str {
        self.recurrence.title()
    }

    pub fn start(&self) -> NaiveDateTime {
        self.recurrence.start()
    }

    pub fn date(&self) -> NaiveDate {
        self.recurrence.date()
    }

    pub fn duration_minutes(&self) -> u32 {
        self.recurrence.duration_minutes()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.recurrence.end()
    }

    pub fn frequency(&self) -> Frequency {
        self.recurrence.frequency()
    }

    /// The last calendar date (inclusive) on which the recurrence may occur.
    pub fn termination_date(&self) -> NaiveDate {
        self.termination_date
    }

    /// The number of occurrences from the start date to the termination date,
    /// inclusive.
    pub fn occurrence_count(&self) -> i64 {
        self.occurrence_count
    }

    /// Exclude `date` from the recurrence. Idempotent.
    pub fn add_exception(&mut self, date: NaiveDate) {
        self.recurrence.add_exception(date);
    }

    /// The exception dates, sorted. Returns a copy.
    pub fn exceptions(&self) -> Vec<NaiveDate> {
        self.recurrence.exceptions()
    }

    /// True iff the bounded recurrence produces an occurrence on `day`.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        // A zero-occurrence event never occurs, not even on its start date.
        if self.occurrence_count == 0 {
            return false;
        }
        if day > self.termination_date {
            return false;
        }
        self.recurrence.occurs_on(day)
    }
}
