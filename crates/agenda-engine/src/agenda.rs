//! The agenda container -- an insertion-ordered collection of events with
//! day-lookup, title-lookup, and a single-day free-slot check.
//!
//! All queries are pure: they delegate to each event's own occurrence predicate
//! and return fresh collections without touching internal storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};
use crate::event::Event;

/// An agenda that stores events.
///
/// Events keep their insertion order, duplicates are allowed, and there is no
/// removal -- once added, an event is permanent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Agenda {
    events: Vec<Event>,
}

impl Agenda {
    /// Create an empty agenda.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to the agenda.
    ///
    /// Accepts any event kind ([`crate::event::SingleEvent`],
    /// [`crate::recurrence::RepetitiveEvent`],
    /// [`crate::recurrence::FixedTerminationEvent`], or an [`Event`] directly).
    pub fn add_event(&mut self, event: impl Into<Event>) {
        self.events.push(event.into());
    }

    /// Number of events stored.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every event that occurs on `day`, in insertion order.
    pub fn events_in_day(&self, day: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.occurs_on(day)).collect()
    }

    /// Every event whose title exactly equals `title` (case-sensitive),
    /// in insertion order.
    pub fn find_by_title(&self, title: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.title() == title).collect()
    }

    /// Whether the agenda is free on the calendar day of `event`'s start.
    ///
    /// Slot freedom is only defined for single-occurrence events. The check
    /// considers every stored event of every kind: the day is occupied as soon
    /// as any event occurs on it.
    ///
    /// # Errors
    ///
    /// Returns [`AgendaError::NotASimpleEvent`] if `event` is any repetitive
    /// kind, regardless of whether the slot is actually free.
    pub fn is_free_for(&self, event: &Event) -> Result<bool> {
        let Event::Single(single) = event else {
            return Err(AgendaError::NotASimpleEvent);
        };
        Ok(!self.events.iter().any(|e| e.occurs_on(single.date())))
    }
}
