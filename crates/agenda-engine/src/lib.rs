//! # agenda-engine
//!
//! A pure in-memory calendar/agenda model with deterministic day-occurrence
//! resolution for simple and recurring events.
//!
//! The core is a rule-evaluation engine over calendar arithmetic: given an
//! event's recurrence rule (none, daily, weekly, monthly, with optional
//! termination by date or by count, and optional exception dates), decide
//! whether that event occurs on an arbitrary calendar day. Recurrence is a
//! predicate over a single day, never a materialized occurrence list, so every
//! query is O(1) per event and side-effect-free.
//!
//! ## Quick start
//!
//! ```rust
//! use agenda_engine::{Agenda, Frequency, RepetitiveEvent, SingleEvent};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2020, 11, 1)
//!     .unwrap()
//!     .and_hms_opt(22, 30, 0)
//!     .unwrap();
//!
//! let mut agenda = Agenda::new();
//! agenda.add_event(SingleEvent::new("Dinner", start, 120));
//! agenda.add_event(RepetitiveEvent::new("Standup", start, 15, Frequency::Daily));
//!
//! let day = NaiveDate::from_ymd_opt(2020, 11, 1).unwrap();
//! assert_eq!(agenda.events_in_day(day).len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`event`] — `SingleEvent` and the polymorphic `Event` wrapper
//! - [`recurrence`] — `Frequency`, unbounded and fixed-termination recurrence
//! - [`agenda`] — the `Agenda` container and its queries
//! - [`error`] — error types

pub mod agenda;
pub mod error;
pub mod event;
pub mod recurrence;

pub use agenda::Agenda;
pub use error::{AgendaError, Result};
pub use event::{Event, SingleEvent};
pub use recurrence::{FixedTerminationEvent, Frequency, RepetitiveEvent};
