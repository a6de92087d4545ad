//! Host-facing notification hooks.

mod listeners;

pub use listeners::{CalendarEvent, CalendarListener};
