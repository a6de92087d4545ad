//! calendar-rs: headless calendar widget core.
//!
//! The crate lays out a Month view (a 7×6 day grid) and a Year view (twelve
//! month tiles), tracks hover/press/selection through a small pointer state
//! machine, and builds backend-agnostic render frames. Hosts feed pointer,
//! wheel and resize events in and receive click/scroll notifications out.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{CalendarWidget, CalendarWidgetConfig};
pub use error::{CalendarError, CalendarResult};
