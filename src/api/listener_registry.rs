use tracing::debug;

use crate::error::{CalendarError, CalendarResult};
use crate::extensions::{CalendarEvent, CalendarListener};
use crate::render::Renderer;

use super::CalendarWidget;

impl<R: Renderer> CalendarWidget<R> {
    /// Registers a listener under a unique, non-empty id.
    pub fn register_listener(&mut self, listener: Box<dyn CalendarListener>) -> CalendarResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(CalendarError::InvalidListener(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(CalendarError::InvalidListener(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }

    pub(super) fn emit_event(&mut self, event: CalendarEvent) {
        debug!(?event, listeners = self.listeners.len(), "calendar event");
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }
}
