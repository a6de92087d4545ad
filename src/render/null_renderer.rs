use crate::error::CalendarResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer for tests and headless hosts.
///
/// Frames are still validated, and the last frame's primitive counts are
/// kept so tests can assert on what would have been painted.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> CalendarResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_rect_count = frame.rects.len();
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
