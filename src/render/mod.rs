mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::CalendarResult;

/// Contract implemented by any painting backend.
///
/// Backends receive a fully built `RenderFrame`, so painting code never sees
/// tiles, selection or pointer state directly.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> CalendarResult<()>;
}
