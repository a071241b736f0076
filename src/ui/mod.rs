//! Presentation: design tokens, styling, and the incremental painter.

mod context;
mod live_region;
mod text;
pub mod theme;

pub use context::UiContext;
pub use live_region::LiveRegion;
pub use text::{visible_width, StyledText, Tone};
pub use theme::Icon;
