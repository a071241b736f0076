//! Sortable list widget: reorder items by grabbing and moving them.

mod prompt;
mod render;
mod state;

pub use prompt::SortPrompt;
pub use render::render_frame;
pub use state::{ChangeHook, SortItem, SortState};
