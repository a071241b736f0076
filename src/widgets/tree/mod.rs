//! Tree navigator widget.
//!
//! - `node` - input specs, identities and the selection result
//! - `state` - the pure state machine (cursor, window, expansion, checks)
//! - `loader` - lazy child loading (`NodeLoader`, `DirLoader`)
//! - `render` - frame rendering
//! - `prompt` - `TreePrompt`, the widget wired to the runtime loop

mod loader;
mod node;
mod prompt;
mod render;
mod state;

pub use loader::{DirLoader, NodeLoader};
pub use node::{NodeId, NodeInfo, NodeKind, NodeSpec, SelectMode, TreeSelection};
pub use prompt::{LoadTask, TreePrompt};
pub use render::render_frame;
pub use state::{Expand, Submit, TreeState};
