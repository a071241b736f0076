//! Termpick - raw-terminal tree navigator and sortable list prompts
//!
//! Both widgets own their keystroke capture and repaint only the lines they
//! drew last. Every session runs through one loop ([`runtime::run`]) that
//! puts the terminal back the way it found it on submit, cancel, or error.

pub mod config;
pub mod error;
pub mod i18n;
pub mod input;
pub mod runtime;
pub mod terminal;
pub mod ui;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use error::{PromptError, PromptResult};
pub use i18n::{Translate, Vocab};
pub use input::{Key, KeyCode, KeyDecoder};
pub use runtime::{Outcome, Step, Task, Widget};
pub use terminal::{CrosstermTerminal, StreamTerminal, Terminal};
pub use ui::UiContext;
pub use widgets::sortable::{SortItem, SortPrompt};
pub use widgets::tree::{DirLoader, NodeLoader, NodeSpec, SelectMode, TreePrompt, TreeSelection};
