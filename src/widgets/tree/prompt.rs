use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::anyhow;

use crate::error::{PromptError, PromptResult};
use crate::input::{Key, KeyCode};
use crate::runtime::{self, Outcome, Step, Task, Widget};
use crate::terminal::{CrosstermTerminal, Terminal};
use crate::ui::UiContext;
use crate::widgets::summary_line;

use super::loader::NodeLoader;
use super::node::{NodeId, NodeInfo, NodeSpec, SelectMode, TreeSelection};
use super::render::render_frame;
use super::state::{Expand, Submit, TreeState};

/// Builder for an interactive tree session.
///
/// ```no_run
/// use termpick::ui::UiContext;
/// use termpick::widgets::tree::{DirLoader, SelectMode, TreePrompt};
///
/// let outcome = TreePrompt::new("Pick a file")
///     .mode(SelectMode::File)
///     .loader(DirLoader::new("."))
///     .interact(&UiContext::plain())?;
/// # Ok::<(), termpick::PromptError>(())
/// ```
pub struct TreePrompt {
    message: String,
    mode: SelectMode,
    roots: Option<Vec<NodeSpec>>,
    loader: Option<Arc<dyn NodeLoader>>,
    limit: Option<usize>,
}

impl TreePrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mode: SelectMode::File,
            roots: None,
            loader: None,
            limit: None,
        }
    }

    pub fn mode(mut self, mode: SelectMode) -> Self {
        self.mode = mode;
        self
    }

    /// Static roots. Without them the loader is asked for the roots.
    pub fn roots(mut self, roots: Vec<NodeSpec>) -> Self {
        self.roots = Some(roots);
        self
    }

    pub fn loader(mut self, loader: impl NodeLoader + 'static) -> Self {
        self.loader = Some(Arc::new(loader));
        self
    }

    /// Rows in the scroll window; defaults to the configured window limit.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Run on the process terminal.
    pub fn interact(self, ui: &UiContext) -> PromptResult<Outcome<TreeSelection>> {
        let mut term = CrosstermTerminal::new();
        self.interact_on(&mut term, ui)
    }

    pub fn interact_on<T>(self, term: &mut T, ui: &UiContext) -> PromptResult<Outcome<TreeSelection>>
    where
        T: Terminal + ?Sized,
    {
        // Roots are fetched before the terminal is taken over.
        let roots = match (self.roots, &self.loader) {
            (Some(roots), _) => roots,
            (None, Some(loader)) => load_roots(loader.as_ref())?,
            (None, None) => Vec::new(),
        };

        let limit = self.limit.unwrap_or(ui.window_limit);
        let state = TreeState::new(roots, self.mode, limit)?;
        let mut widget = TreeWidget {
            state,
            loader: self.loader,
            message: self.message,
            notice: None,
        };

        let outcome = runtime::run(term, &mut widget, ui)?;
        tracing::info!(
            mode = ?widget.state.mode(),
            cancelled = outcome.is_cancelled(),
            "tree session finished"
        );
        Ok(outcome)
    }
}

fn load_roots(loader: &dyn NodeLoader) -> PromptResult<Vec<NodeSpec>> {
    match panic::catch_unwind(AssertUnwindSafe(|| loader.load(None))) {
        Ok(result) => result.map_err(PromptError::RootLoad),
        Err(_) => Err(PromptError::RootLoad(anyhow!("loader panicked"))),
    }
}

/// Loads one branch's children off the input loop.
pub struct LoadTask {
    loader: Arc<dyn NodeLoader>,
    id: NodeId,
    info: NodeInfo,
}

impl Task for LoadTask {
    type Output = (NodeId, anyhow::Result<Vec<NodeSpec>>);

    fn run(self) -> Self::Output {
        let result = self.loader.load(Some(&self.info));
        (self.id, result)
    }
}

struct TreeWidget {
    state: TreeState,
    loader: Option<Arc<dyn NodeLoader>>,
    message: String,
    notice: Option<String>,
}

impl TreeWidget {
    fn expand(&mut self, expand: Expand) -> Step<TreeSelection, LoadTask> {
        match expand {
            Expand::NeedsLoad(id, info) => match &self.loader {
                Some(loader) => Step::Suspend(LoadTask {
                    loader: Arc::clone(loader),
                    id,
                    info,
                }),
                None => {
                    self.state.finish_load(id, Ok(Vec::new()));
                    Step::Redraw
                }
            },
            _ => Step::Redraw,
        }
    }

    fn invalid_notice(&self) -> String {
        match self.state.mode() {
            SelectMode::Dir => "tree.invalid_dir",
            _ => "tree.invalid_file",
        }
        .to_string()
    }
}

impl Widget for TreeWidget {
    type Output = TreeSelection;
    type Task = LoadTask;

    fn frame(&self, ui: &UiContext) -> String {
        let notice = self.notice.as_deref().map(|key| ui.t(key));
        render_frame(&self.state, &self.message, notice.as_deref(), ui)
    }

    fn on_key(&mut self, key: &Key) -> Step<TreeSelection, LoadTask> {
        self.notice = None;
        match key.code {
            KeyCode::Up => self.state.up(),
            KeyCode::Down => self.state.down(),
            KeyCode::Home => self.state.home(),
            KeyCode::End => self.state.end(),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::PageDown => self.state.page_down(),
            KeyCode::Left => {
                self.state.left();
            }
            KeyCode::Right => {
                let expand = self.state.right();
                return self.expand(expand);
            }
            KeyCode::Space => {
                self.state.toggle_check();
            }
            KeyCode::Enter => match self.state.submit() {
                Submit::Done(selection) => return Step::Submit(selection),
                Submit::Invalid => {
                    self.notice = Some(self.invalid_notice());
                    return Step::Bell;
                }
                Submit::Expand(expand) => return self.expand(expand),
            },
            _ => {
                if let Some(c) = key.printable() {
                    self.state.jump_to(c);
                }
            }
        }
        Step::Redraw
    }

    fn resume(&mut self, result: Option<(NodeId, anyhow::Result<Vec<NodeSpec>>)>) {
        match result {
            Some((id, children)) => {
                self.state.finish_load(id, children);
            }
            None => {
                if let Some(id) = self.state.loading() {
                    self.state.finish_load(id, Err(anyhow!("loader panicked")));
                }
            }
        }
    }

    fn summary(&self, outcome: &Outcome<TreeSelection>, ui: &UiContext) -> String {
        let answer = outcome.value().map(|selection| match selection {
            TreeSelection::Single(info) => info.value.clone(),
            TreeSelection::Multi(infos) if infos.is_empty() => ui.t("nothing"),
            TreeSelection::Multi(infos) => infos
                .iter()
                .map(|i| i.value.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        });
        summary_line(&self.message, answer.as_deref(), ui)
    }
}
