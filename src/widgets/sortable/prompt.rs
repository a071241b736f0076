use std::convert::Infallible;

use crate::error::PromptResult;
use crate::input::{Key, KeyCode};
use crate::runtime::{self, Outcome, Step, Widget};
use crate::terminal::{CrosstermTerminal, Terminal};
use crate::ui::UiContext;
use crate::widgets::summary_line;

use super::render::render_frame;
use super::state::{SortItem, SortState};

/// Builder for an interactive reordering session.
///
/// Resolves to the item values in their final order.
pub struct SortPrompt {
    message: String,
    items: Vec<SortItem>,
    hint: Option<String>,
    on_change: Option<Box<dyn FnMut(Vec<String>)>>,
}

impl SortPrompt {
    pub fn new<I>(message: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SortItem>,
    {
        Self {
            message: message.into(),
            items: items.into_iter().map(Into::into).collect(),
            hint: None,
            on_change: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Observe every reorder (including reset) as it happens.
    pub fn on_change(mut self, hook: impl FnMut(Vec<String>) + 'static) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    pub fn interact(self, ui: &UiContext) -> PromptResult<Outcome<Vec<String>>> {
        let mut term = CrosstermTerminal::new();
        self.interact_on(&mut term, ui)
    }

    pub fn interact_on<T>(self, term: &mut T, ui: &UiContext) -> PromptResult<Outcome<Vec<String>>>
    where
        T: Terminal + ?Sized,
    {
        let mut state = SortState::new(self.items);
        if let Some(hook) = self.on_change {
            state.set_on_change(hook);
        }
        let mut widget = SortWidget {
            state,
            message: self.message,
            hint: self.hint,
        };

        let outcome = runtime::run(term, &mut widget, ui)?;
        tracing::info!(cancelled = outcome.is_cancelled(), "sort session finished");
        Ok(outcome)
    }
}

struct SortWidget {
    state: SortState,
    message: String,
    hint: Option<String>,
}

impl Widget for SortWidget {
    type Output = Vec<String>;
    type Task = Infallible;

    fn frame(&self, ui: &UiContext) -> String {
        render_frame(&self.state, &self.message, self.hint.as_deref(), ui)
    }

    fn on_key(&mut self, key: &Key) -> Step<Vec<String>, Infallible> {
        match key.code {
            // Shift+arrow grabs the focused item and moves it in one step.
            KeyCode::Up if key.shift => {
                self.state.grab();
                self.state.drag_up();
            }
            KeyCode::Down if key.shift => {
                self.state.grab();
                self.state.drag_down();
            }
            KeyCode::Up => self.state.up(),
            KeyCode::Down => self.state.down(),
            KeyCode::Space => self.state.toggle_grab(),
            KeyCode::Enter => return Step::Submit(self.state.submit()),
            _ if key.printable() == Some('r') => self.state.reset(),
            _ => {}
        }
        Step::Redraw
    }

    fn resume(&mut self, _result: Option<Infallible>) {}

    fn summary(&self, outcome: &Outcome<Vec<String>>, ui: &UiContext) -> String {
        let answer = outcome.value().map(|_| {
            self.state
                .items()
                .iter()
                .map(|i| i.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        });
        summary_line(&self.message, answer.as_deref(), ui)
    }
}
