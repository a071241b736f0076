//! Widget runtime loop.
//!
//! One loop drives every widget: acquire the terminal, paint, read a key,
//! apply it, repaint, until the widget submits or the user cancels. The
//! terminal is restored exactly once on every exit path.

mod session;

use std::collections::VecDeque;
use std::convert::Infallible;
use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::config::LoadInput;
use crate::error::PromptResult;
use crate::input::Key;
use crate::terminal::Terminal;
use crate::ui::{LiveRegion, UiContext};

pub use session::Session;

/// How often a suspended session checks its task and drains input.
const SUSPEND_POLL: Duration = Duration::from_millis(10);

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Submitted(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Submitted(v) => Some(v),
            Outcome::Cancelled => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Submitted(v) => Some(v),
            Outcome::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Submitted(v) => Outcome::Submitted(f(v)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}

/// Work a widget needs done off the input loop (e.g. loading children).
pub trait Task: Send + 'static {
    type Output: Send + 'static;

    fn run(self) -> Self::Output;
}

/// For widgets that never suspend.
impl Task for Infallible {
    type Output = Infallible;

    fn run(self) -> Infallible {
        match self {}
    }
}

/// What the loop should do after a key was applied.
#[derive(Debug)]
pub enum Step<T, J> {
    /// State may have changed; repaint.
    Redraw,
    /// The key was not valid here; ring the bell and repaint.
    Bell,
    /// Terminal action: finish with this value.
    Submit(T),
    /// Run `J` and hand its result to [`Widget::resume`].
    Suspend(J),
}

/// A state machine plus its rendering, driven by [`run`].
pub trait Widget {
    type Output;
    type Task: Task;

    /// The full frame for the current state.
    fn frame(&self, ui: &UiContext) -> String;

    fn on_key(&mut self, key: &Key) -> Step<Self::Output, Self::Task>;

    /// Receives the suspended task's result; `None` if the task panicked.
    fn resume(&mut self, result: Option<<Self::Task as Task>::Output>);

    /// The single line left on screen after the session.
    fn summary(&self, outcome: &Outcome<Self::Output>, ui: &UiContext) -> String;
}

enum Suspended<O> {
    Done(Option<O>),
    Cancelled,
}

/// Run `widget` on `term` until it submits or the user cancels.
///
/// Only a failure to take the terminal, or an IO error while drawing, is
/// returned as `Err`; cancellation is `Ok(Outcome::Cancelled)`.
pub fn run<W, T>(term: &mut T, widget: &mut W, ui: &UiContext) -> PromptResult<Outcome<W::Output>>
where
    W: Widget,
    T: Terminal + ?Sized,
{
    let mut session = Session::begin(term)?;
    let mut region = LiveRegion::default();
    let mut replay: VecDeque<Key> = VecDeque::new();

    repaint(&mut region, session.terminal(), &widget.frame(ui))?;

    let outcome = loop {
        let key = match replay.pop_front() {
            Some(key) => key,
            None => match session.terminal().read_key()? {
                Some(key) => key,
                None => {
                    tracing::debug!("input closed, cancelling session");
                    break Outcome::Cancelled;
                }
            },
        };

        if key.is_cancel() {
            tracing::debug!(key = key.name(), "session cancelled");
            break Outcome::Cancelled;
        }

        match widget.on_key(&key) {
            Step::Redraw => {}
            Step::Bell => session.terminal().bell()?,
            Step::Submit(value) => break Outcome::Submitted(value),
            Step::Suspend(task) => {
                repaint(&mut region, session.terminal(), &widget.frame(ui))?;
                match suspend(session.terminal(), task, ui.keys_during_load, &mut replay)? {
                    Suspended::Done(result) => widget.resume(result),
                    Suspended::Cancelled => break Outcome::Cancelled,
                }
            }
        }

        repaint(&mut region, session.terminal(), &widget.frame(ui))?;
    };

    repaint(&mut region, session.terminal(), &widget.summary(&outcome, ui))?;
    session.release()?;
    Ok(outcome)
}

/// Draw `content`, measuring rows at the terminal's current width.
fn repaint<T>(region: &mut LiveRegion, term: &mut T, content: &str) -> io::Result<()>
where
    T: Terminal + ?Sized,
{
    region.resize(term.width());
    region.update(term, content)
}

/// Run `task` on a worker thread while keeping the input drained.
///
/// Cancel keys end the wait at once; the worker's late result is dropped.
fn suspend<J, T>(
    term: &mut T,
    task: J,
    policy: LoadInput,
    replay: &mut VecDeque<Key>,
) -> io::Result<Suspended<J::Output>>
where
    J: Task,
    T: Terminal + ?Sized,
{
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("termpick-task".to_string())
        .spawn(move || {
            let _ = tx.send(task.run());
        })?;

    loop {
        match rx.recv_timeout(SUSPEND_POLL) {
            Ok(output) => return Ok(Suspended::Done(Some(output))),
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("background task ended without a result");
                return Ok(Suspended::Done(None));
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        while let Some(key) = term.poll_key(Duration::ZERO)? {
            if key.is_cancel() {
                tracing::debug!("cancelled while a task was running");
                return Ok(Suspended::Cancelled);
            }
            match policy {
                LoadInput::Drop => tracing::trace!(key = key.name(), "dropped key"),
                LoadInput::Queue => replay.push_back(key),
            }
        }
    }
}
