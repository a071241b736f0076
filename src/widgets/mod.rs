//! Interactive widgets built on the runtime loop.

pub mod sortable;
pub mod tree;

use crate::ui::{Icon, StyledText, Tone, UiContext};

/// `? message` header shared by every widget frame.
pub(crate) fn header(message: &str, ui: &UiContext) -> String {
    format!(
        "{} {}",
        ui.paint(StyledText::accent(ui.icon(Icon::Question))),
        ui.paint(StyledText::plain(message).bold())
    )
}

/// The confirmation line left behind after a session.
///
/// `answer` is `None` for a cancelled session.
pub(crate) fn summary_line(message: &str, answer: Option<&str>, ui: &UiContext) -> String {
    let (icon, tone, text) = match answer {
        Some(answer) => (Icon::Success, Tone::Success, answer.to_string()),
        None => (Icon::Cancelled, Tone::Error, ui.t("cancelled")),
    };
    format!(
        "{} {} {} {}",
        ui.paint(StyledText::new(ui.icon(icon), tone)),
        ui.paint(StyledText::plain(message).bold()),
        ui.paint(StyledText::dim(ui.icon(Icon::Separator))),
        ui.paint(StyledText::new(&text, tone)),
    )
}
