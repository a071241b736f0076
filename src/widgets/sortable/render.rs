use crate::ui::{Icon, StyledText, Tone, UiContext};
use crate::widgets::header;

use super::state::SortState;

/// Header, optional hint, numbered rows and the key hint.
pub fn render_frame(state: &SortState, message: &str, hint: Option<&str>, ui: &UiContext) -> String {
    let mut lines = vec![header(message, ui)];
    if let Some(hint) = hint {
        lines.push(format!("  {}", ui.paint(StyledText::dim(hint))));
    }

    let digits = state.len().to_string().len();
    let pointer_width = ui.icon(Icon::Pointer).chars().count();
    for (i, item) in state.items().iter().enumerate() {
        let focused = i == state.cursor();
        let pointer = match (focused, state.is_grabbed()) {
            (true, true) => ui.paint(StyledText::new(ui.icon(Icon::Grabbed), Tone::Warning)),
            (true, false) => ui.paint(StyledText::accent(ui.icon(Icon::Pointer))),
            _ => " ".repeat(pointer_width),
        };
        let number = ui.paint(StyledText::dim(&format!("{:>digits$}.", i + 1)));
        let label = if focused {
            ui.paint(StyledText::accent(&item.label).bold())
        } else {
            item.label.clone()
        };

        let mut row = format!("{pointer} {number} {label}");
        if focused && state.is_grabbed() {
            let marker = format!(" ({})", ui.t("sort.grabbed"));
            row.push_str(&ui.paint(StyledText::new(&marker, Tone::Warning)));
        }
        lines.push(row);
    }

    lines.push(ui.paint(StyledText::dim(&ui.t("sort.help"))));
    lines.join("\n")
}
