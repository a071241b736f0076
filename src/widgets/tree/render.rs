//! Tree frame rendering.

use crate::ui::{Icon, StyledText, Tone, UiContext};
use crate::widgets::header;

use super::node::{NodeId, NodeKind};
use super::state::TreeState;

/// Render the whole tree frame: header, window rows, scroll indicators,
/// an optional notice and the key hint.
pub fn render_frame(
    state: &TreeState,
    message: &str,
    notice: Option<&str>,
    ui: &UiContext,
) -> String {
    let mut lines = vec![header(message, ui)];

    if state.offset() > 0 {
        lines.push(indicator(Icon::MoreAbove, "tree.more_above", ui));
    }

    let focused = state.focused();
    for &id in state.window() {
        lines.push(render_row(state, id, Some(id) == focused, ui));
    }

    if state.offset() + state.limit() < state.flat().len() {
        lines.push(indicator(Icon::MoreBelow, "tree.more_below", ui));
    }

    if let Some(notice) = notice {
        lines.push(format!(
            "  {}",
            ui.paint(StyledText::new(notice, Tone::Warning))
        ));
    }

    let help = if state.mode().is_multi() {
        ui.t("tree.help_multi")
    } else {
        ui.t("tree.help")
    };
    lines.push(ui.paint(StyledText::dim(&help)));

    lines.join("\n")
}

fn indicator(icon: Icon, key: &str, ui: &UiContext) -> String {
    let text = format!("  {} {}", ui.icon(icon), ui.t(key));
    ui.paint(StyledText::dim(&text))
}

fn render_row(state: &TreeState, id: NodeId, is_focused: bool, ui: &UiContext) -> String {
    let pointer = if is_focused {
        ui.paint(StyledText::accent(ui.icon(Icon::Pointer)))
    } else {
        " ".repeat(ui.icon(Icon::Pointer).chars().count())
    };
    let indent = "  ".repeat(state.depth(id));

    let expand_icon = match state.kind(id) {
        NodeKind::Leaf => ui.paint(StyledText::dim(ui.icon(Icon::Leaf))),
        NodeKind::Branch if state.is_expanded(id) => ui.icon(Icon::Expanded).to_string(),
        NodeKind::Branch => ui.icon(Icon::Collapsed).to_string(),
    };

    let check = if state.mode().is_multi() {
        let text = if state.is_checked(id) {
            ui.paint(StyledText::new(ui.icon(Icon::Checked), Tone::Success))
        } else {
            ui.icon(Icon::Unchecked).to_string()
        };
        format!("{text} ")
    } else {
        String::new()
    };

    let name = if is_focused {
        ui.paint(StyledText::accent(state.name(id)).bold())
    } else {
        state.name(id).to_string()
    };

    let mut row = format!("{pointer} {indent}{expand_icon} {check}{name}");

    if state.loading() == Some(id) {
        let text = format!(" {} {}", ui.icon(Icon::Loading), ui.t("tree.loading"));
        row.push_str(&ui.paint(StyledText::dim(&text)));
    } else if state.is_expanded(id) && state.children(id).is_some_and(<[NodeId]>::is_empty) {
        let text = format!(" {}", ui.t("tree.empty"));
        row.push_str(&ui.paint(StyledText::dim(&text)));
    }

    row
}
