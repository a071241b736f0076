use crossterm::style::Color;

/// Design tokens for the widgets.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module, with an ASCII twin
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const QUESTION: &str = "?";
    pub const SUCCESS: &str = "✔";
    pub const CANCELLED: &str = "✖";
    pub const POINTER: &str = "❯";

    // Check boxes (multi-select).
    pub const CHECKED: &str = "◉";
    pub const UNCHECKED: &str = "◯";

    // Tree expansion.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
    pub const LEAF: &str = "·";
    pub const LOADING: &str = "…";

    // Scroll indicators.
    pub const MORE_ABOVE: &str = "↑";
    pub const MORE_BELOW: &str = "↓";

    // Sortable grab handle.
    pub const GRABBED: &str = "↕";
    pub const SEPARATOR: &str = "·";
}

pub mod icons_ascii {
    pub const QUESTION: &str = "?";
    pub const SUCCESS: &str = "[OK]";
    pub const CANCELLED: &str = "[X]";
    pub const POINTER: &str = ">";

    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";

    pub const EXPANDED: &str = "v";
    pub const COLLAPSED: &str = ">";
    pub const LEAF: &str = "-";
    pub const LOADING: &str = "...";

    pub const MORE_ABOVE: &str = "^";
    pub const MORE_BELOW: &str = "v";

    pub const GRABBED: &str = "=";
    pub const SEPARATOR: &str = "-";
}

/// Every icon the widgets draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Question,
    Success,
    Cancelled,
    Pointer,
    Checked,
    Unchecked,
    Expanded,
    Collapsed,
    Leaf,
    Loading,
    MoreAbove,
    MoreBelow,
    Grabbed,
    Separator,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Question) => icons::QUESTION,
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Cancelled) => icons::CANCELLED,
            (true, Icon::Pointer) => icons::POINTER,
            (true, Icon::Checked) => icons::CHECKED,
            (true, Icon::Unchecked) => icons::UNCHECKED,
            (true, Icon::Expanded) => icons::EXPANDED,
            (true, Icon::Collapsed) => icons::COLLAPSED,
            (true, Icon::Leaf) => icons::LEAF,
            (true, Icon::Loading) => icons::LOADING,
            (true, Icon::MoreAbove) => icons::MORE_ABOVE,
            (true, Icon::MoreBelow) => icons::MORE_BELOW,
            (true, Icon::Grabbed) => icons::GRABBED,
            (true, Icon::Separator) => icons::SEPARATOR,
            (false, Icon::Question) => icons_ascii::QUESTION,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Cancelled) => icons_ascii::CANCELLED,
            (false, Icon::Pointer) => icons_ascii::POINTER,
            (false, Icon::Checked) => icons_ascii::CHECKED,
            (false, Icon::Unchecked) => icons_ascii::UNCHECKED,
            (false, Icon::Expanded) => icons_ascii::EXPANDED,
            (false, Icon::Collapsed) => icons_ascii::COLLAPSED,
            (false, Icon::Leaf) => icons_ascii::LEAF,
            (false, Icon::Loading) => icons_ascii::LOADING,
            (false, Icon::MoreAbove) => icons_ascii::MORE_ABOVE,
            (false, Icon::MoreBelow) => icons_ascii::MORE_BELOW,
            (false, Icon::Grabbed) => icons_ascii::GRABBED,
            (false, Icon::Separator) => icons_ascii::SEPARATOR,
        }
    }
}
