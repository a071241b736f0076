use is_terminal::IsTerminal;

/// What the environment says about the terminal we draw on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stderr (the drawing surface) is a terminal
    pub is_tty: bool,
    /// stdin is a terminal, so keys can be read in raw mode
    pub input_is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
    pub height: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stderr().is_terminal(),
        std::io::stdin().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    input_is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some_and(|v| !v.is_empty());
    let is_ci = is_ci_env(&get_env);

    let supports_color = is_tty && !term_is_dumb && !no_color;
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    let (width, height) = size.unwrap_or((80, 24));
    TerminalCapabilities {
        is_tty,
        input_is_tty,
        supports_color,
        supports_unicode,
        is_ci,
        width,
        height,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            if val.is_empty() {
                continue;
            }
            let v = val.to_lowercase();
            // The first locale variable that is set wins.
            return v.contains("utf-8") || v.contains("utf8");
        }
    }

    true
}
