use anyhow::Result;
use termpick::{Outcome, SortItem, SortPrompt, Terminal, UiContext};

use super::Answer;
use crate::cli::SortArgs;

pub fn cmd_sort(args: SortArgs, ui: &UiContext, term: &mut dyn Terminal) -> Result<Answer> {
    let items: Vec<SortItem> = args.items.iter().map(String::as_str).map(parse_item).collect();

    let mut prompt = SortPrompt::new(args.message, items)
        .on_change(|order| tracing::debug!(?order, "reordered"));
    if let Some(hint) = args.hint {
        prompt = prompt.hint(hint);
    }

    let answer = match prompt.interact_on(term, ui)? {
        Outcome::Cancelled => Answer::cancelled(),
        Outcome::Submitted(values) => Answer::many(values),
    };
    Ok(answer)
}

/// `label=value`, or plain text used as both.
fn parse_item(raw: &str) -> SortItem {
    match raw.split_once('=') {
        Some((label, value)) if !label.is_empty() => SortItem::new(label, value),
        _ => SortItem::from(raw),
    }
}
