use anyhow::Result;
use termpick::widgets::tree::{DirLoader, SelectMode, TreePrompt, TreeSelection};
use termpick::{Config, Outcome, Terminal, UiContext};

use super::Answer;
use crate::cli::TreeArgs;

pub fn cmd_tree(
    args: TreeArgs,
    config: &Config,
    ui: &UiContext,
    term: &mut dyn Terminal,
) -> Result<Answer> {
    let mode = SelectMode::from(args.mode);
    let message = args.message.unwrap_or_else(|| default_message(mode).to_string());

    let loader = DirLoader::new(&args.root)
        .show_hidden(args.hidden || config.tree.show_hidden)
        .respect_ignore(!args.no_ignore && config.tree.respect_ignore);

    let mut prompt = TreePrompt::new(message).mode(mode).loader(loader);
    if let Some(limit) = args.limit {
        prompt = prompt.limit(limit);
    }

    tracing::info!(root = %args.root.display(), ?mode, "starting tree prompt");
    let answer = match prompt.interact_on(term, ui)? {
        Outcome::Cancelled => Answer::cancelled(),
        Outcome::Submitted(TreeSelection::Single(info)) => {
            Answer::one(info.value.clone(), Some(info))
        }
        Outcome::Submitted(selection @ TreeSelection::Multi(_)) => {
            Answer::many(selection.values())
        }
    };
    Ok(answer)
}

fn default_message(mode: SelectMode) -> &'static str {
    match mode {
        SelectMode::File => "Select a file",
        SelectMode::Dir => "Select a directory",
        SelectMode::Multi => "Select files",
    }
}
