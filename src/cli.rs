use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use termpick::config::ColorMode;
use termpick::SelectMode;

/// Termpick - interactive tree and sortable list prompts
#[derive(Parser, Debug)]
#[command(name = "termpick")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Results go to stdout; the prompt draws on stderr.")]
pub struct Cli {
    /// Config file (default: <config dir>/termpick/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Colour output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorArg>,

    /// ASCII icons only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Write a debug log to the cache directory
    #[arg(long, global = true)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a directory tree and pick files or directories
    Tree(TreeArgs),

    /// Reorder a list of items
    Sort(SortArgs),
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Directory to browse
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// What Enter submits
    #[arg(long, value_enum, default_value_t = ModeArg::File)]
    pub mode: ModeArg,

    /// Rows in the scroll window
    #[arg(long)]
    pub limit: Option<usize>,

    /// Prompt message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Include hidden files
    #[arg(long)]
    pub hidden: bool,

    /// Do not honour .gitignore / .ignore
    #[arg(long)]
    pub no_ignore: bool,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Prompt message
    #[arg(short, long, default_value = "Reorder the items")]
    pub message: String,

    /// Extra line shown under the message
    #[arg(long)]
    pub hint: Option<String>,

    /// Items as `label=value` or plain text
    #[arg(required = true)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    File,
    Dir,
    Multi,
}

impl From<ModeArg> for SelectMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::File => SelectMode::File,
            ModeArg::Dir => SelectMode::Dir,
            ModeArg::Multi => SelectMode::Multi,
        }
    }
}
