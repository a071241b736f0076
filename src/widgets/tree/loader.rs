//! Child loaders for lazily populated trees.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use ignore::WalkBuilder;

use super::node::{NodeInfo, NodeKind, NodeSpec};

/// Produces the children of a node, or the roots when `parent` is `None`.
///
/// Runs on a worker thread while the tree session waits, so it may block.
/// An `Err` (or a panic) rolls the expand back; the next expand retries.
pub trait NodeLoader: Send + Sync {
    fn load(&self, parent: Option<&NodeInfo>) -> anyhow::Result<Vec<NodeSpec>>;
}

impl<F> NodeLoader for F
where
    F: Fn(Option<&NodeInfo>) -> anyhow::Result<Vec<NodeSpec>> + Send + Sync,
{
    fn load(&self, parent: Option<&NodeInfo>) -> anyhow::Result<Vec<NodeSpec>> {
        self(parent)
    }
}

/// Lists a directory one level at a time.
///
/// Directories become lazy branches and files become leaves; directories
/// come first and each group is sorted by name. A node's value is its full
/// path, which is also what the loader reads when that node expands.
#[derive(Debug, Clone)]
pub struct DirLoader {
    root: PathBuf,
    show_hidden: bool,
    respect_ignore: bool,
}

impl DirLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            show_hidden: false,
            respect_ignore: true,
        }
    }

    pub fn show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// Honour `.gitignore`, `.ignore` and git excludes.
    pub fn respect_ignore(mut self, respect: bool) -> Self {
        self.respect_ignore = respect;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self, dir: &Path) -> anyhow::Result<Vec<NodeSpec>> {
        let meta =
            fs::metadata(dir).with_context(|| format!("cannot read {}", dir.display()))?;
        if !meta.is_dir() {
            bail!("{} is not a directory", dir.display());
        }

        let walker = WalkBuilder::new(dir)
            .max_depth(Some(1))
            .hidden(!self.show_hidden)
            .git_ignore(self.respect_ignore)
            .git_global(self.respect_ignore)
            .git_exclude(self.respect_ignore)
            .ignore(self.respect_ignore)
            .parents(self.respect_ignore)
            .require_git(false)
            .build();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.with_context(|| format!("cannot list {}", dir.display()))?;
            if entry.depth() == 0 {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let value = entry.path().display().to_string();
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let spec = if is_dir {
                NodeSpec::branch(name)
            } else {
                NodeSpec::leaf(name)
            };
            entries.push(spec.with_value(value));
        }

        entries.sort_by(|a, b| match (a.kind, b.kind) {
            (NodeKind::Branch, NodeKind::Leaf) => Ordering::Less,
            (NodeKind::Leaf, NodeKind::Branch) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        });
        tracing::debug!(dir = %dir.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }
}

impl NodeLoader for DirLoader {
    fn load(&self, parent: Option<&NodeInfo>) -> anyhow::Result<Vec<NodeSpec>> {
        match parent {
            None => self.list(&self.root),
            Some(info) => self.list(Path::new(&info.value)),
        }
    }
}
