//! Tree node types.
//!
//! Callers describe a tree with [`NodeSpec`]; the state machine stores the
//! nodes in an arena and hands out [`NodeId`]s as their identity.

use serde::Serialize;

/// Identity of a node for the lifetime of one tree session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Leaf,
    Branch,
}

/// What a tree session returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Submit a single leaf.
    File,
    /// Submit a single branch.
    Dir,
    /// Check any number of nodes and submit them all.
    Multi,
}

impl SelectMode {
    pub fn is_multi(self) -> bool {
        self == SelectMode::Multi
    }
}

/// Input description of a node.
///
/// `children: None` on a branch means "not loaded yet"; the loader is asked
/// for them on first expand. `Some(vec![])` is a loaded, empty branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub name: String,
    pub value: Option<String>,
    pub kind: NodeKind,
    pub children: Option<Vec<NodeSpec>>,
}

impl NodeSpec {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            kind: NodeKind::Leaf,
            children: None,
        }
    }

    /// A branch whose children are loaded lazily.
    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            kind: NodeKind::Branch,
            children: None,
        }
    }

    pub fn with_children(mut self, children: Vec<NodeSpec>) -> Self {
        self.kind = NodeKind::Branch;
        self.children = Some(children);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Snapshot of a node handed to loaders and returned on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub name: String,
    pub value: String,
    /// `/`-joined names from the root.
    pub path: String,
    pub kind: NodeKind,
    pub depth: usize,
}

/// Result of a submitted tree session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeSelection {
    Single(NodeInfo),
    /// Checked nodes in depth-first order.
    Multi(Vec<NodeInfo>),
}

impl TreeSelection {
    pub fn values(&self) -> Vec<String> {
        match self {
            TreeSelection::Single(info) => vec![info.value.clone()],
            TreeSelection::Multi(infos) => infos.iter().map(|i| i.value.clone()).collect(),
        }
    }
}

/// Arena entry. `depth` and `path` are set on insert; `depth` is rewritten
/// whenever the projection is rebuilt.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub name: String,
    pub value: String,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Option<Vec<NodeId>>,
    pub depth: usize,
    pub path: String,
}

impl Node {
    pub fn is_branch(&self) -> bool {
        self.kind == NodeKind::Branch
    }

    pub fn info(&self) -> NodeInfo {
        NodeInfo {
            name: self.name.clone(),
            value: self.value.clone(),
            path: self.path.clone(),
            kind: self.kind,
            depth: self.depth,
        }
    }
}
