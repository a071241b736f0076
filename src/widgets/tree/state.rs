//! Tree state machine.
//!
//! Owns the node arena, the expanded and checked sets, the cursor and the
//! scroll window. Every transition is synchronous; loading children is
//! split into [`TreeState::toggle_expand`] (which may ask for a load) and
//! [`TreeState::finish_load`] so the caller decides where the loader runs.
//!
//! After every transition:
//! - `0 <= cursor < flat.len()`
//! - `offset <= cursor < offset + limit`
//! - a node is in `flat` iff every ancestor is expanded

use std::collections::HashSet;

use crate::error::{PromptError, PromptResult};

use super::loader::NodeLoader;
use super::node::{Node, NodeId, NodeInfo, NodeKind, NodeSpec, SelectMode, TreeSelection};

/// Result of an expand/collapse request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expand {
    Expanded,
    Collapsed,
    /// Children are not loaded; run the loader for this node, then call
    /// [`TreeState::finish_load`].
    NeedsLoad(NodeId, NodeInfo),
    /// A load finished with an error and was rolled back.
    Failed,
    NotBranch,
    /// Another load is still running.
    Busy,
}

/// Result of pressing Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    Done(TreeSelection),
    /// The focused node does not match the selection mode.
    Invalid,
    /// Enter on a branch in file mode behaves like Right.
    Expand(Expand),
}

#[derive(Debug)]
pub struct TreeState {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    mode: SelectMode,
    limit: usize,
    cursor: usize,
    offset: usize,
    expanded: HashSet<NodeId>,
    checked: HashSet<NodeId>,
    flat: Vec<NodeId>,
    loading: Option<NodeId>,
}

impl TreeState {
    pub fn new(roots: Vec<NodeSpec>, mode: SelectMode, limit: usize) -> PromptResult<Self> {
        if roots.is_empty() {
            return Err(PromptError::EmptyTree);
        }

        let mut state = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            mode,
            limit: limit.max(1),
            cursor: 0,
            offset: 0,
            expanded: HashSet::new(),
            checked: HashSet::new(),
            flat: Vec::new(),
            loading: None,
        };
        let ids: Vec<NodeId> = roots
            .into_iter()
            .map(|spec| state.insert(spec, None))
            .collect();
        state.roots = ids;
        state.reflatten();
        Ok(state)
    }

    fn insert(&mut self, spec: NodeSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let (depth, path) = match parent {
            Some(p) => {
                let p = &self.nodes[p.0];
                (p.depth + 1, format!("{}/{}", p.path, spec.name))
            }
            None => (0, spec.name.clone()),
        };
        let value = spec.value.unwrap_or_else(|| spec.name.clone());
        self.nodes.push(Node {
            name: spec.name,
            value,
            kind: spec.kind,
            parent,
            // Leaves never load anything.
            children: match spec.kind {
                NodeKind::Leaf => Some(Vec::new()),
                NodeKind::Branch => None,
            },
            depth,
            path,
        });

        if spec.kind == NodeKind::Branch {
            if let Some(children) = spec.children {
                self.attach(id, children);
            }
        }
        id
    }

    fn attach(&mut self, id: NodeId, children: Vec<NodeSpec>) {
        let ids = children
            .into_iter()
            .map(|child| self.insert(child, Some(id)))
            .collect();
        self.nodes[id.0].children = Some(ids);
    }

    /// Rebuild the projection, keeping focus on the same node or, if it
    /// was hidden, on its nearest visible ancestor.
    fn reflatten(&mut self) {
        let focused = self.flat.get(self.cursor).copied();

        let mut flat = Vec::with_capacity(self.flat.len());
        let mut stack: Vec<(NodeId, usize)> = self.roots.iter().rev().map(|&r| (r, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            self.nodes[id.0].depth = depth;
            flat.push(id);
            if self.expanded.contains(&id) {
                if let Some(children) = &self.nodes[id.0].children {
                    stack.extend(children.iter().rev().map(|&c| (c, depth + 1)));
                }
            }
        }
        self.flat = flat;

        let mut target = focused;
        while let Some(id) = target {
            if let Some(pos) = self.flat.iter().position(|&f| f == id) {
                self.cursor = pos;
                break;
            }
            target = self.nodes[id.0].parent;
        }
        self.clamp();
    }

    fn clamp(&mut self) {
        let len = self.flat.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.offset = self.offset.min(len.saturating_sub(self.limit));
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        if self.cursor >= self.offset + self.limit {
            self.offset = self.cursor + 1 - self.limit;
        }
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.clamp();
    }

    // Accessors

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn flat(&self) -> &[NodeId] {
        &self.flat
    }

    /// The rows currently inside the scroll window.
    pub fn window(&self) -> &[NodeId] {
        let end = (self.offset + self.limit).min(self.flat.len());
        &self.flat[self.offset..end]
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.flat.get(self.cursor).copied()
    }

    pub fn info(&self, id: NodeId) -> NodeInfo {
        self.nodes[id.0].info()
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0].kind
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// `None` until the branch has been loaded.
    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes[id.0].children.as_deref()
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn is_checked(&self, id: NodeId) -> bool {
        self.checked.contains(&id)
    }

    pub fn loading(&self) -> Option<NodeId> {
        self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every node created so far, loaded or not, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    // Cursor movement

    pub fn up(&mut self) {
        if self.cursor > 0 {
            self.set_cursor(self.cursor - 1);
        }
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.flat.len() {
            self.set_cursor(self.cursor + 1);
        }
    }

    pub fn home(&mut self) {
        self.set_cursor(0);
    }

    pub fn end(&mut self) {
        self.set_cursor(self.flat.len().saturating_sub(1));
    }

    pub fn page_up(&mut self) {
        self.set_cursor(self.cursor.saturating_sub(self.limit));
    }

    pub fn page_down(&mut self) {
        let last = self.flat.len().saturating_sub(1);
        self.set_cursor((self.cursor + self.limit).min(last));
    }

    /// Move to the next node whose name starts with `c` (case-insensitive),
    /// wrapping around. Returns whether a match was found.
    pub fn jump_to(&mut self, c: char) -> bool {
        let len = self.flat.len();
        let wanted: String = c.to_lowercase().collect();
        for step in 1..=len {
            let pos = (self.cursor + step) % len;
            let name = &self.nodes[self.flat[pos].0].name;
            let first: Option<String> = name.chars().next().map(|f| f.to_lowercase().collect());
            if first.as_deref() == Some(wanted.as_str()) {
                self.set_cursor(pos);
                return true;
            }
        }
        false
    }

    // Structure

    /// Collapse an expanded branch, expand a loaded one, or ask for a load.
    pub fn toggle_expand(&mut self, id: NodeId) -> Expand {
        if self.loading.is_some() {
            return Expand::Busy;
        }
        let node = &self.nodes[id.0];
        if !node.is_branch() {
            return Expand::NotBranch;
        }

        if self.expanded.remove(&id) {
            tracing::debug!(node = %node.path, "collapse");
            self.reflatten();
            return Expand::Collapsed;
        }

        let loaded = node.children.is_some();
        self.expanded.insert(id);
        if loaded {
            tracing::debug!(node = %self.nodes[id.0].path, "expand");
            self.reflatten();
            Expand::Expanded
        } else {
            self.loading = Some(id);
            Expand::NeedsLoad(id, self.nodes[id.0].info())
        }
    }

    /// Apply a load started by [`toggle_expand`](Self::toggle_expand).
    ///
    /// On success the children are cached and the branch stays expanded. On
    /// failure the expand is rolled back so the next attempt loads again.
    pub fn finish_load(&mut self, id: NodeId, result: anyhow::Result<Vec<NodeSpec>>) -> Expand {
        if self.loading != Some(id) {
            tracing::debug!(node = id.index(), "ignoring stale load result");
            return Expand::Busy;
        }
        self.loading = None;

        match result {
            Ok(children) => {
                tracing::debug!(
                    node = %self.nodes[id.0].path,
                    count = children.len(),
                    "children loaded"
                );
                self.attach(id, children);
                self.reflatten();
                Expand::Expanded
            }
            Err(err) => {
                tracing::warn!(node = %self.nodes[id.0].path, "failed to load children: {err:#}");
                self.expanded.remove(&id);
                self.reflatten();
                Expand::Failed
            }
        }
    }

    /// [`toggle_expand`](Self::toggle_expand) with the load run inline.
    ///
    /// Without a loader an unloaded branch expands as empty.
    pub fn toggle_expand_with(&mut self, id: NodeId, loader: Option<&dyn NodeLoader>) -> Expand {
        match self.toggle_expand(id) {
            Expand::NeedsLoad(id, info) => {
                let result = match loader {
                    Some(loader) => loader.load(Some(&info)),
                    None => Ok(Vec::new()),
                };
                self.finish_load(id, result)
            }
            other => other,
        }
    }

    /// Left: collapse the focused branch, else jump to its parent.
    pub fn left(&mut self) -> bool {
        let Some(id) = self.focused() else {
            return false;
        };
        if self.expanded.contains(&id) {
            return self.toggle_expand(id) == Expand::Collapsed;
        }

        let depth = self.nodes[id.0].depth;
        if depth == 0 {
            return false;
        }
        let parent = (0..self.cursor)
            .rev()
            .find(|&i| self.nodes[self.flat[i].0].depth == depth - 1);
        match parent {
            Some(pos) => {
                self.set_cursor(pos);
                true
            }
            None => false,
        }
    }

    /// Right: expand the focused branch.
    pub fn right(&mut self) -> Expand {
        let Some(id) = self.focused() else {
            return Expand::NotBranch;
        };
        if !self.nodes[id.0].is_branch() {
            return Expand::NotBranch;
        }
        if self.expanded.contains(&id) {
            return Expand::Expanded;
        }
        self.toggle_expand(id)
    }

    /// Space in multi mode. Returns whether the checked set changed.
    pub fn toggle_check(&mut self) -> bool {
        if !self.mode.is_multi() {
            return false;
        }
        let Some(id) = self.focused() else {
            return false;
        };
        if !self.checked.remove(&id) {
            self.checked.insert(id);
        }
        true
    }

    pub fn submit(&mut self) -> Submit {
        if self.mode.is_multi() {
            return Submit::Done(TreeSelection::Multi(self.checked_infos()));
        }
        let Some(id) = self.focused() else {
            return Submit::Invalid;
        };

        match (self.mode, self.nodes[id.0].kind) {
            (SelectMode::File, NodeKind::Leaf) | (SelectMode::Dir, NodeKind::Branch) => {
                Submit::Done(TreeSelection::Single(self.info(id)))
            }
            (SelectMode::File, NodeKind::Branch) => Submit::Expand(self.right()),
            _ => {
                tracing::warn!(node = %self.nodes[id.0].path, mode = ?self.mode, "invalid selection");
                Submit::Invalid
            }
        }
    }

    /// Checked nodes in depth-first order over every loaded node.
    pub fn checked_infos(&self) -> Vec<NodeInfo> {
        let mut out = Vec::with_capacity(self.checked.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.checked.contains(&id) {
                out.push(self.info(id));
            }
            if let Some(children) = &self.nodes[id.0].children {
                stack.extend(children.iter().rev());
            }
        }
        out
    }

    /// Whether every ancestor of `id` is expanded.
    pub fn ancestors_expanded(&self, id: NodeId) -> bool {
        let mut parent = self.nodes[id.0].parent;
        while let Some(p) = parent {
            if !self.expanded.contains(&p) {
                return false;
            }
            parent = self.nodes[p.0].parent;
        }
        true
    }
}
