//! Sortable list state machine.
//!
//! The list length never changes; only the order does. Every order
//! mutation reports the new order (by value) to the change hook.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    pub label: String,
    pub value: String,
}

impl SortItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for SortItem {
    fn from(s: &str) -> Self {
        Self::new(s, s)
    }
}

impl From<String> for SortItem {
    fn from(s: String) -> Self {
        Self::new(s.clone(), s)
    }
}

/// Called with the current values after every order change.
pub type ChangeHook = Box<dyn FnMut(Vec<String>)>;

pub struct SortState {
    items: Vec<SortItem>,
    initial: Vec<SortItem>,
    cursor: usize,
    grabbed: bool,
    on_change: Option<ChangeHook>,
}

impl fmt::Debug for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortState")
            .field("items", &self.items)
            .field("cursor", &self.cursor)
            .field("grabbed", &self.grabbed)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl SortState {
    pub fn new(items: Vec<SortItem>) -> Self {
        Self {
            initial: items.clone(),
            items,
            cursor: 0,
            grabbed: false,
            on_change: None,
        }
    }

    pub fn set_on_change(&mut self, hook: ChangeHook) {
        self.on_change = Some(hook);
    }

    pub fn items(&self) -> &[SortItem] {
        &self.items
    }

    pub fn values(&self) -> Vec<String> {
        self.items.iter().map(|i| i.value.clone()).collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn notify(&mut self) {
        let values = self.values();
        tracing::debug!(order = ?values, "order changed");
        if let Some(hook) = self.on_change.as_mut() {
            hook(values);
        }
    }

    /// Swap `i` with the item above it. No-op for the first item.
    pub fn move_up(&mut self, i: usize) -> bool {
        if i == 0 || i >= self.items.len() {
            return false;
        }
        self.items.swap(i - 1, i);
        self.notify();
        true
    }

    /// Swap `i` with the item below it. No-op for the last item.
    pub fn move_down(&mut self, i: usize) -> bool {
        if i + 1 >= self.items.len() {
            return false;
        }
        self.items.swap(i, i + 1);
        self.notify();
        true
    }

    /// Remove the item at `from` and insert it at `to`.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.notify();
        true
    }

    /// Restore the order the list started with and drop the grab.
    pub fn reset(&mut self) {
        self.items = self.initial.clone();
        self.grabbed = false;
        self.notify();
    }

    pub fn toggle_grab(&mut self) {
        self.grabbed = !self.grabbed;
    }

    pub fn grab(&mut self) {
        self.grabbed = true;
    }

    /// Up: move the cursor, carrying the item along while grabbed.
    pub fn up(&mut self) {
        if self.grabbed {
            self.drag_up();
        } else if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.grabbed {
            self.drag_down();
        } else if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Move the focused item up one place, grabbed or not.
    pub fn drag_up(&mut self) {
        if self.move_up(self.cursor) {
            self.cursor -= 1;
        }
    }

    pub fn drag_down(&mut self) {
        if self.move_down(self.cursor) {
            self.cursor += 1;
        }
    }

    pub fn submit(&self) -> Vec<String> {
        self.values()
    }
}
