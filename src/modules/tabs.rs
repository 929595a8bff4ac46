// Tab collection model - Pure logic, no UI imports.
// Ordered tabs plus a single current-selection pointer that survives reordering.

use log::debug;
use std::collections::HashMap;

use crate::state::{Tab, TabId};

/// Which tab, if any, is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    At(usize),
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::At(index) => Some(index),
        }
    }
}

impl From<Option<usize>> for Selection {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Selection::None, Selection::At)
    }
}

/// Ordered tabs; insertion order is display order.
///
/// Invariant: the selection is `None` exactly when there are no tabs, and
/// otherwise points inside the list. Every mutation ends in `normalize`.
///
/// Indexed operations (`get`, `select`, `insert`, `remove`) treat an index out
/// of range as a caller bug and panic.
#[derive(Debug, Clone, Default)]
pub struct TabsModel {
    tabs: Vec<Tab>,
    selection: Selection,
}

impl TabsModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tabs(tabs: Vec<Tab>, current_index: Option<usize>) -> Self {
        let mut model = Self {
            tabs,
            selection: current_index.into(),
        };
        model.normalize();
        model
    }

    fn normalize(&mut self) {
        self.selection = match (self.tabs.len(), self.selection) {
            (0, _) => Selection::None,
            (len, Selection::At(index)) if index >= len => Selection::At(len - 1),
            (_, Selection::None) => Selection::At(0),
            (_, selection) => selection,
        };
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.tabs.len(),
            "tab index {} out of bounds for {} tabs",
            index,
            self.tabs.len()
        );
    }

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn current_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.current_index().map(|index| &self.tabs[index])
    }

    pub fn current_tab_mut(&mut self) -> Option<&mut Tab> {
        let index = self.current_index()?;
        Some(&mut self.tabs[index])
    }

    /// True iff any tab has not been viewed yet.
    pub fn has_unread(&self) -> bool {
        self.tabs.iter().any(|t| !t.viewed)
    }

    /// More than one tab, or a single tab that has navigated somewhere.
    pub fn has_active_tabs(&self) -> bool {
        self.tabs.len() > 1 || self.tabs.last().is_some_and(|t| t.link.is_some())
    }

    pub fn select(&mut self, index: usize) {
        self.check_index(index);
        self.selection = Selection::At(index);
    }

    /// Selects `id`. An absent id clears the selection, which falls back to
    /// the first tab while any tabs remain.
    pub fn select_tab(&mut self, id: TabId) {
        self.selection = self.index_of(id).into();
        self.normalize();
    }

    pub fn get(&self, index: usize) -> &Tab {
        self.check_index(index);
        &self.tabs[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Tab {
        self.check_index(index);
        &mut self.tabs[index]
    }

    /// Appends `tab` and makes it current.
    pub fn add(&mut self, tab: Tab) {
        self.tabs.push(tab);
        self.selection = Selection::At(self.tabs.len() - 1);
    }

    /// Inserts without moving the selection index; callers that need the
    /// same logical tab to stay current must re-select it.
    pub fn insert(&mut self, tab: Tab, index: usize) {
        assert!(
            index <= self.tabs.len(),
            "insert index {} out of bounds for {} tabs",
            index,
            self.tabs.len()
        );
        self.tabs.insert(index, tab);
        self.normalize();
    }

    /// Inserts `tab` into the slot held by `after`, which shifts one place
    /// right. Like [`Self::insert`], the selection index does not move.
    ///
    /// # Panics
    /// If `after` is not in the model.
    pub fn insert_after(&mut self, tab: Tab, after: TabId) {
        let Some(index) = self.index_of(after) else {
            panic!("No index for tab {}", after);
        };
        self.insert(tab, index);
    }

    /// Moves the tab at `from` to `to`, keeping the same tab current.
    /// Returns false (and does nothing) when either index is out of bounds.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() || to >= self.tabs.len() {
            return false;
        }

        let previously_current = self.current_tab().map(|t| t.id);
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);

        if let Some(id) = previously_current {
            // A move never drops a tab, so the lookup always succeeds.
            self.selection = Selection::At(self.index_of(id).unwrap_or(0));
        }
        self.normalize();

        debug!("[Tabs] Moved tab {} -> {}", from, to);
        from != to
    }

    /// Rebuilds display order from `new_order`, keeping the same tab current.
    /// Tabs missing from `new_order` keep their relative order and are
    /// appended; unknown ids are ignored. Returns true if the order changed.
    pub fn reorder(&mut self, new_order: &[TabId]) -> bool {
        if self.tabs.is_empty() || new_order.is_empty() {
            return false;
        }

        let old_order: Vec<TabId> = self.tabs.iter().map(|t| t.id).collect();
        let previously_current = self.current_tab().map(|t| t.id);

        let mut tab_map: HashMap<TabId, Tab> = self.tabs.drain(..).map(|t| (t.id, t)).collect();

        let mut reordered = Vec::with_capacity(old_order.len());
        for id in new_order {
            if let Some(tab) = tab_map.remove(id) {
                reordered.push(tab);
            }
        }
        for id in &old_order {
            if let Some(tab) = tab_map.remove(id) {
                reordered.push(tab);
            }
        }

        let changed = reordered.iter().map(|t| t.id).ne(old_order.iter().copied());
        self.tabs = reordered;

        if let Some(id) = previously_current {
            self.selection = self.index_of(id).into();
        }
        self.normalize();

        debug!("[Tabs] Reorder requested for {} ids, changed: {}", new_order.len(), changed);
        changed
    }

    /// Removes the tab at `index` and returns it.
    ///
    /// The selection follows the same logical tab when an earlier tab goes
    /// away; removing the current tab selects the one before it (or the new
    /// first tab when it was first).
    pub fn remove(&mut self, index: usize) -> Tab {
        self.check_index(index);
        let tab = self.tabs.remove(index);

        if let Selection::At(current) = self.selection {
            if current != 0 && current >= index {
                self.selection = Selection::At(current - 1);
            }
        }
        self.normalize();
        tab
    }

    pub fn remove_tab(&mut self, id: TabId) -> Option<Tab> {
        let index = self.index_of(id)?;
        Some(self.remove(index))
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn clear_all(&mut self) {
        self.tabs.clear();
        self.normalize();
    }

    pub fn first_tab<P>(&self, mut predicate: P) -> Option<&Tab>
    where
        P: FnMut(&Tab) -> bool,
    {
        self.tabs.iter().find(|t| predicate(t))
    }

    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&Tab),
    {
        self.tabs.iter().for_each(visitor);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tab> {
        self.tabs.iter()
    }
}

impl<'a> IntoIterator for &'a TabsModel {
    type Item = &'a Tab;
    type IntoIter = std::slice::Iter<'a, Tab>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}
