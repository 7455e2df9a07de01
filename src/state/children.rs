//! Child-list state for the parent dashboard.
//!
//! DESIGN
//! ======
//! The selected child decides whether the dashboard shows the list or that
//! child's timeline. Selection is an id so a list refresh never leaves a
//! stale copy behind.

#[cfg(test)]
#[path = "children_test.rs"]
mod children_test;

use crate::net::error::ApiError;
use crate::net::types::Child;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChildrenState {
    pub items: Vec<Child>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<i64>,
}

impl ChildrenState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list response. A selection whose child disappeared is cleared.
    pub fn apply_load(&mut self, result: Result<Vec<Child>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                if self.selected.is_some_and(|id| !self.items.iter().any(|c| c.id == id)) {
                    self.selected = None;
                }
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn push(&mut self, child: Child) {
        self.items.push(child);
    }

    /// Replace a child in place after an update.
    pub fn replace(&mut self, child: Child) {
        if let Some(slot) = self.items.iter_mut().find(|c| c.id == child.id) {
            *slot = child;
        }
    }

    pub fn remove(&mut self, child_id: i64) {
        self.items.retain(|c| c.id != child_id);
        if self.selected == Some(child_id) {
            self.selected = None;
        }
    }

    pub fn select(&mut self, child_id: Option<i64>) {
        self.selected = child_id;
    }

    pub fn selected_child(&self) -> Option<&Child> {
        let id = self.selected?;
        self.items.iter().find(|c| c.id == id)
    }
}
