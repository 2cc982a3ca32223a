//! Selection store for a fixed set of named checkboxes.
//!
//! The store owns one [`SelectionState`] snapshot. Every mutation builds a new snapshot
//! from the old one and swaps it in, so a failed mutation never touches the current one.

use std::collections::HashSet;

use serde::Serialize;
use shared::{domain::OptionLabel, error::SelectionError, protocol::CheckboxView};

/// Ordered mapping from every configured label to its selected flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    entries: Vec<(OptionLabel, bool)>,
}

impl SelectionState {
    fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(l, _)| l.as_str() == label)
    }

    /// Returns a copy with `label` flipped.
    pub fn toggled(&self, label: &str) -> Result<Self, SelectionError> {
        let idx = self
            .position(label)
            .ok_or_else(|| SelectionError::UnknownLabel(label.to_string()))?;
        let mut next = self.clone();
        next.entries[idx].1 = !next.entries[idx].1;
        Ok(next)
    }

    /// Returns a copy with every label set to `selected`.
    pub fn with_all(&self, selected: bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(label, _)| (label.clone(), selected))
                .collect(),
        }
    }

    pub fn get(&self, label: &str) -> Option<bool> {
        self.position(label).map(|idx| self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OptionLabel, bool)> + '_ {
        self.entries.iter().map(|(label, selected)| (label, *selected))
    }

    pub fn keys(&self) -> impl Iterator<Item = &OptionLabel> + '_ {
        self.entries.iter().map(|(label, _)| label)
    }

    pub fn selected(&self) -> impl Iterator<Item = &OptionLabel> + '_ {
        self.entries
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(label, _)| label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn checkboxes(&self) -> Vec<CheckboxView> {
        self.iter()
            .map(|(label, is_selected)| CheckboxView {
                label: label.clone(),
                is_selected,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct SelectionStore {
    state: SelectionState,
}

impl SelectionStore {
    /// Builds a store with every label deselected.
    ///
    /// Labels are expected to be unique. A repeated label collapses into the entry
    /// created by its first occurrence.
    pub fn new<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<OptionLabel>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for label in labels {
            let label = label.into();
            if seen.insert(label.clone()) {
                entries.push((label, false));
            }
        }
        Self {
            state: SelectionState { entries },
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Flips one label. Fails with [`SelectionError::UnknownLabel`] and leaves the
    /// state untouched when `label` was never configured.
    pub fn toggle(&mut self, label: &str) -> Result<&SelectionState, SelectionError> {
        self.state = self.state.toggled(label)?;
        Ok(&self.state)
    }

    pub fn set_all(&mut self, selected: bool) -> &SelectionState {
        self.state = self.state.with_all(selected);
        &self.state
    }

    pub fn select_all(&mut self) -> &SelectionState {
        self.set_all(true)
    }

    pub fn deselect_all(&mut self) -> &SelectionState {
        self.set_all(false)
    }

    /// Labels currently selected, in configured order.
    pub fn selected_labels(&self) -> Vec<&OptionLabel> {
        self.state.selected().collect()
    }

    pub fn is_selected(&self, label: &str) -> Result<bool, SelectionError> {
        self.state
            .get(label)
            .ok_or_else(|| SelectionError::UnknownLabel(label.to_string()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &OptionLabel> + '_ {
        self.state.keys()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn all_selected(&self) -> bool {
        self.state.iter().all(|(_, selected)| selected)
    }

    pub fn none_selected(&self) -> bool {
        self.state.iter().all(|(_, selected)| !selected)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
