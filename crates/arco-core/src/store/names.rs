//! Index ↔ name bookkeeping with a lazily built reverse map.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameEntry<I> {
    Unique(I),
    Duplicate,
}

/// Names of indices of type `I`.
///
/// Setting a name never fails, even when another index already carries it;
/// the collision is only reported when the name is looked up. The reverse
/// map is rebuilt on the first lookup after any change.
#[derive(Clone)]
pub struct NameRegistry<I> {
    names: HashMap<I, String>,
    by_name: OnceCell<HashMap<String, NameEntry<I>>>,
}

impl<I> Default for NameRegistry<I> {
    fn default() -> Self {
        Self {
            names: HashMap::new(),
            by_name: OnceCell::new(),
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for NameRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameRegistry")
            .field("names", &self.names)
            .field("cached", &self.by_name.get().is_some())
            .finish()
    }
}

impl<I: Copy + Eq + Hash> NameRegistry<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `name` to `index`. `None` or an empty name clears it.
    pub fn set(&mut self, index: I, name: Option<String>) {
        match name {
            Some(name) if !name.is_empty() => {
                self.names.insert(index, name);
            }
            _ => {
                self.names.remove(&index);
            }
        }
        self.invalidate();
    }

    pub fn get(&self, index: I) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    pub fn remove(&mut self, index: I) -> Option<String> {
        let removed = self.names.remove(&index);
        if removed.is_some() {
            self.invalidate();
        }
        removed
    }

    /// Keep only names whose index satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(I) -> bool) {
        let before = self.names.len();
        self.names.retain(|index, _| keep(*index));
        if self.names.len() != before {
            self.invalidate();
        }
    }

    /// Resolve `name` to its index.
    ///
    /// Returns `Ok(None)` for unknown names and
    /// [`ModelError::DuplicateName`] when several indices share it.
    pub fn lookup(&self, name: &str) -> Result<Option<I>, ModelError> {
        let by_name = self.by_name.get_or_init(|| build_reverse(&self.names));
        match by_name.get(name) {
            None => Ok(None),
            Some(NameEntry::Unique(index)) => Ok(Some(*index)),
            Some(NameEntry::Duplicate) => Err(ModelError::DuplicateName(name.to_string())),
        }
    }

    pub fn invalidate(&mut self) {
        self.by_name.take();
    }

    pub fn is_cached(&self) -> bool {
        self.by_name.get().is_some()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
        self.invalidate();
    }
}

fn build_reverse<I: Copy + Eq + Hash>(names: &HashMap<I, String>) -> HashMap<String, NameEntry<I>> {
    let mut by_name = HashMap::with_capacity(names.len());
    for (index, name) in names {
        by_name
            .entry(name.clone())
            .and_modify(|entry| *entry = NameEntry::Duplicate)
            .or_insert(NameEntry::Unique(*index));
    }
    by_name
}
