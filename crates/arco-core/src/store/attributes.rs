//! Attribute values keyed by [`AttributeKey`].

use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::attributes::{Attribute, AttributeKey};
use crate::error::ModelError;
use crate::store::erased::ErasedBox;

fn downcast<A: Attribute>(value: &ErasedBox, key: &AttributeKey) -> Result<A::Value, ModelError> {
    value
        .downcast_ref::<A::Value>()
        .cloned()
        .ok_or_else(|| ModelError::type_mismatch(std::any::type_name::<A::Value>(), key))
}

/// Values of optimizer or model attributes, one per key.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    values: IndexMap<AttributeKey, ErasedBox>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<A: Attribute>(&mut self, attr: &A, value: A::Value) {
        self.values.insert(attr.key(), ErasedBox::new(value));
    }

    /// Stored value, or `Ok(None)` when the attribute was never set.
    pub fn get<A: Attribute>(&self, attr: &A) -> Result<Option<A::Value>, ModelError> {
        let key = attr.key();
        self.values
            .get(&key)
            .map(|value| downcast::<A>(value, &key))
            .transpose()
    }

    /// Keys in first-set order.
    pub fn keys(&self) -> Vec<AttributeKey> {
        self.values.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Values of per-index attributes (variables or constraints).
///
/// A key disappears once its last index is removed.
#[derive(Debug, Clone)]
pub struct IndexedAttributeStore<I> {
    values: IndexMap<AttributeKey, HashMap<I, ErasedBox>>,
}

impl<I> Default for IndexedAttributeStore<I> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<I: Copy + Eq + Hash> IndexedAttributeStore<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<A: Attribute>(&mut self, attr: &A, index: I, value: A::Value) {
        self.values
            .entry(attr.key())
            .or_default()
            .insert(index, ErasedBox::new(value));
    }

    pub fn get<A: Attribute>(&self, attr: &A, index: I) -> Result<Option<A::Value>, ModelError> {
        let key = attr.key();
        self.values
            .get(&key)
            .and_then(|by_index| by_index.get(&index))
            .map(|value| downcast::<A>(value, &key))
            .transpose()
    }

    /// Drop every attribute value of `index`.
    pub fn remove_index(&mut self, index: I) {
        self.retain_indices(|candidate| candidate != index);
    }

    pub fn remove_indices(&mut self, indices: &[I]) {
        if indices.is_empty() {
            return;
        }
        self.retain_indices(|candidate| !indices.contains(&candidate));
    }

    pub fn retain_indices(&mut self, mut keep: impl FnMut(I) -> bool) {
        for by_index in self.values.values_mut() {
            by_index.retain(|index, _| keep(*index));
        }
        self.values.retain(|_, by_index| !by_index.is_empty());
    }

    /// Keys with at least one value, in first-set order.
    pub fn keys(&self) -> Vec<AttributeKey> {
        self.values.keys().cloned().collect()
    }

    /// Keys with at least one value on an index satisfying `pred`.
    pub fn keys_where(&self, mut pred: impl FnMut(I) -> bool) -> Vec<AttributeKey> {
        self.values
            .iter()
            .filter(|(_, by_index)| by_index.keys().any(|index| pred(*index)))
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
