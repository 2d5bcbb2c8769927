//! In-memory model with configurable capabilities.
//!
//! # Module Organization
//!
//! - `operations`: the [`ModelLike`](crate::ModelLike) implementation
//!
//! Storage is shared with model decorators through [`crate::store`].

mod operations;

use std::collections::BTreeSet;

use arco_expr::{AnyConstraintIndex, ConstraintIndex, Function, Set, VariableIndex};

use crate::error::ModelError;
use crate::store::{
    AttributeStore, ConstraintStore, IndexAllocator, IndexedAttributeStore, NameRegistry,
    ObjectiveSlot,
};
use crate::support::Support;
use crate::types::Sense;

/// A model that keeps everything it is given in memory.
///
/// Requests outside its [`Support`] fail with `UnsupportedConstraint`,
/// `UnsupportedObjective`, or `UnsupportedAttribute`. Variable indices start
/// at 1 and are never reused until [`ModelLike::reset`](crate::ModelLike::reset).
#[derive(Debug, Clone)]
pub struct Model {
    support: Support,
    variables: BTreeSet<VariableIndex>,
    next_variable: u32,
    variable_names: NameRegistry<VariableIndex>,
    constraints: ConstraintStore,
    allocator: IndexAllocator,
    constraint_names: NameRegistry<AnyConstraintIndex>,
    objective: ObjectiveSlot,
    sense: Sense,
    optimizer_attributes: AttributeStore,
    model_attributes: AttributeStore,
    variable_attributes: IndexedAttributeStore<VariableIndex>,
    constraint_attributes: IndexedAttributeStore<AnyConstraintIndex>,
}

impl Model {
    /// Create an empty model that supports nothing.
    pub fn new() -> Self {
        Self::with_support(Support::new())
    }

    /// Create an empty model with the given capabilities.
    pub fn with_support(support: Support) -> Self {
        Self {
            support,
            variables: BTreeSet::new(),
            next_variable: 1,
            variable_names: NameRegistry::new(),
            constraints: ConstraintStore::new(),
            allocator: IndexAllocator::new(),
            constraint_names: NameRegistry::new(),
            objective: ObjectiveSlot::new(),
            sense: Sense::default(),
            optimizer_attributes: AttributeStore::new(),
            model_attributes: AttributeStore::new(),
            variable_attributes: IndexedAttributeStore::new(),
            constraint_attributes: IndexedAttributeStore::new(),
        }
    }

    pub fn support(&self) -> &Support {
        &self.support
    }

    /// Replace the capabilities. Stored data is kept as is.
    pub fn set_support(&mut self, support: Support) {
        tracing::debug!(
            component = "model",
            operation = "set_support",
            status = "success",
            constraint_types = support.constraints.len(),
            objective_types = support.objectives.len(),
            "Updated model support"
        );
        self.support = support;
    }

    pub(crate) fn ensure_variable_exists(&self, variable: VariableIndex) -> Result<(), ModelError> {
        if self.variables.contains(&variable) {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableIndex(variable))
        }
    }

    pub(crate) fn ensure_variables_exist<F: Function>(
        &self,
        function: &F,
    ) -> Result<(), ModelError> {
        function
            .variables()
            .into_iter()
            .try_for_each(|variable| self.ensure_variable_exists(variable))
    }

    pub(crate) fn ensure_constraint_exists<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<(), ModelError> {
        if self.constraints.contains(index) {
            Ok(())
        } else {
            Err(ModelError::InvalidConstraintIndex(index.erase()))
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::model_like::ModelLike;

    mod attributes_objective;
    mod constraints;
    mod support;
    mod variables;

    #[test]
    fn test_new_model_is_empty() {
        let model = Model::new();
        assert!(model.is_empty());
        assert_eq!(model.num_variables(), 0);
        assert!(model.list_constraint_types().is_empty());
        assert!(model.support().is_empty());
    }

    #[test]
    fn test_variable_indices_start_at_one() {
        let mut model = Model::new();
        let x = model.add_variable();
        let y = model.add_variable();
        assert_eq!((x.inner(), y.inner()), (1, 2));
        assert!(!model.is_empty());
    }

    #[test]
    fn test_set_support_changes_answers() {
        let mut model = Model::new();
        assert!(!model.supports_objective::<arco_expr::ScalarAffineFunction>());
        model.set_support(Support::new().with_objective::<arco_expr::ScalarAffineFunction>());
        assert!(model.supports_objective::<arco_expr::ScalarAffineFunction>());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut model = Model::new();
        let x = model.add_variable();
        let copy = model.clone();
        model.delete_variable(x).unwrap();
        assert!(copy.is_valid_variable(x));
        assert!(!model.is_valid_variable(x));
    }
}
