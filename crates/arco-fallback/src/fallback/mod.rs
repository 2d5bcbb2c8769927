//! The [`UniversalFallback`] decorator.
//!
//! # Module Organization
//!
//! - `router`: the [`ModelLike`] implementation deciding, per call, whether
//!   the delegate or the fallback containers serve an operation
//! - `constraints`: fallback-side constraint storage
//! - `variables`: variable deletion cascade across the fallback containers
//! - `objective`: fallback objective slot kept in step with the delegate's sense

mod constraints;
mod objective;
mod router;
mod variables;

use arco_core::store::{
    AttributeStore, ConstraintStore, IndexAllocator, IndexedAttributeStore, NameRegistry,
    ObjectiveSlot,
};
use arco_core::{ModelError, ModelLike};
use arco_expr::{AnyConstraintIndex, Function, VariableIndex};

use crate::summary::{ConstraintCount, FallbackSummary};

/// Wraps a delegate model and accepts every constraint, objective, and
/// attribute on its behalf.
///
/// Before each operation the delegate is asked whether it supports the
/// function/set pair, objective type, or attribute involved. Supported
/// operations are forwarded untouched; everything else is kept in typed
/// containers owned by the decorator. Callers cannot tell which side served
/// a request.
///
/// Variables always live in the delegate. Deleting them walks both sides.
#[derive(Debug, Clone)]
pub struct UniversalFallback<M> {
    inner: M,
    constraints: ConstraintStore,
    allocator: IndexAllocator,
    names: NameRegistry<AnyConstraintIndex>,
    objective: ObjectiveSlot,
    optimizer_attributes: AttributeStore,
    model_attributes: AttributeStore,
    variable_attributes: IndexedAttributeStore<VariableIndex>,
    constraint_attributes: IndexedAttributeStore<AnyConstraintIndex>,
}

impl<M: ModelLike> UniversalFallback<M> {
    /// Wrap `inner` with empty fallback containers.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            constraints: ConstraintStore::new(),
            allocator: IndexAllocator::new(),
            names: NameRegistry::new(),
            objective: ObjectiveSlot::new(),
            optimizer_attributes: AttributeStore::new(),
            model_attributes: AttributeStore::new(),
            variable_attributes: IndexedAttributeStore::new(),
            constraint_attributes: IndexedAttributeStore::new(),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Mutable access to the delegate.
    ///
    /// Changes made here bypass the fallback bookkeeping; deleting variables
    /// through it leaves fallback constraints referencing them.
    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    /// Unwrap the delegate, dropping everything held out-of-band.
    pub fn into_inner(self) -> M {
        self.inner
    }

    /// What is currently held out-of-band.
    pub fn summary(&self) -> FallbackSummary {
        FallbackSummary {
            constraints: self
                .constraints
                .constraint_types()
                .into_iter()
                .map(|constraint_type| ConstraintCount {
                    function: constraint_type.function.short_name().to_string(),
                    set: constraint_type.set.short_name().to_string(),
                    count: self.constraints.len_of(constraint_type),
                })
                .collect(),
            named_constraints: self.names.len(),
            objective: self
                .objective
                .function_type()
                .map(|function| function.short_name().to_string()),
            optimizer_attributes: self
                .optimizer_attributes
                .keys()
                .iter()
                .map(ToString::to_string)
                .collect(),
            model_attributes: self
                .model_attributes
                .keys()
                .iter()
                .map(ToString::to_string)
                .collect(),
            variable_attributes: self
                .variable_attributes
                .keys()
                .iter()
                .map(ToString::to_string)
                .collect(),
            constraint_attributes: self
                .constraint_attributes
                .keys()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    fn ensure_variable_exists(&self, variable: VariableIndex) -> Result<(), ModelError> {
        if self.inner.is_valid_variable(variable) {
            Ok(())
        } else {
            Err(ModelError::InvalidVariableIndex(variable))
        }
    }

    /// Every variable referenced by `function` must exist in the delegate.
    fn ensure_variables_exist<F: Function>(&self, function: &F) -> Result<(), ModelError> {
        function
            .variables()
            .into_iter()
            .try_for_each(|variable| self.ensure_variable_exists(variable))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use arco_core::{Model, Support};
    use arco_expr::{LessThan, ScalarAffineFunction};

    mod routing;
    mod support;

    #[test]
    fn test_new_fallback_is_empty() {
        let model = UniversalFallback::new(Model::new());
        assert!(model.is_empty());
        assert_eq!(model.summary(), FallbackSummary::default());
    }

    #[test]
    fn test_accessors_expose_the_delegate() {
        let mut model = UniversalFallback::new(Model::new());
        model
            .inner_mut()
            .set_support(Support::new().with_constraint::<ScalarAffineFunction, LessThan>());
        assert!(model.inner().supports_constraint::<ScalarAffineFunction, LessThan>());

        let x = model.add_variable();
        let inner = model.into_inner();
        assert!(inner.is_valid_variable(x));
    }
}
