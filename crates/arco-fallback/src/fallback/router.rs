use arco_core::{
    AttributeKey, ConstraintAttribute, ModelAttribute, ModelError, ModelLike, OptimizerAttribute,
    Sense, VariableAttribute,
};
use arco_expr::{
    AnyConstraintIndex, ConstraintIndex, ConstraintType, Function, Modify, Set, TypeKey,
    VariableIndex,
};

use super::UniversalFallback;
use super::constraints::ensure_function_replaceable;

/// Delegate results first, then fallback results not already listed.
fn merged<T: PartialEq>(mut delegate: Vec<T>, fallback: Vec<T>) -> Vec<T> {
    for item in fallback {
        if !delegate.contains(&item) {
            delegate.push(item);
        }
    }
    delegate
}

impl<M: ModelLike> ModelLike for UniversalFallback<M> {
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
            && self.constraints.is_empty()
            && !self.objective.is_set()
            && self.model_attributes.is_empty()
            && self.variable_attributes.is_empty()
            && self.constraint_attributes.is_empty()
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.constraints.clear();
        self.allocator.reset();
        self.names.clear();
        self.objective.clear();
        self.model_attributes.clear();
        self.variable_attributes.clear();
        self.constraint_attributes.clear();
        tracing::debug!(
            component = "fallback",
            operation = "reset",
            status = "success",
            "Reset fallback model"
        );
    }

    // ── Variables live in the delegate ──────────────────────

    fn add_variable(&mut self) -> VariableIndex {
        self.inner.add_variable()
    }

    fn add_variables(&mut self, count: usize) -> Vec<VariableIndex> {
        self.inner.add_variables(count)
    }

    fn is_valid_variable(&self, variable: VariableIndex) -> bool {
        self.inner.is_valid_variable(variable)
    }

    fn num_variables(&self) -> usize {
        self.inner.num_variables()
    }

    fn list_variables(&self) -> Vec<VariableIndex> {
        self.inner.list_variables()
    }

    fn delete_variables(&mut self, variables: &[VariableIndex]) -> Result<(), ModelError> {
        self.delete_variables_everywhere(variables)
    }

    fn variable_name(&self, variable: VariableIndex) -> Result<Option<String>, ModelError> {
        self.inner.variable_name(variable)
    }

    fn set_variable_name(
        &mut self,
        variable: VariableIndex,
        name: Option<String>,
    ) -> Result<(), ModelError> {
        self.inner.set_variable_name(variable, name)
    }

    fn variable_by_name(&self, name: &str) -> Result<Option<VariableIndex>, ModelError> {
        self.inner.variable_by_name(name)
    }

    // ── Constraints ─────────────────────────────────────────

    fn supports_constraint<F: Function, S: Set>(&self) -> bool {
        true
    }

    fn add_constraint<F: Function, S: Set>(
        &mut self,
        function: F,
        set: S,
    ) -> Result<ConstraintIndex<F, S>, ModelError> {
        if self.inner.supports_constraint::<F, S>() {
            tracing::trace!(
                component = "fallback",
                operation = "add_constraint",
                status = "forwarded",
                constraint_type = %ConstraintType::of::<F, S>(),
                "Forwarded constraint to delegate"
            );
            let index = self.inner.add_constraint(function, set)?;
            // A fallback constraint of this pair may have held the same index
            // before the delegate gained support for it.
            self.constraint_attributes.remove_index(index.erase());
            Ok(index)
        } else {
            self.add_fallback_constraint(function, set)
        }
    }

    fn is_valid_constraint<F: Function, S: Set>(&self, index: ConstraintIndex<F, S>) -> bool {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.is_valid_constraint(index)
        } else {
            self.constraints.contains(index)
        }
    }

    fn contains_constraint(&self, index: AnyConstraintIndex) -> bool {
        self.constraints.contains_any(index) || self.inner.contains_constraint(index)
    }

    fn delete_constraint<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
    ) -> Result<(), ModelError> {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.delete_constraint(index)?;
        } else {
            self.delete_fallback_constraint(index)?;
        }
        // Attributes the delegate rejected are kept here for either side.
        self.constraint_attributes.remove_index(index.erase());
        Ok(())
    }

    fn constraint_function<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<F, ModelError> {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.constraint_function(index)
        } else {
            self.fallback_entry(index).map(|(function, _)| function.clone())
        }
    }

    fn constraint_set<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<S, ModelError> {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.constraint_set(index)
        } else {
            self.fallback_entry(index).map(|(_, set)| set.clone())
        }
    }

    fn set_constraint_function<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        function: F,
    ) -> Result<(), ModelError> {
        ensure_function_replaceable(index)?;
        if self.inner.supports_constraint::<F, S>() {
            self.inner.set_constraint_function(index, function)
        } else {
            self.set_fallback_function(index, function)
        }
    }

    fn set_constraint_set<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        set: S,
    ) -> Result<(), ModelError> {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.set_constraint_set(index, set)
        } else {
            self.set_fallback_set(index, set)
        }
    }

    fn modify_constraint<F: Modify<C>, S: Set, C>(
        &mut self,
        index: ConstraintIndex<F, S>,
        change: &C,
    ) -> Result<(), ModelError> {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.modify_constraint(index, change)
        } else {
            self.modify_fallback_constraint(index, change)
        }
    }

    fn num_constraints<F: Function, S: Set>(&self) -> usize {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.num_constraints::<F, S>()
        } else {
            self.constraints.len::<F, S>()
        }
    }

    fn list_constraint_indices<F: Function, S: Set>(&self) -> Vec<ConstraintIndex<F, S>> {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.list_constraint_indices::<F, S>()
        } else {
            self.constraints.indices::<F, S>()
        }
    }

    fn list_constraint_types(&self) -> Vec<ConstraintType> {
        merged(
            self.inner.list_constraint_types(),
            self.constraints.constraint_types(),
        )
    }

    fn constraint_name<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<Option<String>, ModelError> {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.constraint_name(index)
        } else {
            self.ensure_fallback_constraint(index)?;
            Ok(self.names.get(index.erase()).map(str::to_string))
        }
    }

    fn set_constraint_name<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        name: Option<String>,
    ) -> Result<(), ModelError> {
        if self.inner.supports_constraint::<F, S>() {
            self.inner.set_constraint_name(index, name)
        } else {
            self.ensure_fallback_constraint(index)?;
            self.names.set(index.erase(), name);
            Ok(())
        }
    }

    /// A name held on both sides is ambiguous even if each side alone is
    /// unique.
    fn constraint_by_name(&self, name: &str) -> Result<Option<AnyConstraintIndex>, ModelError> {
        let delegate = self.inner.constraint_by_name(name)?;
        let fallback = self.names.lookup(name)?;
        match (delegate, fallback) {
            (Some(_), Some(_)) => Err(ModelError::DuplicateName(name.to_string())),
            (Some(index), None) | (None, Some(index)) => Ok(Some(index)),
            (None, None) => Ok(None),
        }
    }

    // ── Objective ───────────────────────────────────────────

    fn supports_objective<F: Function>(&self) -> bool {
        true
    }

    fn set_objective<F: Function>(&mut self, function: F) -> Result<(), ModelError> {
        if self.inner.supports_objective::<F>() {
            self.inner.set_objective(function)?;
            self.clear_fallback_objective();
            Ok(())
        } else {
            self.set_fallback_objective(function)
        }
    }

    fn objective<F: Function>(&self) -> Result<Option<F>, ModelError> {
        if self.objective.is_set() {
            self.objective.get::<F>()
        } else {
            self.inner.objective::<F>()
        }
    }

    fn objective_type(&self) -> Option<TypeKey> {
        self.objective
            .function_type()
            .or_else(|| self.inner.objective_type())
    }

    fn modify_objective<F: Modify<C>, C>(&mut self, change: &C) -> Result<(), ModelError> {
        if self.objective.is_set() {
            self.objective.modify::<F, C>(change)
        } else {
            self.inner.modify_objective::<F, C>(change)
        }
    }

    fn objective_sense(&self) -> Sense {
        self.inner.objective_sense()
    }

    fn set_objective_sense(&mut self, sense: Sense) -> Result<(), ModelError> {
        self.inner.set_objective_sense(sense)?;
        if sense == Sense::Feasibility {
            self.clear_fallback_objective();
        }
        Ok(())
    }

    // ── Attributes ──────────────────────────────────────────

    fn supports_optimizer_attribute<A: OptimizerAttribute>(&self, _attr: &A) -> bool {
        true
    }

    fn optimizer_attribute<A: OptimizerAttribute>(
        &self,
        attr: &A,
    ) -> Result<Option<A::Value>, ModelError> {
        if self.inner.supports_optimizer_attribute(attr) {
            self.inner.optimizer_attribute(attr)
        } else {
            self.optimizer_attributes.get(attr)
        }
    }

    fn set_optimizer_attribute<A: OptimizerAttribute>(
        &mut self,
        attr: &A,
        value: A::Value,
    ) -> Result<(), ModelError> {
        if self.inner.supports_optimizer_attribute(attr) {
            self.inner.set_optimizer_attribute(attr, value)
        } else {
            self.optimizer_attributes.set(attr, value);
            Ok(())
        }
    }

    fn list_optimizer_attributes_set(&self) -> Vec<AttributeKey> {
        merged(
            self.inner.list_optimizer_attributes_set(),
            self.optimizer_attributes.keys(),
        )
    }

    fn supports_model_attribute<A: ModelAttribute>(&self, _attr: &A) -> bool {
        true
    }

    fn model_attribute<A: ModelAttribute>(&self, attr: &A) -> Result<Option<A::Value>, ModelError> {
        if self.inner.supports_model_attribute(attr) {
            self.inner.model_attribute(attr)
        } else {
            self.model_attributes.get(attr)
        }
    }

    fn set_model_attribute<A: ModelAttribute>(
        &mut self,
        attr: &A,
        value: A::Value,
    ) -> Result<(), ModelError> {
        if self.inner.supports_model_attribute(attr) {
            self.inner.set_model_attribute(attr, value)
        } else {
            self.model_attributes.set(attr, value);
            Ok(())
        }
    }

    fn list_model_attributes_set(&self) -> Vec<AttributeKey> {
        merged(
            self.inner.list_model_attributes_set(),
            self.model_attributes.keys(),
        )
    }

    fn supports_variable_attribute<A: VariableAttribute>(&self, _attr: &A) -> bool {
        true
    }

    fn variable_attribute<A: VariableAttribute>(
        &self,
        attr: &A,
        variable: VariableIndex,
    ) -> Result<Option<A::Value>, ModelError> {
        if self.inner.supports_variable_attribute(attr) {
            self.inner.variable_attribute(attr, variable)
        } else {
            self.ensure_variable_exists(variable)?;
            self.variable_attributes.get(attr, variable)
        }
    }

    fn set_variable_attribute<A: VariableAttribute>(
        &mut self,
        attr: &A,
        variable: VariableIndex,
        value: A::Value,
    ) -> Result<(), ModelError> {
        if self.inner.supports_variable_attribute(attr) {
            self.inner.set_variable_attribute(attr, variable, value)
        } else {
            self.ensure_variable_exists(variable)?;
            self.variable_attributes.set(attr, variable, value);
            Ok(())
        }
    }

    fn list_variable_attributes_set(&self) -> Vec<AttributeKey> {
        merged(
            self.inner.list_variable_attributes_set(),
            self.variable_attributes.keys(),
        )
    }

    fn supports_constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &self,
        _attr: &A,
    ) -> bool {
        true
    }

    fn constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &self,
        attr: &A,
        index: ConstraintIndex<F, S>,
    ) -> Result<Option<A::Value>, ModelError> {
        if self.inner.supports_constraint_attribute::<A, F, S>(attr) {
            self.inner.constraint_attribute(attr, index)
        } else {
            self.ensure_constraint_exists(index)?;
            self.constraint_attributes.get(attr, index.erase())
        }
    }

    fn set_constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &mut self,
        attr: &A,
        index: ConstraintIndex<F, S>,
        value: A::Value,
    ) -> Result<(), ModelError> {
        if self.inner.supports_constraint_attribute::<A, F, S>(attr) {
            self.inner.set_constraint_attribute(attr, index, value)
        } else {
            self.ensure_constraint_exists(index)?;
            self.constraint_attributes.set(attr, index.erase(), value);
            Ok(())
        }
    }

    fn list_constraint_attributes_set<F: Function, S: Set>(&self) -> Vec<AttributeKey> {
        merged(
            self.inner.list_constraint_attributes_set::<F, S>(),
            self.constraint_attributes
                .keys_where(|index| index.is::<F, S>()),
        )
    }
}

impl<M: ModelLike> UniversalFallback<M> {
    /// The constraint exists on whichever side serves its pair.
    fn ensure_constraint_exists<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<(), ModelError> {
        if self.is_valid_constraint(index) {
            Ok(())
        } else {
            Err(ModelError::InvalidConstraintIndex(index.erase()))
        }
    }
}
