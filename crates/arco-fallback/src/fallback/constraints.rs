//! Constraints the delegate does not accept.

use arco_core::{ModelError, ModelLike};
use arco_expr::{ConstraintIndex, ConstraintType, Function, FunctionShape, Modify, Set};

use super::UniversalFallback;

impl<M: ModelLike> UniversalFallback<M> {
    /// Store a canonical copy of `(function, set)` and hand out its index.
    ///
    /// Values the delegate already uses for this pair are skipped, so a
    /// pair whose support changed never shares an index across both sides.
    pub(super) fn add_fallback_constraint<F: Function, S: Set>(
        &mut self,
        function: F,
        set: S,
    ) -> Result<ConstraintIndex<F, S>, ModelError> {
        self.ensure_variables_exist(&function)?;
        let function = function.canonicalize();
        let inner = &self.inner;
        let index = self
            .allocator
            .allocate_unused::<F, S>(&function, |index| inner.contains_constraint(index.erase()));
        self.constraints.insert(index, function, set)?;
        tracing::debug!(
            component = "fallback",
            operation = "add_constraint",
            status = "success",
            constraint_type = %ConstraintType::of::<F, S>(),
            index = index.inner(),
            stored = self.constraints.len::<F, S>(),
            "Stored unsupported constraint"
        );
        Ok(index)
    }

    pub(super) fn fallback_entry<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<&(F, S), ModelError> {
        self.constraints
            .get(index)
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))
    }

    fn fallback_entry_mut<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
    ) -> Result<&mut (F, S), ModelError> {
        self.constraints
            .get_mut(index)
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))
    }

    pub(super) fn ensure_fallback_constraint<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<(), ModelError> {
        self.fallback_entry(index).map(|_| ())
    }

    /// Replace the stored function. Single-variable functions are fixed to
    /// the variable their index names.
    pub(super) fn set_fallback_function<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        function: F,
    ) -> Result<(), ModelError> {
        self.ensure_variables_exist(&function)?;
        let entry = self.fallback_entry_mut(index)?;
        entry.0 = function.canonicalize();
        Ok(())
    }

    pub(super) fn set_fallback_set<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        set: S,
    ) -> Result<(), ModelError> {
        let entry = self.fallback_entry_mut(index)?;
        entry.1 = set;
        Ok(())
    }

    pub(super) fn modify_fallback_constraint<F: Modify<C>, S: Set, C>(
        &mut self,
        index: ConstraintIndex<F, S>,
        change: &C,
    ) -> Result<(), ModelError> {
        let entry = self.fallback_entry_mut(index)?;
        entry.0 = entry.0.apply_modification(change)?;
        tracing::debug!(
            component = "fallback",
            operation = "modify_constraint",
            status = "success",
            constraint = %index.erase(),
            "Modified stored constraint"
        );
        Ok(())
    }

    pub(super) fn delete_fallback_constraint<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
    ) -> Result<(), ModelError> {
        self.constraints
            .remove(index)
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))?;
        self.names.remove(index.erase());
        tracing::debug!(
            component = "fallback",
            operation = "delete_constraint",
            status = "success",
            constraint = %index.erase(),
            "Deleted stored constraint"
        );
        Ok(())
    }
}

pub(super) fn ensure_function_replaceable<F: Function, S: Set>(
    index: ConstraintIndex<F, S>,
) -> Result<(), ModelError> {
    if F::SHAPE == FunctionShape::SingleVariable {
        Err(ModelError::SettingSingleVariableFunctionNotAllowed(
            index.erase(),
        ))
    } else {
        Ok(())
    }
}
