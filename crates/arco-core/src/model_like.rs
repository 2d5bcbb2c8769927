//! The operation set shared by every model and model decorator.

use arco_expr::{
    AnyConstraintIndex, ConstraintIndex, ConstraintType, Function, Modify, Set, SingleVariable,
    TypeKey, VariableIndex, VectorOfVariables,
};

use crate::attributes::{
    AttributeKey, ConstraintAttribute, ModelAttribute, OptimizerAttribute, VariableAttribute,
};
use crate::error::ModelError;
use crate::types::Sense;

/// A model that stores variables, constraints, an objective, and attributes.
///
/// Support queries take reified function, set, and attribute types and must
/// be answered from the model's current configuration; callers ask them
/// before each operation and never cache the answer.
///
/// Optional values (names, attributes, objectives) come back as
/// `Ok(None)` when unset. Invalid indices and structural violations are
/// errors.
pub trait ModelLike {
    /// True when the model holds no variables, constraints, objective, or
    /// model-level attributes. Optimizer attributes are ignored.
    fn is_empty(&self) -> bool;

    /// Drop everything except optimizer attributes.
    fn reset(&mut self);

    // ── Variables ───────────────────────────────────────────

    fn add_variable(&mut self) -> VariableIndex;

    fn add_variables(&mut self, count: usize) -> Vec<VariableIndex> {
        (0..count).map(|_| self.add_variable()).collect()
    }

    fn is_valid_variable(&self, variable: VariableIndex) -> bool;

    fn num_variables(&self) -> usize;

    fn list_variables(&self) -> Vec<VariableIndex>;

    fn delete_variable(&mut self, variable: VariableIndex) -> Result<(), ModelError> {
        self.delete_variables(&[variable])
    }

    /// Delete a batch of variables and cascade into everything that
    /// references them.
    ///
    /// Constraints of the single-variable shape on a deleted variable are
    /// deleted. Vector-of-variables constraints whose variables equal the
    /// batch (order included) are deleted; others shrink if their set can
    /// change dimension, otherwise the whole call fails with
    /// [`ModelError::UnsupportedVariableRemoval`] before anything changes.
    fn delete_variables(&mut self, variables: &[VariableIndex]) -> Result<(), ModelError>;

    fn variable_name(&self, variable: VariableIndex) -> Result<Option<String>, ModelError>;

    /// `None` or an empty name clears the name.
    fn set_variable_name(
        &mut self,
        variable: VariableIndex,
        name: Option<String>,
    ) -> Result<(), ModelError>;

    fn variable_by_name(&self, name: &str) -> Result<Option<VariableIndex>, ModelError>;

    // ── Constrained variables ───────────────────────────────

    /// Add a variable and constrain it to `set` in one step.
    fn add_constrained_variable<S: Set>(
        &mut self,
        set: S,
    ) -> Result<(VariableIndex, ConstraintIndex<SingleVariable, S>), ModelError> {
        let variable = self.add_variable();
        let index = self.add_constraint(SingleVariable::new(variable), set)?;
        Ok((variable, index))
    }

    /// Add `set.dimension()` variables and constrain them jointly to `set`.
    fn add_constrained_variables<S: Set>(
        &mut self,
        set: S,
    ) -> Result<(Vec<VariableIndex>, ConstraintIndex<VectorOfVariables, S>), ModelError> {
        let variables = self.add_variables(set.dimension());
        let index = self.add_constraint(VectorOfVariables::new(variables.clone()), set)?;
        Ok((variables, index))
    }

    // ── Constraints ─────────────────────────────────────────

    fn supports_constraint<F: Function, S: Set>(&self) -> bool;

    fn add_constraint<F: Function, S: Set>(
        &mut self,
        function: F,
        set: S,
    ) -> Result<ConstraintIndex<F, S>, ModelError>;

    fn is_valid_constraint<F: Function, S: Set>(&self, index: ConstraintIndex<F, S>) -> bool;

    /// Validity check for an index whose pair is only known at runtime.
    fn contains_constraint(&self, index: AnyConstraintIndex) -> bool;

    fn delete_constraint<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
    ) -> Result<(), ModelError>;

    fn delete_constraints<F: Function, S: Set>(
        &mut self,
        indices: &[ConstraintIndex<F, S>],
    ) -> Result<(), ModelError> {
        indices
            .iter()
            .try_for_each(|index| self.delete_constraint(*index))
    }

    fn constraint_function<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<F, ModelError>;

    fn constraint_set<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<S, ModelError>;

    /// Replace the function. Fails with
    /// [`ModelError::SettingSingleVariableFunctionNotAllowed`] for
    /// single-variable constraints.
    fn set_constraint_function<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        function: F,
    ) -> Result<(), ModelError>;

    fn set_constraint_set<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        set: S,
    ) -> Result<(), ModelError>;

    fn modify_constraint<F: Modify<C>, S: Set, C>(
        &mut self,
        index: ConstraintIndex<F, S>,
        change: &C,
    ) -> Result<(), ModelError>;

    fn num_constraints<F: Function, S: Set>(&self) -> usize;

    /// Indices of one pair in insertion order.
    fn list_constraint_indices<F: Function, S: Set>(&self) -> Vec<ConstraintIndex<F, S>>;

    /// Pairs with at least one constraint.
    fn list_constraint_types(&self) -> Vec<ConstraintType>;

    fn constraint_name<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<Option<String>, ModelError>;

    fn set_constraint_name<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        name: Option<String>,
    ) -> Result<(), ModelError>;

    /// Constraint holding `name`, of any pair.
    fn constraint_by_name(&self, name: &str) -> Result<Option<AnyConstraintIndex>, ModelError>;

    /// Like [`ModelLike::constraint_by_name`], but the hit must have pair
    /// `(F, S)`; any other pair is a [`ModelError::TypeMismatch`].
    fn typed_constraint_by_name<F: Function, S: Set>(
        &self,
        name: &str,
    ) -> Result<Option<ConstraintIndex<F, S>>, ModelError> {
        let Some(index) = self.constraint_by_name(name)? else {
            return Ok(None);
        };
        index.downcast::<F, S>().map(Some).ok_or_else(|| {
            ModelError::type_mismatch(ConstraintType::of::<F, S>(), index.constraint_type())
        })
    }

    // ── Objective ───────────────────────────────────────────

    fn supports_objective<F: Function>(&self) -> bool;

    fn set_objective<F: Function>(&mut self, function: F) -> Result<(), ModelError>;

    /// The objective as `F`; `Ok(None)` when none is set.
    fn objective<F: Function>(&self) -> Result<Option<F>, ModelError>;

    fn objective_type(&self) -> Option<TypeKey>;

    fn modify_objective<F: Modify<C>, C>(&mut self, change: &C) -> Result<(), ModelError>;

    fn objective_sense(&self) -> Sense;

    /// [`Sense::Feasibility`] discards the objective function.
    fn set_objective_sense(&mut self, sense: Sense) -> Result<(), ModelError>;

    // ── Optimizer attributes ────────────────────────────────

    fn supports_optimizer_attribute<A: OptimizerAttribute>(&self, attr: &A) -> bool;

    fn optimizer_attribute<A: OptimizerAttribute>(
        &self,
        attr: &A,
    ) -> Result<Option<A::Value>, ModelError>;

    fn set_optimizer_attribute<A: OptimizerAttribute>(
        &mut self,
        attr: &A,
        value: A::Value,
    ) -> Result<(), ModelError>;

    fn list_optimizer_attributes_set(&self) -> Vec<AttributeKey>;

    // ── Model attributes ────────────────────────────────────

    fn supports_model_attribute<A: ModelAttribute>(&self, attr: &A) -> bool;

    fn model_attribute<A: ModelAttribute>(&self, attr: &A) -> Result<Option<A::Value>, ModelError>;

    fn set_model_attribute<A: ModelAttribute>(
        &mut self,
        attr: &A,
        value: A::Value,
    ) -> Result<(), ModelError>;

    fn list_model_attributes_set(&self) -> Vec<AttributeKey>;

    // ── Variable attributes ─────────────────────────────────

    fn supports_variable_attribute<A: VariableAttribute>(&self, attr: &A) -> bool;

    fn variable_attribute<A: VariableAttribute>(
        &self,
        attr: &A,
        variable: VariableIndex,
    ) -> Result<Option<A::Value>, ModelError>;

    fn set_variable_attribute<A: VariableAttribute>(
        &mut self,
        attr: &A,
        variable: VariableIndex,
        value: A::Value,
    ) -> Result<(), ModelError>;

    fn list_variable_attributes_set(&self) -> Vec<AttributeKey>;

    // ── Constraint attributes ───────────────────────────────

    /// Whether `attr` can be stored on constraints of pair `(F, S)`.
    fn supports_constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &self,
        attr: &A,
    ) -> bool;

    fn constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &self,
        attr: &A,
        index: ConstraintIndex<F, S>,
    ) -> Result<Option<A::Value>, ModelError>;

    fn set_constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &mut self,
        attr: &A,
        index: ConstraintIndex<F, S>,
        value: A::Value,
    ) -> Result<(), ModelError>;

    /// Attributes set on at least one constraint of pair `(F, S)`.
    fn list_constraint_attributes_set<F: Function, S: Set>(&self) -> Vec<AttributeKey>;
}
