use arco_expr::{
    AnyConstraintIndex, ConstraintIndex, ConstraintType, Function, FunctionShape, Modify, Set,
    TypeKey, VariableIndex,
};

use crate::attributes::{
    Attribute, AttributeKey, ConstraintAttribute, ModelAttribute, OptimizerAttribute,
    VariableAttribute,
};
use crate::error::ModelError;
use crate::model::Model;
use crate::model_like::ModelLike;
use crate::types::Sense;

impl ModelLike for Model {
    fn is_empty(&self) -> bool {
        self.variables.is_empty()
            && self.constraints.is_empty()
            && !self.objective.is_set()
            && self.sense == Sense::Feasibility
            && self.model_attributes.is_empty()
    }

    fn reset(&mut self) {
        self.variables.clear();
        self.next_variable = 1;
        self.variable_names.clear();
        self.constraints.clear();
        self.allocator.reset();
        self.constraint_names.clear();
        self.objective.clear();
        self.sense = Sense::default();
        self.model_attributes.clear();
        self.variable_attributes.clear();
        self.constraint_attributes.clear();
        tracing::debug!(
            component = "model",
            operation = "reset",
            status = "success",
            "Reset model"
        );
    }

    fn add_variable(&mut self) -> VariableIndex {
        let variable = VariableIndex::new(self.next_variable);
        self.next_variable += 1;
        self.variables.insert(variable);
        variable
    }

    fn is_valid_variable(&self, variable: VariableIndex) -> bool {
        self.variables.contains(&variable)
    }

    fn num_variables(&self) -> usize {
        self.variables.len()
    }

    fn list_variables(&self) -> Vec<VariableIndex> {
        self.variables.iter().copied().collect()
    }

    fn delete_variables(&mut self, variables: &[VariableIndex]) -> Result<(), ModelError> {
        for variable in variables {
            self.ensure_variable_exists(*variable)?;
        }
        self.constraints.check_variable_removal(variables)?;

        for variable in variables {
            self.variables.remove(variable);
        }
        self.variable_names
            .retain(|variable| !variables.contains(&variable));
        self.variable_attributes.remove_indices(variables);
        let objective_dropped = self.objective.remove_variables(variables);
        let deleted = self.constraints.remove_variables(variables);
        self.constraint_names.retain(|index| !deleted.contains(&index));
        self.constraint_attributes.remove_indices(&deleted);

        tracing::debug!(
            component = "model",
            operation = "delete_variables",
            status = "success",
            variables = variables.len(),
            constraints_deleted = deleted.len(),
            objective_dropped,
            "Deleted variables"
        );
        Ok(())
    }

    fn variable_name(&self, variable: VariableIndex) -> Result<Option<String>, ModelError> {
        self.ensure_variable_exists(variable)?;
        Ok(self.variable_names.get(variable).map(str::to_string))
    }

    fn set_variable_name(
        &mut self,
        variable: VariableIndex,
        name: Option<String>,
    ) -> Result<(), ModelError> {
        self.ensure_variable_exists(variable)?;
        self.variable_names.set(variable, name);
        Ok(())
    }

    fn variable_by_name(&self, name: &str) -> Result<Option<VariableIndex>, ModelError> {
        self.variable_names.lookup(name)
    }

    fn supports_constraint<F: Function, S: Set>(&self) -> bool {
        self.support.constraint::<F, S>()
    }

    fn add_constraint<F: Function, S: Set>(
        &mut self,
        function: F,
        set: S,
    ) -> Result<ConstraintIndex<F, S>, ModelError> {
        if !self.support.constraint::<F, S>() {
            return Err(ModelError::UnsupportedConstraint(ConstraintType::of::<F, S>()));
        }
        self.ensure_variables_exist(&function)?;

        let index = self.allocator.allocate::<F, S>(&function);
        self.constraints.insert(index, function, set)?;
        tracing::debug!(
            component = "model",
            operation = "add_constraint",
            status = "success",
            constraint_type = %ConstraintType::of::<F, S>(),
            index = index.inner(),
            "Added constraint"
        );
        Ok(index)
    }

    fn is_valid_constraint<F: Function, S: Set>(&self, index: ConstraintIndex<F, S>) -> bool {
        self.constraints.contains(index)
    }

    fn contains_constraint(&self, index: AnyConstraintIndex) -> bool {
        self.constraints.contains_any(index)
    }

    fn delete_constraint<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
    ) -> Result<(), ModelError> {
        self.constraints
            .remove(index)
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))?;
        self.constraint_names.remove(index.erase());
        self.constraint_attributes.remove_index(index.erase());
        tracing::debug!(
            component = "model",
            operation = "delete_constraint",
            status = "success",
            constraint = %index.erase(),
            "Deleted constraint"
        );
        Ok(())
    }

    fn constraint_function<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<F, ModelError> {
        self.constraints
            .get(index)
            .map(|(function, _)| function.clone())
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))
    }

    fn constraint_set<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<S, ModelError> {
        self.constraints
            .get(index)
            .map(|(_, set)| set.clone())
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))
    }

    fn set_constraint_function<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        function: F,
    ) -> Result<(), ModelError> {
        if F::SHAPE == FunctionShape::SingleVariable {
            return Err(ModelError::SettingSingleVariableFunctionNotAllowed(
                index.erase(),
            ));
        }
        self.ensure_variables_exist(&function)?;
        let entry = self
            .constraints
            .get_mut(index)
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))?;
        entry.0 = function;
        Ok(())
    }

    fn set_constraint_set<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        set: S,
    ) -> Result<(), ModelError> {
        let entry = self
            .constraints
            .get_mut(index)
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))?;
        entry.1 = set;
        Ok(())
    }

    fn modify_constraint<F: Modify<C>, S: Set, C>(
        &mut self,
        index: ConstraintIndex<F, S>,
        change: &C,
    ) -> Result<(), ModelError> {
        let entry = self
            .constraints
            .get_mut(index)
            .ok_or(ModelError::InvalidConstraintIndex(index.erase()))?;
        entry.0 = entry.0.apply_modification(change)?;
        Ok(())
    }

    fn num_constraints<F: Function, S: Set>(&self) -> usize {
        self.constraints.len::<F, S>()
    }

    fn list_constraint_indices<F: Function, S: Set>(&self) -> Vec<ConstraintIndex<F, S>> {
        self.constraints.indices::<F, S>()
    }

    fn list_constraint_types(&self) -> Vec<ConstraintType> {
        self.constraints.constraint_types()
    }

    fn constraint_name<F: Function, S: Set>(
        &self,
        index: ConstraintIndex<F, S>,
    ) -> Result<Option<String>, ModelError> {
        self.ensure_constraint_exists(index)?;
        Ok(self
            .constraint_names
            .get(index.erase())
            .map(str::to_string))
    }

    fn set_constraint_name<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        name: Option<String>,
    ) -> Result<(), ModelError> {
        self.ensure_constraint_exists(index)?;
        self.constraint_names.set(index.erase(), name);
        Ok(())
    }

    fn constraint_by_name(&self, name: &str) -> Result<Option<AnyConstraintIndex>, ModelError> {
        self.constraint_names.lookup(name)
    }

    fn supports_objective<F: Function>(&self) -> bool {
        self.support.objective::<F>()
    }

    fn set_objective<F: Function>(&mut self, function: F) -> Result<(), ModelError> {
        if !self.support.objective::<F>() {
            return Err(ModelError::UnsupportedObjective(TypeKey::of::<F>()));
        }
        self.ensure_variables_exist(&function)?;
        self.objective.set(function);
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            function_type = %TypeKey::of::<F>(),
            sense = self.sense.as_str(),
            "Set objective function"
        );
        Ok(())
    }

    fn objective<F: Function>(&self) -> Result<Option<F>, ModelError> {
        self.objective.get::<F>()
    }

    fn objective_type(&self) -> Option<TypeKey> {
        self.objective.function_type()
    }

    fn modify_objective<F: Modify<C>, C>(&mut self, change: &C) -> Result<(), ModelError> {
        self.objective.modify::<F, C>(change)
    }

    fn objective_sense(&self) -> Sense {
        self.sense
    }

    fn set_objective_sense(&mut self, sense: Sense) -> Result<(), ModelError> {
        self.sense = sense;
        if sense == Sense::Feasibility {
            self.objective.clear();
        }
        tracing::debug!(
            component = "model",
            operation = "set_objective_sense",
            status = "success",
            sense = sense.as_str(),
            "Set objective sense"
        );
        Ok(())
    }

    fn supports_optimizer_attribute<A: OptimizerAttribute>(&self, _attr: &A) -> bool {
        self.support.optimizer_attribute::<A>()
    }

    fn optimizer_attribute<A: OptimizerAttribute>(
        &self,
        attr: &A,
    ) -> Result<Option<A::Value>, ModelError> {
        ensure_supported(self.support.optimizer_attribute::<A>(), attr)?;
        self.optimizer_attributes.get(attr)
    }

    fn set_optimizer_attribute<A: OptimizerAttribute>(
        &mut self,
        attr: &A,
        value: A::Value,
    ) -> Result<(), ModelError> {
        ensure_supported(self.support.optimizer_attribute::<A>(), attr)?;
        self.optimizer_attributes.set(attr, value);
        Ok(())
    }

    fn list_optimizer_attributes_set(&self) -> Vec<AttributeKey> {
        self.optimizer_attributes.keys()
    }

    fn supports_model_attribute<A: ModelAttribute>(&self, _attr: &A) -> bool {
        self.support.model_attribute::<A>()
    }

    fn model_attribute<A: ModelAttribute>(&self, attr: &A) -> Result<Option<A::Value>, ModelError> {
        ensure_supported(self.support.model_attribute::<A>(), attr)?;
        self.model_attributes.get(attr)
    }

    fn set_model_attribute<A: ModelAttribute>(
        &mut self,
        attr: &A,
        value: A::Value,
    ) -> Result<(), ModelError> {
        ensure_supported(self.support.model_attribute::<A>(), attr)?;
        self.model_attributes.set(attr, value);
        Ok(())
    }

    fn list_model_attributes_set(&self) -> Vec<AttributeKey> {
        self.model_attributes.keys()
    }

    fn supports_variable_attribute<A: VariableAttribute>(&self, _attr: &A) -> bool {
        self.support.variable_attribute::<A>()
    }

    fn variable_attribute<A: VariableAttribute>(
        &self,
        attr: &A,
        variable: VariableIndex,
    ) -> Result<Option<A::Value>, ModelError> {
        ensure_supported(self.support.variable_attribute::<A>(), attr)?;
        self.ensure_variable_exists(variable)?;
        self.variable_attributes.get(attr, variable)
    }

    fn set_variable_attribute<A: VariableAttribute>(
        &mut self,
        attr: &A,
        variable: VariableIndex,
        value: A::Value,
    ) -> Result<(), ModelError> {
        ensure_supported(self.support.variable_attribute::<A>(), attr)?;
        self.ensure_variable_exists(variable)?;
        self.variable_attributes.set(attr, variable, value);
        Ok(())
    }

    fn list_variable_attributes_set(&self) -> Vec<AttributeKey> {
        self.variable_attributes.keys()
    }

    fn supports_constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &self,
        _attr: &A,
    ) -> bool {
        self.support.constraint::<F, S>() && self.support.constraint_attribute::<A>()
    }

    fn constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &self,
        attr: &A,
        index: ConstraintIndex<F, S>,
    ) -> Result<Option<A::Value>, ModelError> {
        ensure_supported(self.supports_constraint_attribute::<A, F, S>(attr), attr)?;
        self.ensure_constraint_exists(index)?;
        self.constraint_attributes.get(attr, index.erase())
    }

    fn set_constraint_attribute<A: ConstraintAttribute, F: Function, S: Set>(
        &mut self,
        attr: &A,
        index: ConstraintIndex<F, S>,
        value: A::Value,
    ) -> Result<(), ModelError> {
        ensure_supported(self.supports_constraint_attribute::<A, F, S>(attr), attr)?;
        self.ensure_constraint_exists(index)?;
        self.constraint_attributes.set(attr, index.erase(), value);
        Ok(())
    }

    fn list_constraint_attributes_set<F: Function, S: Set>(&self) -> Vec<AttributeKey> {
        self.constraint_attributes
            .keys_where(|index| index.is::<F, S>())
    }
}

fn ensure_supported<A: Attribute>(supported: bool, attr: &A) -> Result<(), ModelError> {
    if supported {
        Ok(())
    } else {
        Err(ModelError::UnsupportedAttribute(attr.key()))
    }
}
