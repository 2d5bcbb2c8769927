//! Heterogeneous constraint storage keyed by (function type, set type).

use std::any::Any;
use std::fmt;

use arco_expr::{
    AnyConstraintIndex, ConstraintIndex, ConstraintType, Function, FunctionShape, Set,
    VariableIndex,
};
use indexmap::IndexMap;

use crate::error::ModelError;

/// Object-safe view of one `(F, S)` category.
trait ConstraintCategory: fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn clone_box(&self) -> Box<dyn ConstraintCategory>;
    fn len(&self) -> usize;
    fn contains(&self, value: u32) -> bool;
    fn check_variable_removal(&self, variables: &[VariableIndex]) -> Result<(), ModelError>;
    fn remove_variables(&mut self, variables: &[VariableIndex]) -> Vec<u32>;
}

/// Constraints of one pair, in insertion order.
#[derive(Debug, Clone)]
struct Constraints<F, S> {
    entries: IndexMap<u32, (F, S)>,
}

impl<F, S> Constraints<F, S> {
    fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<F: Function, S: Set> ConstraintCategory for Constraints<F, S> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn ConstraintCategory> {
        Box::new(self.clone())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, value: u32) -> bool {
        self.entries.contains_key(&value)
    }

    fn check_variable_removal(&self, variables: &[VariableIndex]) -> Result<(), ModelError> {
        if F::SHAPE != FunctionShape::VectorOfVariables || S::SUPPORTS_DIMENSION_UPDATE {
            return Ok(());
        }
        for (value, (function, _)) in &self.entries {
            let referenced = function.variables();
            // The whole vector goes away with the constraint.
            if referenced.as_slice() == variables {
                continue;
            }
            if let Some(variable) = referenced.iter().find(|v| variables.contains(v)) {
                return Err(ModelError::UnsupportedVariableRemoval {
                    variable: *variable,
                    constraint: ConstraintIndex::<F, S>::new(*value).erase(),
                });
            }
        }
        Ok(())
    }

    fn remove_variables(&mut self, variables: &[VariableIndex]) -> Vec<u32> {
        let mut deleted = Vec::new();
        for (value, (function, set)) in self.entries.iter_mut() {
            let referenced = function.variables();
            if !referenced.iter().any(|v| variables.contains(v)) {
                continue;
            }
            match F::SHAPE {
                FunctionShape::SingleVariable => deleted.push(*value),
                FunctionShape::VectorOfVariables => {
                    let kept = referenced
                        .iter()
                        .filter(|v| !variables.contains(v))
                        .count();
                    if referenced.as_slice() == variables || kept == 0 {
                        deleted.push(*value);
                    } else {
                        *function = function.remove_variables(variables);
                        *set = set.update_dimension(kept);
                    }
                }
                FunctionShape::General => {
                    *function = function.remove_variables(variables);
                }
            }
        }
        if !deleted.is_empty() {
            self.entries.retain(|value, _| !deleted.contains(value));
        }
        deleted
    }
}

/// Every constraint of a model, grouped by (function type, set type).
///
/// Categories are created on first insert and enumerated in creation order;
/// constraints within a category are enumerated in insertion order, which
/// deletions preserve.
#[derive(Debug, Default)]
pub struct ConstraintStore {
    categories: IndexMap<ConstraintType, Box<dyn ConstraintCategory>>,
}

impl Clone for ConstraintStore {
    fn clone(&self) -> Self {
        Self {
            categories: self
                .categories
                .iter()
                .map(|(constraint_type, category)| (*constraint_type, (**category).clone_box()))
                .collect(),
        }
    }
}

impl ConstraintStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn category<F: Function, S: Set>(&self) -> Option<&Constraints<F, S>> {
        self.categories
            .get(&ConstraintType::of::<F, S>())
            .and_then(|category| category.as_any().downcast_ref::<Constraints<F, S>>())
    }

    fn category_mut<F: Function, S: Set>(&mut self) -> Option<&mut Constraints<F, S>> {
        self.categories
            .get_mut(&ConstraintType::of::<F, S>())
            .and_then(|category| category.as_any_mut().downcast_mut::<Constraints<F, S>>())
    }

    /// Store `(function, set)` under `index`, replacing any previous entry.
    pub fn insert<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
        function: F,
        set: S,
    ) -> Result<(), ModelError> {
        let constraint_type = ConstraintType::of::<F, S>();
        let category = self
            .categories
            .entry(constraint_type)
            .or_insert_with(|| Box::new(Constraints::<F, S>::new()));
        let constraints = category
            .as_any_mut()
            .downcast_mut::<Constraints<F, S>>()
            .ok_or_else(|| ModelError::type_mismatch(constraint_type, "foreign category"))?;
        constraints.entries.insert(index.inner(), (function, set));
        Ok(())
    }

    pub fn get<F: Function, S: Set>(&self, index: ConstraintIndex<F, S>) -> Option<&(F, S)> {
        self.category::<F, S>()
            .and_then(|constraints| constraints.entries.get(&index.inner()))
    }

    pub fn get_mut<F: Function, S: Set>(
        &mut self,
        index: ConstraintIndex<F, S>,
    ) -> Option<&mut (F, S)> {
        self.category_mut::<F, S>()
            .and_then(|constraints| constraints.entries.get_mut(&index.inner()))
    }

    pub fn contains<F: Function, S: Set>(&self, index: ConstraintIndex<F, S>) -> bool {
        self.get(index).is_some()
    }

    pub fn contains_any(&self, index: AnyConstraintIndex) -> bool {
        self.categories
            .get(&index.constraint_type())
            .is_some_and(|category| category.contains(index.inner()))
    }

    /// Remove one constraint, keeping the order of the others.
    pub fn remove<F: Function, S: Set>(&mut self, index: ConstraintIndex<F, S>) -> Option<(F, S)> {
        self.category_mut::<F, S>()
            .and_then(|constraints| constraints.entries.shift_remove(&index.inner()))
    }

    pub fn len<F: Function, S: Set>(&self) -> usize {
        self.category::<F, S>()
            .map_or(0, |constraints| constraints.entries.len())
    }

    pub fn indices<F: Function, S: Set>(&self) -> Vec<ConstraintIndex<F, S>> {
        self.category::<F, S>()
            .map(|constraints| {
                constraints
                    .entries
                    .keys()
                    .map(|value| ConstraintIndex::new(*value))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Pairs with at least one stored constraint, in first-insert order.
    pub fn constraint_types(&self) -> Vec<ConstraintType> {
        self.categories
            .iter()
            .filter(|(_, category)| category.len() > 0)
            .map(|(constraint_type, _)| *constraint_type)
            .collect()
    }

    /// Number of constraints of a pair known only at runtime.
    pub fn len_of(&self, constraint_type: ConstraintType) -> usize {
        self.categories
            .get(&constraint_type)
            .map_or(0, |category| category.len())
    }

    pub fn total_len(&self) -> usize {
        self.categories.values().map(|category| category.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Fails if removing `variables` would leave a constraint whose set
    /// cannot change dimension inconsistent. Does not mutate.
    pub fn check_variable_removal(&self, variables: &[VariableIndex]) -> Result<(), ModelError> {
        self.categories
            .values()
            .try_for_each(|category| category.check_variable_removal(variables))
    }

    /// Rewrite or delete every constraint that references `variables`.
    ///
    /// Single-variable constraints on a removed variable are deleted. Vector
    /// constraints are deleted when their variables equal `variables` exactly
    /// (or none survive) and shrunk otherwise. Other functions are rewritten.
    /// Returns the deleted constraints.
    pub fn remove_variables(&mut self, variables: &[VariableIndex]) -> Vec<AnyConstraintIndex> {
        let mut deleted = Vec::new();
        for (constraint_type, category) in self.categories.iter_mut() {
            deleted.extend(
                category
                    .remove_variables(variables)
                    .into_iter()
                    .map(|value| AnyConstraintIndex::new(*constraint_type, value)),
            );
        }
        deleted
    }
}
