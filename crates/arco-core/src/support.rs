//! Capability configuration for the in-memory [`crate::Model`].

use std::collections::HashSet;

use arco_expr::{ConstraintType, Function, Set, TypeKey};

use crate::attributes::{
    ConstraintAttribute, ModelAttribute, OptimizerAttribute, VariableAttribute,
};

/// The function/set pairs, objective types, and attribute kinds a model
/// accepts.
///
/// Attribute kinds are matched on their type alone, so supporting
/// `RawOptimizerAttribute` accepts every raw parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Support {
    pub constraints: HashSet<ConstraintType>,
    pub objectives: HashSet<TypeKey>,
    pub optimizer_attributes: HashSet<TypeKey>,
    pub model_attributes: HashSet<TypeKey>,
    pub variable_attributes: HashSet<TypeKey>,
    pub constraint_attributes: HashSet<TypeKey>,
}

impl Support {
    /// Support nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept constraints with function `F` in set `S`.
    pub fn with_constraint<F: Function, S: Set>(mut self) -> Self {
        self.constraints.insert(ConstraintType::of::<F, S>());
        self
    }

    /// Accept objectives of function type `F`.
    pub fn with_objective<F: Function>(mut self) -> Self {
        self.objectives.insert(TypeKey::of::<F>());
        self
    }

    pub fn with_optimizer_attribute<A: OptimizerAttribute>(mut self) -> Self {
        self.optimizer_attributes.insert(TypeKey::of::<A>());
        self
    }

    pub fn with_model_attribute<A: ModelAttribute>(mut self) -> Self {
        self.model_attributes.insert(TypeKey::of::<A>());
        self
    }

    pub fn with_variable_attribute<A: VariableAttribute>(mut self) -> Self {
        self.variable_attributes.insert(TypeKey::of::<A>());
        self
    }

    /// Accept `A` on constraints of every supported pair.
    pub fn with_constraint_attribute<A: ConstraintAttribute>(mut self) -> Self {
        self.constraint_attributes.insert(TypeKey::of::<A>());
        self
    }

    pub fn constraint<F: Function, S: Set>(&self) -> bool {
        self.constraints.contains(&ConstraintType::of::<F, S>())
    }

    pub fn objective<F: Function>(&self) -> bool {
        self.objectives.contains(&TypeKey::of::<F>())
    }

    pub fn optimizer_attribute<A: OptimizerAttribute>(&self) -> bool {
        self.optimizer_attributes.contains(&TypeKey::of::<A>())
    }

    pub fn model_attribute<A: ModelAttribute>(&self) -> bool {
        self.model_attributes.contains(&TypeKey::of::<A>())
    }

    pub fn variable_attribute<A: VariableAttribute>(&self) -> bool {
        self.variable_attributes.contains(&TypeKey::of::<A>())
    }

    pub fn constraint_attribute<A: ConstraintAttribute>(&self) -> bool {
        self.constraint_attributes.contains(&TypeKey::of::<A>())
    }

    /// Check if nothing is supported.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
            && self.objectives.is_empty()
            && self.optimizer_attributes.is_empty()
            && self.model_attributes.is_empty()
            && self.variable_attributes.is_empty()
            && self.constraint_attributes.is_empty()
    }
}
