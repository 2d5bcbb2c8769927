//! Functions that are plain variable references.

use crate::function::{Function, FunctionShape};
use crate::ids::VariableIndex;

/// A single variable, `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingleVariable(VariableIndex);

impl SingleVariable {
    pub fn new(variable: VariableIndex) -> Self {
        Self(variable)
    }

    pub fn variable(self) -> VariableIndex {
        self.0
    }
}

impl From<VariableIndex> for SingleVariable {
    fn from(variable: VariableIndex) -> Self {
        Self(variable)
    }
}

impl Function for SingleVariable {
    const SHAPE: FunctionShape = FunctionShape::SingleVariable;

    fn canonicalize(&self) -> Self {
        *self
    }

    fn variables(&self) -> Vec<VariableIndex> {
        vec![self.0]
    }

    fn single_variable(&self) -> Option<VariableIndex> {
        Some(self.0)
    }

    // The function is structurally fixed to its variable; owners delete the
    // whole constraint instead of rewriting it.
    fn remove_variable(&self, _variable: VariableIndex) -> Self {
        *self
    }
}

/// An ordered list of variables, `[x1, x2, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VectorOfVariables(Vec<VariableIndex>);

impl VectorOfVariables {
    pub fn new(variables: Vec<VariableIndex>) -> Self {
        Self(variables)
    }

    pub fn as_slice(&self) -> &[VariableIndex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<VariableIndex>> for VectorOfVariables {
    fn from(variables: Vec<VariableIndex>) -> Self {
        Self(variables)
    }
}

impl Function for VectorOfVariables {
    const SHAPE: FunctionShape = FunctionShape::VectorOfVariables;

    fn canonicalize(&self) -> Self {
        self.clone()
    }

    fn variables(&self) -> Vec<VariableIndex> {
        self.0.clone()
    }

    fn remove_variable(&self, variable: VariableIndex) -> Self {
        Self(self.0.iter().copied().filter(|v| *v != variable).collect())
    }

    fn remove_variables(&self, variables: &[VariableIndex]) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|v| !variables.contains(v))
                .collect(),
        )
    }

    fn output_dimension(&self) -> usize {
        self.0.len()
    }
}
