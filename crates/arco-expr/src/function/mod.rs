//! Constraint and objective functions.
//!
//! - `variables`    — SingleVariable, VectorOfVariables
//! - `affine`       — ScalarAffineFunction: linear terms + constant
//! - `vector`       — VectorAffineFunction: rows of affine terms + constants
//! - `modification` — in-place changes applied through [`Modify`]

pub mod affine;
pub mod modification;
pub mod variables;
pub mod vector;

use std::fmt;

use crate::error::ExprError;
use crate::ids::VariableIndex;

pub use affine::{ScalarAffineFunction, ScalarAffineTerm};
pub use modification::{
    MultirowChange, ScalarCoefficientChange, ScalarConstantChange, VectorConstantChange,
};
pub use variables::{SingleVariable, VectorOfVariables};
pub use vector::{VectorAffineFunction, VectorAffineTerm};

/// Structural class of a function, used when a variable is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionShape {
    /// Exactly one variable; the constraint index equals the variable index.
    SingleVariable,
    /// A plain list of variables; removal shrinks the list.
    VectorOfVariables,
    /// Anything else; removal rewrites the expression.
    General,
}

/// A function that can appear in a constraint or objective.
pub trait Function: Clone + fmt::Debug + PartialEq + 'static {
    const SHAPE: FunctionShape = FunctionShape::General;

    /// Normal form: equal expressions have equal canonical values.
    fn canonicalize(&self) -> Self;

    /// Variables referenced by the function, in storage order.
    fn variables(&self) -> Vec<VariableIndex>;

    /// The variable this function is fixed to, for single-variable shapes.
    fn single_variable(&self) -> Option<VariableIndex> {
        None
    }

    /// Copy of the function with every occurrence of `variable` dropped.
    fn remove_variable(&self, variable: VariableIndex) -> Self;

    fn remove_variables(&self, variables: &[VariableIndex]) -> Self {
        variables
            .iter()
            .fold(self.clone(), |function, variable| {
                function.remove_variable(*variable)
            })
    }

    fn output_dimension(&self) -> usize {
        1
    }

    fn references(&self, variable: VariableIndex) -> bool {
        self.variables().contains(&variable)
    }
}

/// Application of a change of type `C` to a function.
pub trait Modify<C>: Function {
    fn apply_modification(&self, change: &C) -> Result<Self, ExprError>;
}
