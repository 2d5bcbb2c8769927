//! Function modifications applied in place by models.

use crate::ids::VariableIndex;

/// Replace the constant of a scalar function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarConstantChange {
    pub new_constant: f64,
}

impl ScalarConstantChange {
    pub fn new(new_constant: f64) -> Self {
        Self { new_constant }
    }
}

/// Replace the coefficient of one variable in a scalar function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarCoefficientChange {
    pub variable: VariableIndex,
    pub new_coefficient: f64,
}

impl ScalarCoefficientChange {
    pub fn new(variable: VariableIndex, new_coefficient: f64) -> Self {
        Self {
            variable,
            new_coefficient,
        }
    }
}

/// Replace every constant of a vector function.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorConstantChange {
    pub new_constants: Vec<f64>,
}

impl VectorConstantChange {
    pub fn new(new_constants: Vec<f64>) -> Self {
        Self { new_constants }
    }
}

/// Replace the coefficients of one variable in selected rows of a vector function.
#[derive(Debug, Clone, PartialEq)]
pub struct MultirowChange {
    pub variable: VariableIndex,
    pub new_coefficients: Vec<(usize, f64)>,
}

impl MultirowChange {
    pub fn new(variable: VariableIndex, new_coefficients: Vec<(usize, f64)>) -> Self {
        Self {
            variable,
            new_coefficients,
        }
    }
}
