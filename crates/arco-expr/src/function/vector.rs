//! Vector affine functions: one affine expression per output row.

use std::collections::BTreeMap;

use crate::error::ExprError;
use crate::function::modification::{MultirowChange, VectorConstantChange};
use crate::function::{Function, Modify};
use crate::ids::VariableIndex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorAffineTerm {
    pub row: usize,
    pub variable: VariableIndex,
    pub coefficient: f64,
}

impl VectorAffineTerm {
    pub fn new(row: usize, variable: VariableIndex, coefficient: f64) -> Self {
        Self {
            row,
            variable,
            coefficient,
        }
    }
}

/// `A x + b`, stored as sparse terms plus one constant per row.
///
/// The output dimension is the number of constants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorAffineFunction {
    terms: Vec<VectorAffineTerm>,
    constants: Vec<f64>,
}

impl VectorAffineFunction {
    pub fn new(terms: Vec<VectorAffineTerm>, constants: Vec<f64>) -> Self {
        Self { terms, constants }
    }

    pub fn terms(&self) -> &[VectorAffineTerm] {
        &self.terms
    }

    pub fn constants(&self) -> &[f64] {
        &self.constants
    }
}

impl Function for VectorAffineFunction {
    fn canonicalize(&self) -> Self {
        let mut merged: BTreeMap<(usize, VariableIndex), f64> = BTreeMap::new();
        for term in &self.terms {
            if term.coefficient == 0.0 {
                continue;
            }
            *merged.entry((term.row, term.variable)).or_insert(0.0) += term.coefficient;
        }
        Self {
            terms: merged
                .into_iter()
                .filter(|(_, c)| *c != 0.0)
                .map(|((row, variable), coefficient)| {
                    VectorAffineTerm::new(row, variable, coefficient)
                })
                .collect(),
            constants: self.constants.clone(),
        }
    }

    fn variables(&self) -> Vec<VariableIndex> {
        self.terms.iter().map(|t| t.variable).collect()
    }

    fn remove_variable(&self, variable: VariableIndex) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .copied()
                .filter(|t| t.variable != variable)
                .collect(),
            constants: self.constants.clone(),
        }
    }

    fn output_dimension(&self) -> usize {
        self.constants.len()
    }
}

impl Modify<VectorConstantChange> for VectorAffineFunction {
    fn apply_modification(&self, change: &VectorConstantChange) -> Result<Self, ExprError> {
        if change.new_constants.len() != self.constants.len() {
            return Err(ExprError::DimensionMismatch {
                expected: self.constants.len(),
                actual: change.new_constants.len(),
            });
        }
        Ok(Self {
            terms: self.terms.clone(),
            constants: change.new_constants.clone(),
        })
    }
}

impl Modify<MultirowChange> for VectorAffineFunction {
    fn apply_modification(&self, change: &MultirowChange) -> Result<Self, ExprError> {
        let dimension = self.constants.len();
        if let Some((row, _)) = change
            .new_coefficients
            .iter()
            .find(|(row, _)| *row >= dimension)
        {
            return Err(ExprError::RowOutOfBounds {
                row: *row,
                dimension,
            });
        }
        let mut terms: Vec<VectorAffineTerm> = self
            .terms
            .iter()
            .copied()
            .filter(|t| {
                t.variable != change.variable
                    || !change.new_coefficients.iter().any(|(row, _)| *row == t.row)
            })
            .collect();
        terms.extend(
            change
                .new_coefficients
                .iter()
                .filter(|(_, c)| *c != 0.0)
                .map(|(row, c)| VectorAffineTerm::new(*row, change.variable, *c)),
        );
        Ok(Self {
            terms,
            constants: self.constants.clone(),
        })
    }
}
