//! Scalar affine functions: linear terms + constant.

use std::collections::BTreeMap;

use crate::error::ExprError;
use crate::function::modification::{ScalarCoefficientChange, ScalarConstantChange};
use crate::function::{Function, Modify};
use crate::ids::VariableIndex;

/// One `coefficient * variable` term.
pub type ScalarAffineTerm = (VariableIndex, f64);

/// `sum(coefficient_i * x_i) + constant`.
///
/// Terms are stored as given; duplicates and zero coefficients survive until
/// [`Function::canonicalize`] is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalarAffineFunction {
    terms: Vec<ScalarAffineTerm>,
    constant: f64,
}

impl ScalarAffineFunction {
    // ── Constructors ────────────────────────────────────────

    pub fn new(terms: Vec<ScalarAffineTerm>, constant: f64) -> Self {
        Self { terms, constant }
    }

    /// Just a constant, no variable terms.
    pub fn from_constant(constant: f64) -> Self {
        Self {
            constant,
            ..Default::default()
        }
    }

    /// Single term: coeff * var.
    pub fn term(variable: VariableIndex, coeff: f64) -> Self {
        if coeff == 0.0 {
            return Self::default();
        }
        Self {
            terms: vec![(variable, coeff)],
            constant: 0.0,
        }
    }

    /// Single variable with coefficient 1.0.
    pub fn var(variable: VariableIndex) -> Self {
        Self::term(variable, 1.0)
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn terms(&self) -> &[ScalarAffineTerm] {
        &self.terms
    }

    /// Summed coefficient of `variable` across all its terms.
    pub fn coefficient(&self, variable: VariableIndex) -> f64 {
        self.terms
            .iter()
            .filter(|(v, _)| *v == variable)
            .map(|(_, c)| *c)
            .sum()
    }
}

impl Function for ScalarAffineFunction {
    /// Merges duplicate variables, sorts by variable, and drops zero
    /// coefficients.
    fn canonicalize(&self) -> Self {
        let mut merged: BTreeMap<VariableIndex, f64> = BTreeMap::new();
        for (variable, coeff) in &self.terms {
            *merged.entry(*variable).or_insert(0.0) += *coeff;
        }
        Self {
            terms: merged.into_iter().filter(|(_, c)| *c != 0.0).collect(),
            constant: self.constant,
        }
    }

    fn variables(&self) -> Vec<VariableIndex> {
        self.terms.iter().map(|(v, _)| *v).collect()
    }

    fn remove_variable(&self, variable: VariableIndex) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .copied()
                .filter(|(v, _)| *v != variable)
                .collect(),
            constant: self.constant,
        }
    }

    fn remove_variables(&self, variables: &[VariableIndex]) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .copied()
                .filter(|(v, _)| !variables.contains(v))
                .collect(),
            constant: self.constant,
        }
    }
}

impl Modify<ScalarConstantChange> for ScalarAffineFunction {
    fn apply_modification(&self, change: &ScalarConstantChange) -> Result<Self, ExprError> {
        Ok(Self {
            terms: self.terms.clone(),
            constant: change.new_constant,
        })
    }
}

impl Modify<ScalarCoefficientChange> for ScalarAffineFunction {
    fn apply_modification(&self, change: &ScalarCoefficientChange) -> Result<Self, ExprError> {
        let mut terms: Vec<ScalarAffineTerm> = self
            .terms
            .iter()
            .copied()
            .filter(|(v, _)| *v != change.variable)
            .collect();
        if change.new_coefficient != 0.0 {
            terms.push((change.variable, change.new_coefficient));
        }
        Ok(Self {
            terms,
            constant: self.constant,
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn x() -> VariableIndex {
        VariableIndex::new(1)
    }

    fn y() -> VariableIndex {
        VariableIndex::new(2)
    }

    #[test]
    fn from_constant() {
        let f = ScalarAffineFunction::from_constant(5.0);
        assert_eq!(f.constant(), 5.0);
        assert!(f.terms().is_empty());
    }

    #[test]
    fn canonicalize_merges_sorts_and_drops_zeros() {
        let f = ScalarAffineFunction::new(
            vec![(y(), 4.0), (x(), 2.0), (x(), -2.0), (y(), 1.0)],
            1.5,
        );
        let canonical = f.canonicalize();
        assert_eq!(canonical.terms(), &[(y(), 5.0)]);
        assert_eq!(canonical.constant(), 1.5);
        assert_eq!(canonical.canonicalize(), canonical);
    }

    #[test]
    fn remove_variable_drops_every_term_of_it() {
        let f = ScalarAffineFunction::new(vec![(x(), 1.0), (y(), 2.0), (x(), 3.0)], 4.0);
        let removed = f.remove_variable(x());
        assert_eq!(removed.terms(), &[(y(), 2.0)]);
        assert_eq!(removed.constant(), 4.0);
    }

    #[test]
    fn coefficient_change_replaces_existing_terms() {
        let f = ScalarAffineFunction::new(vec![(x(), 1.0), (y(), 2.0), (x(), 3.0)], 0.0);
        let changed = f
            .apply_modification(&ScalarCoefficientChange::new(x(), 7.0))
            .unwrap();
        assert_eq!(changed.coefficient(x()), 7.0);
        assert_eq!(changed.coefficient(y()), 2.0);

        let dropped = f
            .apply_modification(&ScalarCoefficientChange::new(y(), 0.0))
            .unwrap();
        assert!(!dropped.references(y()));
    }

    #[test]
    fn constant_change_keeps_terms() {
        let f = ScalarAffineFunction::new(vec![(x(), 1.0)], 3.0);
        let changed = f
            .apply_modification(&ScalarConstantChange::new(-2.0))
            .unwrap();
        assert_eq!(changed.constant(), -2.0);
        assert_eq!(changed.terms(), f.terms());
    }
}
