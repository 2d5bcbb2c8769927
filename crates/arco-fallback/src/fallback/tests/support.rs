use arco_core::{ConstraintMetadata, Model, Silent, Support, VariablePrimalStart};
use arco_expr::{LessThan, ScalarAffineFunction};

use crate::UniversalFallback;

/// A delegate that only knows affine rows, affine objectives, and a few
/// attributes.
pub(super) fn narrow_support() -> Support {
    Support::new()
        .with_constraint::<ScalarAffineFunction, LessThan>()
        .with_objective::<ScalarAffineFunction>()
        .with_optimizer_attribute::<Silent>()
        .with_variable_attribute::<VariablePrimalStart>()
        .with_constraint_attribute::<ConstraintMetadata>()
}

pub(super) fn narrow_fallback() -> UniversalFallback<Model> {
    UniversalFallback::new(Model::with_support(narrow_support()))
}

