use arco_expr::{
    EqualTo, GreaterThan, LessThan, Nonnegatives, ScalarAffineFunction, SecondOrderCone,
    SingleVariable, VectorOfVariables,
};

use crate::attributes::{
    ConstraintMetadata, ModelName, Silent, TimeLimitSec, VariablePrimalStart,
};
use crate::model::Model;
use crate::support::Support;

/// Linear pairs, both variable-shaped cone pairs, and a few attributes.
pub(super) fn linear_support() -> Support {
    Support::new()
        .with_constraint::<ScalarAffineFunction, LessThan>()
        .with_constraint::<ScalarAffineFunction, EqualTo>()
        .with_constraint::<SingleVariable, GreaterThan>()
        .with_constraint::<SingleVariable, EqualTo>()
        .with_constraint::<VectorOfVariables, Nonnegatives>()
        .with_constraint::<VectorOfVariables, SecondOrderCone>()
        .with_objective::<ScalarAffineFunction>()
        .with_objective::<SingleVariable>()
        .with_optimizer_attribute::<Silent>()
        .with_optimizer_attribute::<TimeLimitSec>()
        .with_model_attribute::<ModelName>()
        .with_variable_attribute::<VariablePrimalStart>()
        .with_constraint_attribute::<ConstraintMetadata>()
}

pub(super) fn linear_model() -> Model {
    Model::with_support(linear_support())
}
