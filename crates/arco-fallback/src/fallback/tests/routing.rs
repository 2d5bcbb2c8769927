use super::support::{narrow_fallback, narrow_support};
use super::*;
use arco_core::{
    Attribute, ConstraintDualStart, ConstraintMetadata, ConstraintPrimalStart, ModelName,
    RawOptimizerAttribute, Sense, Silent, Support, TimeLimitSec, VariableMetadata,
    VariablePrimalStart,
};
use arco_expr::{
    ConstraintType, EqualTo, GreaterThan, Nonnegatives, ScalarConstantChange, SingleVariable,
    TypeKey, VectorOfVariables,
};

#[test]
fn test_supported_pair_is_forwarded() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    let row = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(1.0))
        .unwrap();

    assert!(model.inner().is_valid_constraint(row));
    assert_eq!(model.num_constraints::<ScalarAffineFunction, LessThan>(), 1);
    assert!(model.summary().constraints.is_empty());
}

#[test]
fn test_unsupported_pair_is_stored_canonically() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    let y = model.add_variable();
    let function = ScalarAffineFunction::new(vec![(y, 1.0), (x, 2.0), (y, 1.0), (x, 0.0)], 1.0);
    let row = model
        .add_constraint(function.clone(), EqualTo::new(4.0))
        .unwrap();

    assert_eq!(
        model.inner().num_constraints::<ScalarAffineFunction, EqualTo>(),
        0
    );
    assert_eq!(model.num_constraints::<ScalarAffineFunction, EqualTo>(), 1);
    assert_eq!(model.constraint_function(row), Ok(function.canonicalize()));
    assert_eq!(
        model.constraint_function(row).unwrap().terms(),
        &[(x, 2.0), (y, 2.0)]
    );
    assert_eq!(model.constraint_set(row), Ok(EqualTo::new(4.0)));
}

#[test]
fn test_fallback_requires_known_variables() {
    let mut model = narrow_fallback();
    let missing = arco_expr::VariableIndex::new(5);
    assert_eq!(
        model.add_constraint(ScalarAffineFunction::var(missing), EqualTo::new(0.0)),
        Err(ModelError::InvalidVariableIndex(missing))
    );
    assert!(model.summary().is_empty());
}

#[test]
fn test_fallback_indices_are_shared_across_pairs() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    let a = model
        .add_constraint(ScalarAffineFunction::var(x), EqualTo::new(0.0))
        .unwrap();
    let b = model
        .add_constraint(ScalarAffineFunction::var(x), GreaterThan::new(0.0))
        .unwrap();
    model.delete_constraint(a).unwrap();
    let c = model
        .add_constraint(ScalarAffineFunction::var(x), EqualTo::new(1.0))
        .unwrap();

    assert_eq!((a.inner(), b.inner(), c.inner()), (1, 2, 3));
    assert!(!model.is_valid_constraint(a));
    assert_eq!(
        model.constraint_function(a),
        Err(ModelError::InvalidConstraintIndex(a.erase()))
    );
}

#[test]
fn test_constraint_types_are_merged_delegate_first() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    model
        .add_constraint(ScalarAffineFunction::var(x), EqualTo::new(0.0))
        .unwrap();
    model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(0.0))
        .unwrap();

    assert_eq!(
        model.list_constraint_types(),
        vec![
            ConstraintType::of::<ScalarAffineFunction, LessThan>(),
            ConstraintType::of::<ScalarAffineFunction, EqualTo>(),
        ]
    );
}

#[test]
fn test_optimizer_attributes_split_by_support() {
    let mut model = narrow_fallback();
    model.set_optimizer_attribute(&Silent, true).unwrap();
    model.set_optimizer_attribute(&TimeLimitSec, 10.0).unwrap();
    let presolve = RawOptimizerAttribute::new("presolve");
    model
        .set_optimizer_attribute(&presolve, serde_json::json!("off"))
        .unwrap();

    assert_eq!(model.inner().optimizer_attribute(&Silent), Ok(Some(true)));
    assert_eq!(model.optimizer_attribute(&TimeLimitSec), Ok(Some(10.0)));
    assert_eq!(
        model.optimizer_attribute(&RawOptimizerAttribute::new("threads")),
        Ok(None)
    );
    assert_eq!(
        model.list_optimizer_attributes_set(),
        vec![Silent.key(), TimeLimitSec.key(), presolve.key()]
    );
    assert_eq!(
        model.summary().optimizer_attributes,
        vec![
            "TimeLimitSec".to_string(),
            "RawOptimizerAttribute(presolve)".to_string()
        ]
    );
}

#[test]
fn test_model_attribute_stored_out_of_band() {
    let mut model = narrow_fallback();
    model
        .set_model_attribute(&ModelName, "unit_commitment".to_string())
        .unwrap();
    assert!(!model.is_empty());
    assert!(model.inner().is_empty());
    assert_eq!(
        model.model_attribute(&ModelName),
        Ok(Some("unit_commitment".to_string()))
    );
    assert_eq!(model.list_model_attributes_set(), vec![ModelName.key()]);
}

#[test]
fn test_variable_attributes_validate_the_index() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    model
        .set_variable_attribute(&VariablePrimalStart, x, 1.0)
        .unwrap();
    model
        .set_variable_attribute(&VariableMetadata, x, serde_json::json!({"unit": "MW"}))
        .unwrap();

    assert_eq!(
        model.inner().variable_attribute(&VariablePrimalStart, x),
        Ok(Some(1.0))
    );
    assert_eq!(
        model.variable_attribute(&VariableMetadata, x),
        Ok(Some(serde_json::json!({"unit": "MW"})))
    );

    let missing = arco_expr::VariableIndex::new(99);
    assert_eq!(
        model.set_variable_attribute(&VariableMetadata, missing, serde_json::json!(null)),
        Err(ModelError::InvalidVariableIndex(missing))
    );
}

#[test]
fn test_constraint_attribute_on_delegate_constraint_is_purged_with_it() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    let row = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(1.0))
        .unwrap();

    // Metadata is supported by the delegate, dual starts are not.
    model
        .set_constraint_attribute(&ConstraintMetadata, row, serde_json::json!("cap"))
        .unwrap();
    model
        .set_constraint_attribute(&ConstraintDualStart, row, vec![0.5])
        .unwrap();
    assert_eq!(
        model.list_constraint_attributes_set::<ScalarAffineFunction, LessThan>(),
        vec![ConstraintMetadata.key(), ConstraintDualStart.key()]
    );

    model.delete_constraint(row).unwrap();
    assert!(model.summary().constraint_attributes.is_empty());
    assert!(model
        .list_constraint_attributes_set::<ScalarAffineFunction, LessThan>()
        .is_empty());
}

#[test]
fn test_constraint_attribute_on_invalid_index_fails() {
    let mut model = narrow_fallback();
    let missing = arco_expr::ConstraintIndex::<ScalarAffineFunction, EqualTo>::new(7);
    assert_eq!(
        model.set_constraint_attribute(&ConstraintMetadata, missing, serde_json::json!(1)),
        Err(ModelError::InvalidConstraintIndex(missing.erase()))
    );
}

#[test]
fn test_delegate_cascade_purges_fallback_constraint_attributes() {
    let support = narrow_support().with_constraint::<SingleVariable, GreaterThan>();
    let mut model = UniversalFallback::new(Model::with_support(support));
    let (x, bound) = model
        .add_constrained_variable(GreaterThan::new(0.0))
        .unwrap();
    assert!(model.inner().is_valid_constraint(bound));
    model
        .set_constraint_attribute(&ConstraintDualStart, bound, vec![1.0])
        .unwrap();

    model.delete_variable(x).unwrap();

    assert!(!model.is_valid_constraint(bound));
    assert!(model.summary().constraint_attributes.is_empty());
}

/// Test: a stored row with a primal start, then the delegate learns the pair
#[test]
fn test_forwarded_constraint_does_not_inherit_stale_attributes() {
    let mut model = UniversalFallback::new(Model::with_support(Support::new()));
    let x = model.add_variable();
    let stored = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(1.0))
        .unwrap();
    model
        .set_constraint_attribute(&ConstraintPrimalStart, stored, vec![5.0])
        .unwrap();

    model
        .inner_mut()
        .set_support(Support::new().with_constraint::<ScalarAffineFunction, LessThan>());
    let forwarded = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(2.0))
        .unwrap();

    assert!(model.inner().is_valid_constraint(forwarded));
    assert_eq!(
        model.constraint_attribute(&ConstraintPrimalStart, forwarded),
        Ok(None)
    );
}

#[test]
fn test_fallback_index_skips_values_held_by_delegate() {
    let support = Support::new().with_constraint::<ScalarAffineFunction, LessThan>();
    let mut model = UniversalFallback::new(Model::with_support(support));
    let x = model.add_variable();
    let first = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(1.0))
        .unwrap();
    let second = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(2.0))
        .unwrap();

    model.inner_mut().set_support(Support::new());
    let stored = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(3.0))
        .unwrap();

    assert_eq!((first.inner(), second.inner()), (1, 2));
    assert_eq!(stored.inner(), 3);
    assert_eq!(model.summary().constraints.len(), 1);
    assert_eq!(model.constraint_set(stored), Ok(LessThan::new(3.0)));
}

#[test]
fn test_deleting_fallback_constraint_purges_its_attributes() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    let row = model
        .add_constraint(ScalarAffineFunction::var(x), EqualTo::new(1.0))
        .unwrap();
    model
        .set_constraint_attribute(&ConstraintDualStart, row, vec![0.25])
        .unwrap();
    assert!(!model.inner().is_valid_constraint(row));
    assert_eq!(
        model.list_constraint_attributes_set::<ScalarAffineFunction, EqualTo>(),
        vec![ConstraintDualStart.key()]
    );

    model.delete_constraint(row).unwrap();

    assert!(model.summary().constraint_attributes.is_empty());
    assert!(model
        .list_constraint_attributes_set::<ScalarAffineFunction, EqualTo>()
        .is_empty());
}

#[test]
fn test_deleted_fallback_constraint_rejects_every_mutation() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    let row = model
        .add_constraint(ScalarAffineFunction::var(x), EqualTo::new(1.0))
        .unwrap();
    model.delete_constraint(row).unwrap();

    let invalid = Err(ModelError::InvalidConstraintIndex(row.erase()));
    assert_eq!(
        model.modify_constraint(row, &ScalarConstantChange::new(1.0)),
        invalid
    );
    assert_eq!(model.set_constraint_set(row, EqualTo::new(2.0)), invalid);
    assert_eq!(model.delete_constraint(row), invalid);
}

#[test]
fn test_supported_objective_clears_fallback_objective() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    model.set_objective_sense(Sense::Minimize).unwrap();
    model.set_objective(SingleVariable::new(x)).unwrap();
    assert_eq!(model.summary().objective, Some("SingleVariable".to_string()));

    model.set_objective(ScalarAffineFunction::term(x, 3.0)).unwrap();
    assert!(model.summary().objective.is_none());
    assert_eq!(
        model.objective_type(),
        Some(TypeKey::of::<ScalarAffineFunction>())
    );
    assert_eq!(
        model.inner().objective::<ScalarAffineFunction>(),
        Ok(Some(ScalarAffineFunction::term(x, 3.0)))
    );
    assert_eq!(model.objective_sense(), Sense::Minimize);
}

#[test]
fn test_name_held_on_both_sides_is_ambiguous() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    let row = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(1.0))
        .unwrap();
    let stored = model
        .add_constraint(ScalarAffineFunction::var(x), EqualTo::new(1.0))
        .unwrap();
    model.set_constraint_name(row, Some("c".to_string())).unwrap();
    assert_eq!(model.constraint_by_name("c"), Ok(Some(row.erase())));

    model
        .set_constraint_name(stored, Some("c".to_string()))
        .unwrap();
    assert_eq!(
        model.constraint_by_name("c"),
        Err(ModelError::DuplicateName("c".to_string()))
    );

    model.set_constraint_name(row, None).unwrap();
    assert_eq!(
        model.typed_constraint_by_name::<ScalarAffineFunction, EqualTo>("c"),
        Ok(Some(stored))
    );
    assert!(matches!(
        model.typed_constraint_by_name::<ScalarAffineFunction, LessThan>("c"),
        Err(ModelError::TypeMismatch { .. })
    ));
}

#[test]
fn test_vector_constraint_shrinks_in_fallback() {
    let mut model = narrow_fallback();
    let (variables, orthant) = model
        .add_constrained_variables(Nonnegatives::new(3))
        .unwrap();
    assert_eq!(model.summary().total_constraints(), 1);

    model.delete_variable(variables[0]).unwrap();

    assert_eq!(
        model.constraint_function(orthant),
        Ok(VectorOfVariables::new(vec![variables[1], variables[2]]))
    );
    assert_eq!(model.constraint_set(orthant), Ok(Nonnegatives::new(2)));
}

#[test]
fn test_reset_clears_both_sides_but_keeps_optimizer_attributes() {
    let mut model = narrow_fallback();
    let x = model.add_variable();
    model
        .add_constraint(ScalarAffineFunction::var(x), EqualTo::new(0.0))
        .unwrap();
    model.set_objective(SingleVariable::new(x)).unwrap();
    model.set_optimizer_attribute(&TimeLimitSec, 5.0).unwrap();

    model.reset();

    assert!(model.is_empty());
    assert_eq!(model.num_variables(), 0);
    assert_eq!(model.optimizer_attribute(&TimeLimitSec), Ok(Some(5.0)));

    let y = model.add_variable();
    let again = model
        .add_constraint(ScalarAffineFunction::var(y), EqualTo::new(0.0))
        .unwrap();
    assert_eq!(again.inner(), 1);
}
