use super::support::linear_model;
use super::*;
use crate::attributes::{
    Attribute, ConstraintDualStart, ConstraintMetadata, ModelMetadata, ModelName,
    RawOptimizerAttribute, Silent, TimeLimitSec, VariableMetadata, VariablePrimalStart,
};
use arco_expr::{
    EqualTo, LessThan, ScalarAffineFunction, ScalarConstantChange, SingleVariable, TypeKey,
    VectorAffineFunction,
};

#[test]
fn test_optimizer_attributes_roundtrip() {
    let mut model = linear_model();
    assert_eq!(model.optimizer_attribute(&TimeLimitSec), Ok(None));

    model.set_optimizer_attribute(&TimeLimitSec, 30.0).unwrap();
    model.set_optimizer_attribute(&Silent, true).unwrap();
    assert_eq!(model.optimizer_attribute(&TimeLimitSec), Ok(Some(30.0)));
    assert_eq!(
        model.list_optimizer_attributes_set(),
        vec![TimeLimitSec.key(), Silent.key()]
    );
}

#[test]
fn test_unsupported_attributes_are_rejected() {
    let mut model = linear_model();
    let raw = RawOptimizerAttribute::new("presolve");
    assert!(!model.supports_optimizer_attribute(&raw));
    assert_eq!(
        model.set_optimizer_attribute(&raw, serde_json::json!("off")),
        Err(ModelError::UnsupportedAttribute(raw.key()))
    );
    assert_eq!(
        model.model_attribute(&ModelMetadata),
        Err(ModelError::UnsupportedAttribute(ModelMetadata.key()))
    );

    let x = model.add_variable();
    assert!(model
        .set_variable_attribute(&VariableMetadata, x, serde_json::json!({"unit": "MW"}))
        .is_err());
}

#[test]
fn test_model_attribute_makes_model_non_empty() {
    let mut model = linear_model();
    model
        .set_model_attribute(&ModelName, "dispatch".to_string())
        .unwrap();
    assert!(!model.is_empty());
    assert_eq!(
        model.model_attribute(&ModelName),
        Ok(Some("dispatch".to_string()))
    );
}

#[test]
fn test_variable_attribute_requires_valid_index() {
    let mut model = linear_model();
    let x = model.add_variable();
    model
        .set_variable_attribute(&VariablePrimalStart, x, 2.5)
        .unwrap();
    assert_eq!(
        model.variable_attribute(&VariablePrimalStart, x),
        Ok(Some(2.5))
    );

    let missing = VariableIndex::new(42);
    assert_eq!(
        model.set_variable_attribute(&VariablePrimalStart, missing, 1.0),
        Err(ModelError::InvalidVariableIndex(missing))
    );
}

#[test]
fn test_constraint_attribute_support_needs_the_pair() {
    let mut model = linear_model();
    let x = model.add_variable();
    let row = model
        .add_constraint(ScalarAffineFunction::var(x), LessThan::new(1.0))
        .unwrap();

    assert!(model.supports_constraint_attribute::<_, ScalarAffineFunction, LessThan>(
        &ConstraintMetadata
    ));
    assert!(!model.supports_constraint_attribute::<_, VectorAffineFunction, EqualTo>(
        &ConstraintMetadata
    ));
    assert!(!model.supports_constraint_attribute::<_, ScalarAffineFunction, LessThan>(
        &ConstraintDualStart
    ));

    let meta = serde_json::json!({"group": "capacity"});
    model
        .set_constraint_attribute(&ConstraintMetadata, row, meta.clone())
        .unwrap();
    assert_eq!(
        model.constraint_attribute(&ConstraintMetadata, row),
        Ok(Some(meta))
    );
    assert_eq!(
        model.list_constraint_attributes_set::<ScalarAffineFunction, LessThan>(),
        vec![ConstraintMetadata.key()]
    );
    assert!(model
        .list_constraint_attributes_set::<ScalarAffineFunction, EqualTo>()
        .is_empty());

    model.delete_constraint(row).unwrap();
    assert!(model
        .list_constraint_attributes_set::<ScalarAffineFunction, LessThan>()
        .is_empty());
}

#[test]
fn test_objective_lifecycle() {
    let mut model = linear_model();
    let x = model.add_variable();
    assert_eq!(model.objective::<ScalarAffineFunction>(), Ok(None));

    model
        .set_objective(ScalarAffineFunction::term(x, 2.0))
        .unwrap();
    model.set_objective_sense(Sense::Minimize).unwrap();
    assert_eq!(
        model.objective_type(),
        Some(TypeKey::of::<ScalarAffineFunction>())
    );

    model
        .modify_objective::<ScalarAffineFunction, _>(&ScalarConstantChange::new(5.0))
        .unwrap();
    let objective = model.objective::<ScalarAffineFunction>().unwrap().unwrap();
    assert_eq!(objective.constant(), 5.0);
    assert_eq!(objective.coefficient(x), 2.0);

    assert_eq!(
        model.objective::<SingleVariable>().unwrap_err().code(),
        "TYPE_MISMATCH"
    );
}

#[test]
fn test_feasibility_sense_clears_objective() {
    let mut model = linear_model();
    let x = model.add_variable();
    model.set_objective(SingleVariable::new(x)).unwrap();
    model.set_objective_sense(Sense::Maximize).unwrap();

    model.set_objective_sense(Sense::Feasibility).unwrap();
    assert_eq!(model.objective_type(), None);
    assert_eq!(model.objective_sense(), Sense::Feasibility);
}

#[test]
fn test_unsupported_objective_is_rejected() {
    let mut model = linear_model();
    assert_eq!(
        model.set_objective(VectorAffineFunction::new(Vec::new(), vec![0.0])),
        Err(ModelError::UnsupportedObjective(TypeKey::of::<
            VectorAffineFunction,
        >()))
    );
    assert_eq!(
        model.modify_objective::<ScalarAffineFunction, _>(&ScalarConstantChange::new(1.0)),
        Err(ModelError::NoObjective)
    );
}
