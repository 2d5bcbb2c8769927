//! Index types and the function/set catalog shared by Arco models.
//!
//! - `ids`      — VariableIndex, typed and erased constraint indices
//! - `type_key` — runtime type tokens for type-erased containers
//! - `function` — Function / Modify traits and the function catalog
//! - `set`      — Set trait and the set catalog
//! - `error`    — construction and modification errors

pub mod error;
pub mod function;
pub mod ids;
pub mod set;
pub mod type_key;

pub use error::ExprError;
pub use function::{
    Function, FunctionShape, Modify, MultirowChange, ScalarAffineFunction, ScalarAffineTerm,
    ScalarCoefficientChange, ScalarConstantChange, SingleVariable, VectorAffineFunction,
    VectorAffineTerm, VectorConstantChange, VectorOfVariables,
};
pub use ids::{AnyConstraintIndex, ConstraintIndex, ConstraintType, VariableIndex};
pub use set::{
    EqualTo, ExponentialCone, GreaterThan, Integer, Interval, LessThan, Nonnegatives,
    Nonpositives, SecondOrderCone, Set, Zeros, ZeroOne,
};
pub use type_key::TypeKey;
