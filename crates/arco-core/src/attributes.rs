//! Attribute kinds at optimizer, model, variable, and constraint granularity.
//!
//! The set of kinds is open: any type implementing [`Attribute`] plus one of
//! the granularity markers can be stored on a model.

use std::fmt;

use arco_expr::TypeKey;

/// Identity of an attribute inside type-erased stores.
///
/// Two attributes are the same kind when their types match and, for
/// parameterized kinds, their labels match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeKey {
    kind: TypeKey,
    label: Option<String>,
}

impl AttributeKey {
    pub fn of<A: ?Sized + 'static>() -> Self {
        Self {
            kind: TypeKey::of::<A>(),
            label: None,
        }
    }

    pub fn labeled<A: ?Sized + 'static>(label: impl Into<String>) -> Self {
        Self {
            kind: TypeKey::of::<A>(),
            label: Some(label.into()),
        }
    }

    pub fn kind(&self) -> TypeKey {
        self.kind
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}({})", self.kind, label),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// A piece of metadata with a statically known value type.
pub trait Attribute: fmt::Debug + 'static {
    type Value: Clone + fmt::Debug + 'static;

    fn key(&self) -> AttributeKey {
        AttributeKey::of::<Self>()
    }
}

/// Attribute of the optimizer (solver parameters).
pub trait OptimizerAttribute: Attribute {}

/// Attribute of the model as a whole.
pub trait ModelAttribute: Attribute {}

/// Attribute attached to each variable.
pub trait VariableAttribute: Attribute {}

/// Attribute attached to each constraint.
pub trait ConstraintAttribute: Attribute {}

// ── Optimizer attributes ────────────────────────────────────

/// Suppress solver output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Silent;

impl Attribute for Silent {
    type Value = bool;
}
impl OptimizerAttribute for Silent {}

/// Time limit in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLimitSec;

impl Attribute for TimeLimitSec {
    type Value = f64;
}
impl OptimizerAttribute for TimeLimitSec {}

/// Solver-specific parameter addressed by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawOptimizerAttribute(pub String);

impl RawOptimizerAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Attribute for RawOptimizerAttribute {
    type Value = serde_json::Value;

    fn key(&self) -> AttributeKey {
        AttributeKey::labeled::<Self>(self.0.clone())
    }
}
impl OptimizerAttribute for RawOptimizerAttribute {}

// ── Model attributes ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelName;

impl Attribute for ModelName {
    type Value = String;
}
impl ModelAttribute for ModelName {}

/// Free-form metadata attached to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelMetadata;

impl Attribute for ModelMetadata {
    type Value = serde_json::Value;
}
impl ModelAttribute for ModelMetadata {}

// ── Variable attributes ─────────────────────────────────────

/// Warm-start value of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariablePrimalStart;

impl Attribute for VariablePrimalStart {
    type Value = f64;
}
impl VariableAttribute for VariablePrimalStart {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariableMetadata;

impl Attribute for VariableMetadata {
    type Value = serde_json::Value;
}
impl VariableAttribute for VariableMetadata {}

// ── Constraint attributes ───────────────────────────────────

/// Warm-start value of the constraint function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintPrimalStart;

impl Attribute for ConstraintPrimalStart {
    type Value = Vec<f64>;
}
impl ConstraintAttribute for ConstraintPrimalStart {}

/// Warm-start value of the constraint dual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintDualStart;

impl Attribute for ConstraintDualStart {
    type Value = Vec<f64>;
}
impl ConstraintAttribute for ConstraintDualStart {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintMetadata;

impl Attribute for ConstraintMetadata {
    type Value = serde_json::Value;
}
impl ConstraintAttribute for ConstraintMetadata {}
