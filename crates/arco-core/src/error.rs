//! Model error types.

use arco_expr::{AnyConstraintIndex, ConstraintType, ExprError, TypeKey, VariableIndex};

use crate::attributes::AttributeKey;

/// Errors that can occur during model operations
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Variable index not present in the model
    InvalidVariableIndex(VariableIndex),
    /// Constraint index not present in the model
    InvalidConstraintIndex(AnyConstraintIndex),
    /// A name lookup resolved to more than one index
    DuplicateName(String),
    /// The function of a single-variable constraint is fixed to its variable
    SettingSingleVariableFunctionNotAllowed(AnyConstraintIndex),
    /// Removing the variable would leave a fixed-dimension set inconsistent
    UnsupportedVariableRemoval {
        variable: VariableIndex,
        constraint: AnyConstraintIndex,
    },
    /// A typed getter found a value of another type
    TypeMismatch { expected: String, actual: String },
    /// The model does not accept this function/set pair
    UnsupportedConstraint(ConstraintType),
    /// The model does not accept this objective function type
    UnsupportedObjective(TypeKey),
    /// The model does not accept this attribute
    UnsupportedAttribute(AttributeKey),
    /// No objective function set
    NoObjective,
    /// A function modification could not be applied
    InvalidModification(ExprError),
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidVariableIndex(_) => "VARIABLE_INVALID_INDEX",
            ModelError::InvalidConstraintIndex(_) => "CONSTRAINT_INVALID_INDEX",
            ModelError::DuplicateName(_) => "NAME_DUPLICATE",
            ModelError::SettingSingleVariableFunctionNotAllowed(_) => {
                "MUTATION_SINGLE_VARIABLE_FUNCTION"
            }
            ModelError::UnsupportedVariableRemoval { .. } => "MUTATION_VARIABLE_REMOVAL",
            ModelError::TypeMismatch { .. } => "TYPE_MISMATCH",
            ModelError::UnsupportedConstraint(_) => "CONSTRAINT_UNSUPPORTED",
            ModelError::UnsupportedObjective(_) => "OBJECTIVE_UNSUPPORTED",
            ModelError::UnsupportedAttribute(_) => "ATTRIBUTE_UNSUPPORTED",
            ModelError::NoObjective => "OBJECTIVE_MISSING",
            ModelError::InvalidModification(_) => "MODIFICATION_INVALID",
        }
    }

    /// True for structural mutations the model refuses to perform.
    pub fn is_unsupported_mutation(&self) -> bool {
        matches!(
            self,
            ModelError::SettingSingleVariableFunctionNotAllowed(_)
                | ModelError::UnsupportedVariableRemoval { .. }
        )
    }

    /// Build a [`ModelError::TypeMismatch`] from anything displayable.
    pub fn type_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        ModelError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidVariableIndex(index) => {
                write!(f, "[{}] Variable {} does not exist", self.code(), index)
            }
            ModelError::InvalidConstraintIndex(index) => {
                write!(f, "[{}] Constraint {} does not exist", self.code(), index)
            }
            ModelError::DuplicateName(name) => write!(
                f,
                "[{}] More than one index has the name '{}'",
                self.code(),
                name
            ),
            ModelError::SettingSingleVariableFunctionNotAllowed(index) => write!(
                f,
                "[{}] Cannot replace the function of single-variable constraint {}",
                self.code(),
                index
            ),
            ModelError::UnsupportedVariableRemoval {
                variable,
                constraint,
            } => write!(
                f,
                "[{}] Cannot remove {} from {}: its set cannot change dimension",
                self.code(),
                variable,
                constraint
            ),
            ModelError::TypeMismatch { expected, actual } => write!(
                f,
                "[{}] Expected {}, found {}",
                self.code(),
                expected,
                actual
            ),
            ModelError::UnsupportedConstraint(constraint_type) => write!(
                f,
                "[{}] {} constraints are not supported",
                self.code(),
                constraint_type
            ),
            ModelError::UnsupportedObjective(function) => write!(
                f,
                "[{}] {} objectives are not supported",
                self.code(),
                function
            ),
            ModelError::UnsupportedAttribute(attribute) => write!(
                f,
                "[{}] Attribute {} is not supported",
                self.code(),
                attribute
            ),
            ModelError::NoObjective => {
                write!(f, "[{}] Model has no objective defined", self.code())
            }
            ModelError::InvalidModification(err) => {
                write!(f, "[{}] Modification rejected: {}", self.code(), err)
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidModification(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ExprError> for ModelError {
    fn from(err: ExprError) -> Self {
        ModelError::InvalidModification(err)
    }
}
