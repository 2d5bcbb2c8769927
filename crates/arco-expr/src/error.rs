//! Function construction and modification errors.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A vector-valued change does not match the function's output dimension.
    DimensionMismatch { expected: usize, actual: usize },
    /// A row referenced by a change is outside the function's output dimension.
    RowOutOfBounds { row: usize, dimension: usize },
}

impl ExprError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ExprError::DimensionMismatch { .. } => "EXPR_DIMENSION_MISMATCH",
            ExprError::RowOutOfBounds { .. } => "EXPR_ROW_OUT_OF_BOUNDS",
        }
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprError::DimensionMismatch { expected, actual } => write!(
                f,
                "[{}] expected dimension {}, got {}",
                self.code(),
                expected,
                actual
            ),
            ExprError::RowOutOfBounds { row, dimension } => write!(
                f,
                "[{}] row {} is outside output dimension {}",
                self.code(),
                row,
                dimension
            ),
        }
    }
}

impl std::error::Error for ExprError {}

#[cfg(test)]
mod tests {
    use super::ExprError;

    #[test]
    fn error_code_is_stable() {
        assert_eq!(
            ExprError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
            .code(),
            "EXPR_DIMENSION_MISMATCH"
        );
        assert_eq!(
            ExprError::RowOutOfBounds {
                row: 4,
                dimension: 2
            }
            .code(),
            "EXPR_ROW_OUT_OF_BOUNDS"
        );
    }

    #[test]
    fn display_prefixes_error_code() {
        let rendered = ExprError::DimensionMismatch {
            expected: 2,
            actual: 3,
        }
        .to_string();
        assert!(rendered.starts_with("[EXPR_DIMENSION_MISMATCH]"));
        assert!(rendered.contains("expected dimension 2"));
    }
}
