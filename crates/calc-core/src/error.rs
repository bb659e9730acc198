//! Typed failures produced by the arithmetic core.
//!
//! Every failure is local to a single call and carries the human-readable
//! message the boundary layer returns to clients verbatim.

use thiserror::Error;

/// Failure kinds for parsing and arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A textual operand could not be interpreted as a numeric literal.
    #[error("Operator '{operand}' cannot be converted to number")]
    NotANumber {
        /// The offending operand text, verbatim.
        operand: String,
    },

    /// An operand reached an operation without being a usable number
    /// (non-finite values such as NaN or infinity).
    #[error("Operand {position} is not a valid number")]
    InvalidOperandType {
        /// 1-based position of the offending operand.
        position: usize,
    },

    /// The divisor was zero, including negative zero.
    #[error("Division by zero is not possible")]
    DivisionByZero,

    /// The square root argument was negative.
    #[error("Cannot calculate the square root of a negative number")]
    NegativeRadicand,

    /// The logarithm argument was zero or negative.
    #[error("Cannot calculate the base 10 logarithm of a non-positive number")]
    NonPositiveLogArgument,

    /// The permission check for a gated operation returned false.
    #[error("User has no permissions")]
    PermissionDenied {
        /// Name of the gated operation, for diagnostics.
        operation: String,
    },
}

impl CalcError {
    /// Stable error code string, used by the boundary layer for logging.
    pub fn code(&self) -> &'static str {
        match self {
            CalcError::NotANumber { .. } => "NOT_A_NUMBER",
            CalcError::InvalidOperandType { .. } => "INVALID_OPERAND_TYPE",
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::NegativeRadicand => "NEGATIVE_RADICAND",
            CalcError::NonPositiveLogArgument => "NON_POSITIVE_LOG_ARGUMENT",
            CalcError::PermissionDenied { .. } => "PERMISSION_DENIED",
        }
    }
}
