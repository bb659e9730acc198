//! The seven arithmetic operations and their validation policy.
//!
//! Results follow the mixed-type convention of the service's wire format:
//! an operation returns `Number::Integer` only when every operand is an
//! integer and the mathematically exact result is an integer, and
//! `Number::Float` otherwise. On `i64` overflow the result is promoted to
//! float rather than wrapped.

use std::sync::Arc;

use calc_types::Number;

use crate::CalcResult;
use crate::error::CalcError;
use crate::permission::{AllowAll, PermissionChecker};

/// Stateless owner of the arithmetic operations.
///
/// The only collaborator is the injected `PermissionChecker`, consulted by
/// `multiply` alone. Operations never share state between calls, so a single
/// `Calculator` can serve concurrent callers without coordination.
pub struct Calculator {
    permissions: Arc<dyn PermissionChecker>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Arc::new(AllowAll))
    }
}

impl Calculator {
    /// Creates a calculator with the given permission collaborator.
    pub fn new(permissions: Arc<dyn PermissionChecker>) -> Self {
        Self { permissions }
    }

    /// a + b. Integer iff both operands are integers.
    pub fn add(&self, a: Number, b: Number) -> CalcResult {
        check_operands(&[a, b])?;
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Ok(x
                .checked_add(y)
                .map(Number::Integer)
                .unwrap_or(Number::Float(x as f64 + y as f64))),
            _ => Ok(Number::Float(a.as_f64() + b.as_f64())),
        }
    }

    /// a - b. Integer iff both operands are integers.
    pub fn subtract(&self, a: Number, b: Number) -> CalcResult {
        check_operands(&[a, b])?;
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Ok(x
                .checked_sub(y)
                .map(Number::Integer)
                .unwrap_or(Number::Float(x as f64 - y as f64))),
            _ => Ok(Number::Float(a.as_f64() - b.as_f64())),
        }
    }

    /// a * b, gated by the permission collaborator.
    pub fn multiply(&self, a: Number, b: Number) -> CalcResult {
        check_operands(&[a, b])?;
        if !self.permissions.validate("multiply", &[a, b]) {
            return Err(CalcError::PermissionDenied { operation: "multiply".to_string() });
        }
        match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => Ok(x
                .checked_mul(y)
                .map(Number::Integer)
                .unwrap_or(Number::Float(x as f64 * y as f64))),
            _ => Ok(Number::Float(a.as_f64() * b.as_f64())),
        }
    }

    /// a / b. Fails on a zero divisor, negative zero included. Integer only
    /// when both operands are integers and the division is exact.
    pub fn divide(&self, a: Number, b: Number) -> CalcResult {
        check_operands(&[a, b])?;
        if b.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        if let (Number::Integer(x), Number::Integer(y)) = (a, b) {
            // checked_div covers i64::MIN / -1, which is exact but overflows.
            if let (Some(0), Some(quotient)) = (x.checked_rem(y), x.checked_div(y)) {
                return Ok(Number::Integer(quotient));
            }
        }
        Ok(Number::Float(a.as_f64() / b.as_f64()))
    }

    /// a ** b. Integer iff both operands are integers and the exponent is
    /// non-negative; IEEE-754 `powf` otherwise.
    pub fn power(&self, a: Number, b: Number) -> CalcResult {
        check_operands(&[a, b])?;
        if let (Number::Integer(x), Number::Integer(y)) = (a, b) {
            if y >= 0 {
                if let Some(result) = u32::try_from(y).ok().and_then(|e| x.checked_pow(e)) {
                    return Ok(Number::Integer(result));
                }
            }
        }
        Ok(Number::Float(a.as_f64().powf(b.as_f64())))
    }

    /// Principal square root. Integer only for integer perfect squares.
    pub fn sqrt(&self, a: Number) -> CalcResult {
        check_operands(&[a])?;
        if a.as_f64() < 0.0 {
            return Err(CalcError::NegativeRadicand);
        }
        let root = a.as_f64().sqrt();
        if let Number::Integer(x) = a {
            let candidate = root.round() as i64;
            if candidate.checked_mul(candidate) == Some(x) {
                return Ok(Number::Integer(candidate));
            }
        }
        Ok(Number::Float(root))
    }

    /// Base-10 logarithm, always a float.
    pub fn log10(&self, a: Number) -> CalcResult {
        check_operands(&[a])?;
        if a.as_f64() <= 0.0 {
            return Err(CalcError::NonPositiveLogArgument);
        }
        Ok(Number::Float(a.as_f64().log10()))
    }
}

/// Rejects non-finite operands before any computation runs.
///
/// The parser never produces NaN or infinity, so this guards the direct
/// library API; positions are 1-based for the error message.
fn check_operands(operands: &[Number]) -> Result<(), CalcError> {
    for (index, operand) in operands.iter().enumerate() {
        if !operand.is_finite() {
            return Err(CalcError::InvalidOperandType { position: index + 1 });
        }
    }
    Ok(())
}
