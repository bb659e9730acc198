use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated numeric operand or result.
///
/// The calculator keeps integers and floats apart so that the boundary layer
/// can render `8` for an exact integer result and `6.0` for a float one.
/// Equality is numeric across variants: `Integer(3) == Float(3.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Exact integer value
    Integer(i64),
    /// Double-precision floating point value
    Float(f64),
}

impl Number {
    /// Returns the value widened to `f64`.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// True for integer zero and for float positive or negative zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Float(f) => *f == 0.0,
        }
    }

    /// False only for float NaN and infinities.
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            // Floats always carry a fractional part in the wire format,
            // so an integral float renders as "6.0" rather than "6".
            Number::Float(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<Number> for serde_json::Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Integer(i) => Self::Number(serde_json::Number::from(i)),
            Number::Float(f) => {
                serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number)
            }
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
