//! Conversion of textual operands into `Number` values.
//!
//! The parser accepts standard decimal notation only: optional sign,
//! optional decimal point, optional exponent. Inputs with no fractional or
//! exponent part become `Number::Integer`, everything else `Number::Float`,
//! which is what drives the `8` vs `6.0` formatting downstream. Alphabetic
//! spellings that `f64::from_str` would accept (`inf`, `NaN`) are rejected,
//! as is surrounding whitespace.

use crate::error::CalcError;
use calc_types::Number;

/// Parses one textual operand into a `Number`.
///
/// Fails with `CalcError::NotANumber` naming the operand when the text is
/// not a plain decimal integer or float literal.
pub fn parse(text: &str) -> Result<Number, CalcError> {
    let not_a_number = || CalcError::NotANumber { operand: text.to_string() };

    if text.is_empty() || text != text.trim() {
        return Err(not_a_number());
    }

    // Integral representation wins when the literal has no '.' or exponent.
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Number::Integer(i));
    }

    // f64::from_str accepts "inf", "NaN" and friends; those are not decimal
    // literals, so any alphabetic character other than an exponent marker
    // disqualifies the input.
    if text.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return Err(not_a_number());
    }

    let value: f64 = text.parse().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    Ok(Number::Float(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(parse("5"), Ok(Number::Integer(5)));
        assert_eq!(parse("-42"), Ok(Number::Integer(-42)));
        assert_eq!(parse("+7"), Ok(Number::Integer(7)));
        assert_eq!(parse("0"), Ok(Number::Integer(0)));
    }

    #[test]
    fn parses_floats() {
        assert_eq!(parse("2.5"), Ok(Number::Float(2.5)));
        assert_eq!(parse("-0.001"), Ok(Number::Float(-0.001)));
        assert_eq!(parse("1e3"), Ok(Number::Float(1000.0)));
        assert_eq!(parse("2.5E-1"), Ok(Number::Float(0.25)));
    }

    #[test]
    fn integral_literals_stay_integers_and_floats_stay_floats() {
        assert!(matches!(parse("5"), Ok(Number::Integer(5))));
        assert!(matches!(parse("5.0"), Ok(Number::Float(_))));
    }

    #[test]
    fn rejects_non_numeric_text() {
        for input in ["abc", "", " ", "1.2.3", "2,5", "--5", "0x10", "five"] {
            let err = parse(input).unwrap_err();
            assert_eq!(err, CalcError::NotANumber { operand: input.to_string() });
            assert!(err.to_string().contains("cannot be converted to number"));
        }
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(parse(" 5").is_err());
        assert!(parse("5 ").is_err());
        assert!(parse("\t2.5").is_err());
    }

    #[test]
    fn rejects_non_finite_spellings_and_overflow() {
        assert!(parse("inf").is_err());
        assert!(parse("-inf").is_err());
        assert!(parse("NaN").is_err());
        assert!(parse("1e999").is_err());
    }

    #[test]
    fn error_message_names_the_operand() {
        let err = parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "Operator 'abc' cannot be converted to number");
    }
}
