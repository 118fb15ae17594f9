//! Value coercion — turning untyped request values into characteristic values.
//!
//! Requests arrive from a loosely-typed JSON transport, so a set-point may be
//! sent as `22.5` or `"22.5"` and a switch as `true` or `"true"`. Coercion is
//! a pure function of the descriptor and the raw value: it dispatches on the
//! declared [`CharacteristicFormat`], parses, and checks bounds, without any
//! side effect.
//!
//! | format | accepted input | rejected with |
//! |---|---|---|
//! | `bool` | `true`, `false`, `"true"`, `"false"` | anything else: `InvalidType` |
//! | `uint*` | integral number or numeric string | fractional / unparseable: `InvalidType`; outside width or bounds: `OutOfRange` |
//! | `float` | finite number or numeric string | unparseable: `InvalidType`; outside bounds: `OutOfRange` |
//! | others | any JSON scalar, passed through | null, array, object: `InvalidType` |
//!
//! Bounds are inclusive. A missing `minValue` or `maxValue` leaves that side
//! unbounded.

use serde_json::Value;

use crate::characteristic::{Characteristic, CharacteristicFormat, CharacteristicValue};
use crate::error::CoercionError;

/// Coerce `raw` into the format declared by `characteristic`.
///
/// # Errors
///
/// Returns [`CoercionError::InvalidType`] when `raw` cannot be parsed into the
/// format, or [`CoercionError::OutOfRange`] when it parses but falls outside
/// the declared bounds.
pub fn coerce(
    characteristic: &Characteristic,
    raw: &Value,
) -> Result<CharacteristicValue, CoercionError> {
    let format = characteristic.format;
    match format {
        CharacteristicFormat::Bool => coerce_bool(raw).map(CharacteristicValue::Bool),
        CharacteristicFormat::Uint8
        | CharacteristicFormat::Uint16
        | CharacteristicFormat::Uint32
        | CharacteristicFormat::Uint64 => {
            coerce_unsigned(characteristic, raw).map(CharacteristicValue::UInt)
        }
        CharacteristicFormat::Float => {
            coerce_float(characteristic, raw).map(CharacteristicValue::Float)
        }
        CharacteristicFormat::Int
        | CharacteristicFormat::String
        | CharacteristicFormat::Data
        | CharacteristicFormat::Tlv8 => pass_through(format, raw),
    }
}

/// A number parsed from either a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl Numeric {
    fn parse(raw: &Value) -> Option<Self> {
        let numeric = match raw {
            Value::Number(n) => n
                .as_u64()
                .map(Self::Unsigned)
                .or_else(|| n.as_i64().map(Self::Signed))
                .or_else(|| n.as_f64().map(Self::Float))?,
            Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .map(Self::Unsigned)
                    .or_else(|_| s.parse::<i64>().map(Self::Signed))
                    .or_else(|_| s.parse::<f64>().map(Self::Float))
                    .ok()?
            }
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => return None,
        };
        match numeric {
            Self::Float(f) if !f.is_finite() => None,
            other => Some(other),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Self::Unsigned(v) => v as f64,
            Self::Signed(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

fn invalid(format: CharacteristicFormat, raw: &Value) -> CoercionError {
    CoercionError::InvalidType {
        format,
        value: raw.to_string(),
    }
}

fn coerce_bool(raw: &Value) -> Result<bool, CoercionError> {
    match raw {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        _ => Err(invalid(CharacteristicFormat::Bool, raw)),
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn coerce_unsigned(characteristic: &Characteristic, raw: &Value) -> Result<u64, CoercionError> {
    let format = characteristic.format;
    let width_max = format.unsigned_max().unwrap_or(u64::MAX);
    let min = Some(characteristic.min_value.map_or(0.0, |min| min.max(0.0)));
    let max = Some(
        characteristic
            .max_value
            .map_or(width_max as f64, |max| max.min(width_max as f64)),
    );
    let out_of_range = |value: f64| CoercionError::OutOfRange { value, min, max };

    let value = match Numeric::parse(raw).ok_or_else(|| invalid(format, raw))? {
        Numeric::Unsigned(v) => v,
        Numeric::Signed(v) => u64::try_from(v).map_err(|_| out_of_range(v as f64))?,
        Numeric::Float(f) if f.fract() != 0.0 => return Err(invalid(format, raw)),
        Numeric::Float(f) if f < 0.0 || f >= u64::MAX as f64 => return Err(out_of_range(f)),
        Numeric::Float(f) => f as u64,
    };

    if value > width_max {
        return Err(out_of_range(value as f64));
    }
    check_bounds(characteristic, value as f64).map_err(|_| out_of_range(value as f64))?;
    Ok(value)
}

fn coerce_float(characteristic: &Characteristic, raw: &Value) -> Result<f64, CoercionError> {
    let value = Numeric::parse(raw)
        .ok_or_else(|| invalid(CharacteristicFormat::Float, raw))?
        .as_f64();
    check_bounds(characteristic, value)?;
    Ok(value)
}

/// Inclusive check against the declared `minValue` / `maxValue`.
fn check_bounds(characteristic: &Characteristic, value: f64) -> Result<(), CoercionError> {
    let below = characteristic.min_value.is_some_and(|min| value < min);
    let above = characteristic.max_value.is_some_and(|max| value > max);
    if below || above {
        return Err(CoercionError::OutOfRange {
            value,
            min: characteristic.min_value,
            max: characteristic.max_value,
        });
    }
    Ok(())
}

fn pass_through(
    format: CharacteristicFormat,
    raw: &Value,
) -> Result<CharacteristicValue, CoercionError> {
    match raw {
        Value::Bool(b) => Ok(CharacteristicValue::Bool(*b)),
        Value::String(s) => Ok(CharacteristicValue::String(s.clone())),
        Value::Number(_) => match Numeric::parse(raw) {
            Some(Numeric::Unsigned(v)) => Ok(CharacteristicValue::UInt(v)),
            Some(Numeric::Signed(v)) => Ok(CharacteristicValue::Int(v)),
            Some(Numeric::Float(v)) => Ok(CharacteristicValue::Float(v)),
            None => Err(invalid(format, raw)),
        },
        Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid(format, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn on() -> Characteristic {
        Characteristic::builder()
            .type_name("On")
            .format(CharacteristicFormat::Bool)
            .value(true)
            .writable(true)
            .build()
            .unwrap()
    }

    fn active() -> Characteristic {
        Characteristic::builder()
            .type_name("Active")
            .format(CharacteristicFormat::Uint8)
            .value(1_u64)
            .range(0.0, 1.0)
            .writable(true)
            .build()
            .unwrap()
    }

    fn target_temperature() -> Characteristic {
        Characteristic::builder()
            .type_name("TargetTemperature")
            .format(CharacteristicFormat::Float)
            .value(21.0)
            .range(18.0, 100.0)
            .writable(true)
            .build()
            .unwrap()
    }

    fn unbounded(format: CharacteristicFormat) -> Characteristic {
        Characteristic::builder()
            .type_name("Unbounded")
            .format(format)
            .writable(true)
            .build()
            .unwrap()
    }

    // -- bool --

    #[test]
    fn should_coerce_true_string_to_true() {
        assert_eq!(
            coerce(&on(), &json!("true")),
            Ok(CharacteristicValue::Bool(true))
        );
    }

    #[test]
    fn should_coerce_false_string_to_false() {
        assert_eq!(
            coerce(&on(), &json!("false")),
            Ok(CharacteristicValue::Bool(false))
        );
    }

    #[test]
    fn should_accept_json_booleans() {
        assert_eq!(
            coerce(&on(), &json!(false)),
            Ok(CharacteristicValue::Bool(false))
        );
    }

    #[test]
    fn should_reject_non_boolean_string() {
        let result = coerce(&on(), &json!("not a boolean"));
        assert!(matches!(
            result,
            Err(CoercionError::InvalidType {
                format: CharacteristicFormat::Bool,
                ..
            })
        ));
    }

    #[test]
    fn should_match_boolean_literals_case_sensitively() {
        assert!(coerce(&on(), &json!("True")).is_err());
        assert!(coerce(&on(), &json!("FALSE")).is_err());
    }

    #[test]
    fn should_reject_numbers_for_boolean() {
        assert!(matches!(
            coerce(&on(), &json!(1)),
            Err(CoercionError::InvalidType { .. })
        ));
    }

    // -- unsigned integers --

    #[test]
    fn should_accept_integer_within_bounds() {
        assert_eq!(
            coerce(&active(), &json!(1)),
            Ok(CharacteristicValue::UInt(1))
        );
        assert_eq!(
            coerce(&active(), &json!(0)),
            Ok(CharacteristicValue::UInt(0))
        );
    }

    #[test]
    fn should_reject_integer_above_max() {
        let result = coerce(&active(), &json!(22));
        assert_eq!(
            result,
            Err(CoercionError::OutOfRange {
                value: 22.0,
                min: Some(0.0),
                max: Some(1.0),
            })
        );
    }

    #[test]
    fn should_reject_negative_integer_as_out_of_range() {
        assert!(matches!(
            coerce(&active(), &json!(-1)),
            Err(CoercionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn should_accept_negative_zero_for_integer() {
        assert_eq!(
            coerce(&active(), &json!("-0")),
            Ok(CharacteristicValue::UInt(0))
        );
        assert_eq!(
            coerce(&active(), &json!(-0)),
            Ok(CharacteristicValue::UInt(0))
        );
    }

    #[test]
    fn should_reject_negative_numeric_string_as_out_of_range() {
        assert!(matches!(
            coerce(&active(), &json!("-1")),
            Err(CoercionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn should_parse_numeric_string_for_integer() {
        assert_eq!(
            coerce(&active(), &json!(" 1 ")),
            Ok(CharacteristicValue::UInt(1))
        );
    }

    #[test]
    fn should_reject_fractional_integer_input() {
        assert!(matches!(
            coerce(&active(), &json!(0.5)),
            Err(CoercionError::InvalidType { .. })
        ));
        assert!(matches!(
            coerce(&active(), &json!("0.5")),
            Err(CoercionError::InvalidType { .. })
        ));
    }

    #[test]
    fn should_accept_integral_float_for_integer() {
        assert_eq!(
            coerce(&active(), &json!(1.0)),
            Ok(CharacteristicValue::UInt(1))
        );
    }

    #[test]
    fn should_reject_non_numeric_string_for_integer() {
        assert!(matches!(
            coerce(&active(), &json!("one")),
            Err(CoercionError::InvalidType { .. })
        ));
        assert!(matches!(
            coerce(&active(), &json!("")),
            Err(CoercionError::InvalidType { .. })
        ));
    }

    #[test]
    fn should_enforce_bit_width_when_unbounded() {
        let c = unbounded(CharacteristicFormat::Uint8);
        assert_eq!(coerce(&c, &json!(255)), Ok(CharacteristicValue::UInt(255)));
        assert_eq!(
            coerce(&c, &json!(256)),
            Err(CoercionError::OutOfRange {
                value: 256.0,
                min: Some(0.0),
                max: Some(255.0),
            })
        );
    }

    #[test]
    fn should_accept_large_values_for_unbounded_uint64() {
        let c = unbounded(CharacteristicFormat::Uint64);
        assert_eq!(
            coerce(&c, &json!(u64::MAX)),
            Ok(CharacteristicValue::UInt(u64::MAX))
        );
    }

    // -- floats --

    #[test]
    fn should_parse_float_string_within_bounds() {
        assert_eq!(
            coerce(&target_temperature(), &json!("22.5")),
            Ok(CharacteristicValue::Float(22.5))
        );
    }

    #[test]
    fn should_reject_float_string_below_min() {
        assert_eq!(
            coerce(&target_temperature(), &json!("12.6")),
            Err(CoercionError::OutOfRange {
                value: 12.6,
                min: Some(18.0),
                max: Some(100.0),
            })
        );
    }

    #[test]
    fn should_treat_bounds_as_inclusive() {
        let c = target_temperature();
        assert_eq!(
            coerce(&c, &json!(18)),
            Ok(CharacteristicValue::Float(18.0))
        );
        assert_eq!(
            coerce(&c, &json!(100.0)),
            Ok(CharacteristicValue::Float(100.0))
        );
    }

    #[test]
    fn should_reject_just_above_max() {
        assert!(matches!(
            coerce(&target_temperature(), &json!(100.000_001)),
            Err(CoercionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn should_reject_non_finite_float_strings() {
        let c = unbounded(CharacteristicFormat::Float);
        assert!(matches!(
            coerce(&c, &json!("NaN")),
            Err(CoercionError::InvalidType { .. })
        ));
        assert!(matches!(
            coerce(&c, &json!("inf")),
            Err(CoercionError::InvalidType { .. })
        ));
    }

    #[test]
    fn should_accept_any_finite_float_when_unbounded() {
        let c = unbounded(CharacteristicFormat::Float);
        assert_eq!(
            coerce(&c, &json!(-1e9)),
            Ok(CharacteristicValue::Float(-1e9))
        );
    }

    #[test]
    fn should_reject_boolean_for_float() {
        assert!(matches!(
            coerce(&target_temperature(), &json!(true)),
            Err(CoercionError::InvalidType { .. })
        ));
    }

    // -- pass-through --

    #[test]
    fn should_pass_strings_through_for_string_format() {
        let c = unbounded(CharacteristicFormat::String);
        assert_eq!(
            coerce(&c, &json!("Kitchen")),
            Ok(CharacteristicValue::String("Kitchen".to_string()))
        );
    }

    #[test]
    fn should_preserve_number_shape_for_int_format() {
        let c = unbounded(CharacteristicFormat::Int);
        assert_eq!(coerce(&c, &json!(-4)), Ok(CharacteristicValue::Int(-4)));
        assert_eq!(coerce(&c, &json!(4)), Ok(CharacteristicValue::UInt(4)));
    }

    #[test]
    fn should_reject_structured_values_for_pass_through() {
        let c = unbounded(CharacteristicFormat::Data);
        assert!(coerce(&c, &json!({"a": 1})).is_err());
        assert!(coerce(&c, &json!([1, 2])).is_err());
        assert!(coerce(&c, &Value::Null).is_err());
    }

    // -- purity --

    #[test]
    fn should_produce_same_outcome_when_repeated() {
        let c = active();
        let first = coerce(&c, &json!(1));
        let second = coerce(&c, &json!(1));
        assert_eq!(first, second);
    }
}
