//! Lenient deserialization helpers.
//!
//! The host application stores sessions and settings as loosely-typed
//! document blobs. A malformed numeric field must never fail a whole
//! statement, so these deserializers coerce anything unusable to zero
//! (or `false`) instead of raising, and emit a `warn!` so degraded input
//! is still visible in logs.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

/// Deserializes a decimal field, coercing null, strings and malformed
/// values to zero instead of failing.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}

/// Deserializes a boolean field, coercing null and non-boolean values.
///
/// Numbers coerce to `value != 0`, the strings `"true"`/`"false"` to their
/// boolean meaning, everything else to `false`.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_bool(&value))
}

fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else if let Some(f) = n.as_f64() {
                Decimal::from_f64_retain(f).unwrap_or_else(|| {
                    warn!(value = %n, "non-finite numeric field coerced to zero");
                    Decimal::ZERO
                })
            } else {
                warn!(value = %n, "unrepresentable numeric field coerced to zero");
                Decimal::ZERO
            }
        }
        Value::String(s) => Decimal::from_str(s.trim()).unwrap_or_else(|_| {
            warn!(value = %s, "non-numeric string field coerced to zero");
            Decimal::ZERO
        }),
        Value::Null => Decimal::ZERO,
        other => {
            warn!(value = %other, "non-numeric field coerced to zero");
            Decimal::ZERO
        }
    }
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}
