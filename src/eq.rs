//! SameValueZero-style equality for JSON values.

use serde_json::Value;

/// Compare two values for SameValueZero equality.
///
/// Numbers are compared by numeric value, so `1` equals `1.0` even though
/// their `serde_json` representations differ. All other variant pairings fall
/// back to structural equality.
pub fn eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            // Exact integer comparison first, so large integers aren't
            // conflated by the lossy f64 conversion.
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                return a == b;
            }
            if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                return a == b;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => eq_f64(a, b),
                _ => false,
            }
        }
        _ => a == b,
    }
}

/// SameValueZero comparison for floats: `NaN` equals `NaN`.
pub fn eq_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nan_equals_nan() {
        assert!(eq_f64(f64::NAN, f64::NAN));
        assert!(!eq_f64(f64::NAN, 1.0));
        assert!(eq_f64(1.5, 1.5));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(eq(&json!(1), &json!(1.0)));
        assert!(eq(&json!(-3), &json!(-3.0)));
        assert!(!eq(&json!(1), &json!(2)));
        // Distinguishable beyond f64 precision.
        assert!(!eq(&json!(u64::MAX), &json!(u64::MAX - 1)));
    }

    #[test]
    fn other_variants_compare_structurally() {
        assert!(eq(&json!(null), &json!(null)));
        assert!(eq(&json!("a"), &json!("a")));
        assert!(!eq(&json!("a"), &json!("b")));
        assert!(!eq(&json!(null), &json!(0)));
        assert!(eq(&json!([1, 2]), &json!([1, 2])));
        assert!(!eq(&json!({"a": 1}), &json!({"a": 2})));
    }
}
