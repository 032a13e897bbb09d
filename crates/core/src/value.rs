//! Value types for OverlayDB
//!
//! This module defines:
//! - Value: unified enum for all scalar data types
//!
//! ## Value Model
//!
//! The Value enum has exactly 4 scalar variants: Bool, Int, Float, String.
//!
//! ### Type Rules
//!
//! - No implicit type coercions
//! - `Int(1) != Float(1.0)` - different types are NEVER equal
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//!
//! "Key not found" is never represented as a Value: reads return
//! `Option<Value>` and absence is `None`.

use serde::{Deserialize, Serialize};

/// Canonical scalar value type for all API surfaces
///
/// ## Type Equality
///
/// Different types are NEVER equal, even if they contain the same "value":
/// - `Int(1) != Float(1.0)`
///
/// Float equality follows IEEE-754 semantics:
/// - `NaN != NaN`
/// - `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            // Different types are NEVER equal
            _ => false,
        }
    }
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
        }
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if this is a float value
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a string value
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bool() {
        let value_true = Value::Bool(true);
        let value_false = Value::Bool(false);

        assert!(value_true.is_bool());
        assert!(value_false.is_bool());
        assert_eq!(value_true.as_bool(), Some(true));
        assert_eq!(value_false.as_bool(), Some(false));
    }

    #[test]
    fn test_value_int() {
        let value = Value::Int(42);
        assert!(value.is_int());
        assert_eq!(value.as_int(), Some(42));

        let negative = Value::Int(-100);
        assert_eq!(negative.as_int(), Some(-100));
    }

    #[test]
    fn test_value_float() {
        let value = Value::Float(3.14);
        assert!(value.is_float());

        if let Some(f) = value.as_float() {
            assert!((f - 3.14).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_value_string() {
        let value = Value::String("hello world".to_string());
        assert!(value.is_string());
        assert_eq!(value.as_str(), Some("hello world"));
    }

    #[test]
    fn test_int_not_equal_float() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    // IEEE-754 float equality
    #[test]
    fn test_nan_not_equal_nan() {
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
    }

    #[test]
    fn test_float_infinity() {
        let pos_inf = Value::Float(f64::INFINITY);
        let neg_inf = Value::Float(f64::NEG_INFINITY);
        assert_eq!(pos_inf, Value::Float(f64::INFINITY));
        assert_ne!(pos_inf, neg_inf);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Bool(true).type_name(), "Bool");
        assert_eq!(Value::Int(1).type_name(), "Int");
        assert_eq!(Value::Float(1.0).type_name(), "Float");
        assert_eq!(Value::String(String::new()).type_name(), "String");
    }

    // ====================================================================
    // From conversions
    // ====================================================================

    #[test]
    fn test_from_i64() {
        let v: Value = 42i64.into();
        assert_eq!(v, Value::Int(42));
    }

    #[test]
    fn test_from_i32() {
        let v: Value = 42i32.into();
        assert_eq!(v, Value::Int(42));
    }

    #[test]
    fn test_from_f64() {
        let v: Value = 3.14f64.into();
        assert!(matches!(v, Value::Float(f) if (f - 3.14).abs() < f64::EPSILON));
    }

    #[test]
    fn test_from_f32() {
        let v: Value = 2.5f32.into();
        // Verify the actual value is preserved through f32->f64 promotion
        assert_eq!(v.as_float().unwrap(), 2.5);
    }

    #[test]
    fn test_from_bool() {
        let v: Value = true.into();
        assert_eq!(v, Value::Bool(true));
    }

    #[test]
    fn test_from_string() {
        let v: Value = String::from("hello").into();
        assert_eq!(v, Value::String("hello".to_string()));
    }

    #[test]
    fn test_from_str_ref() {
        let v: Value = "hello".into();
        assert_eq!(v, Value::String("hello".to_string()));
    }

    // ====================================================================
    // as_* returns None for wrong types
    // ====================================================================

    #[test]
    fn test_as_wrong_type_returns_none() {
        let v = Value::Int(42);
        assert!(v.as_bool().is_none());
        assert!(v.as_float().is_none());
        assert!(v.as_str().is_none());

        let v = Value::String("hello".to_string());
        assert!(v.as_int().is_none());
        assert!(v.as_bool().is_none());
        assert!(v.as_float().is_none());
    }

    #[test]
    fn test_empty_string() {
        let v = Value::String(String::new());
        assert!(v.is_string());
        assert_eq!(v.as_str(), Some(""));
    }

    // ====================================================================
    // serde round-trips
    // ====================================================================

    #[test]
    fn test_value_serialization_all_variants() {
        let test_values = vec![
            Value::Bool(true),
            Value::Int(42),
            Value::Float(3.14),
            Value::String("test".to_string()),
        ];

        for value in test_values {
            let serialized = serde_json::to_string(&value).unwrap();
            let deserialized: Value = serde_json::from_str(&serialized).unwrap();
            assert_eq!(value, deserialized);
        }
    }

    #[test]
    fn test_value_debug() {
        let v = Value::Int(42);
        let debug = format!("{:?}", v);
        assert!(debug.contains("42"));
    }
}
