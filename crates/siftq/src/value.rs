use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Value
///
/// Scalar operand payload usable in filter leaves.
///
/// Null → the field's value is absent (i.e., SQL NULL).
///
/// Sequence-shaped operands are not a `Value` variant; they live on the
/// operand type so their shape stays tied to the operator.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Bytes(Vec<u8>),
    Float(Float64),
    Int(i64),
    Null,
    Text(String),
    Uint(u64),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(Float64::new(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(Float64::new(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

///
/// Float64
///
/// `f64` wrapper with total ordering (`f64::total_cmp`) so `Value` can be
/// `Eq`. NaN equals NaN under this ordering.
///

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Float64(f64);

impl Float64 {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Float64 {}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_impls_pick_the_expected_variant() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(1i32), Value::Int(1));
        assert_eq!(Value::from(1i64), Value::Int(1));
        assert_eq!(Value::from(1u32), Value::Uint(1));
        assert_eq!(Value::from(1u64), Value::Uint(1));
        assert_eq!(Value::from("a"), Value::Text("a".to_string()));
        assert_eq!(Value::from("a".to_string()), Value::Text("a".to_string()));
        assert_eq!(Value::from(vec![1u8, 2]), Value::Bytes(vec![1, 2]));
        assert_eq!(Value::from(1.5f64), Value::Float(Float64::new(1.5)));
    }

    #[test]
    fn float64_total_order() {
        assert_eq!(Float64::new(f64::NAN), Float64::new(f64::NAN));
        assert!(Float64::new(-0.0) < Float64::new(0.0));
        assert!(Float64::new(1.0) < Float64::new(2.0));
        assert_eq!(Float64::new(1.5), Float64::new(1.5));
    }

    #[test]
    fn value_equality_is_total_over_floats() {
        let nan = Value::from(f64::NAN);
        assert_eq!(nan.clone(), nan);
    }
}
