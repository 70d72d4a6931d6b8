use crate::{
    ops::{Comparator, Logic, MatchPattern},
    value::Value,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Operand
///
/// Operator-determined payload shape. The pairing between a `Comparator`
/// and its `Operand` variant is fixed by the `Comparison` factories; facet
/// accessors fail loudly when asked for a facet the operator does not
/// carry.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Operand {
    /// Single scalar (`Eq`, `Ne`, `Lt`, `Lte`, `Gt`, `Gte`).
    Scalar(Value),
    /// Ordered value sequence (`In`, `NotIn`). Duplicates permitted;
    /// order is irrelevant to semantics but preserved for determinism.
    List(Vec<Value>),
    /// Two-sided bounds (`Between`, `Inclusive`). No `min <= max` check;
    /// that is the caller's responsibility.
    Bounds { min: Value, max: Value },
    /// Raw text plus wildcard placement (`Match`).
    Pattern { value: String, pattern: MatchPattern },
    /// No payload (`IsNull`, `IsNotNull`).
    Unit,
}

///
/// OperandError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum OperandError {
    #[error("accessor `{accessor}` does not apply to operator {comparator:?}")]
    InvalidAccess {
        comparator: Comparator,
        accessor: &'static str,
    },
}

///
/// Comparison
///
/// One operator applied to one operand payload, tagged with the connective
/// joining it to its preceding sibling. Fields are private and the
/// factories are the only constructors, so the operator/operand pairing
/// holds by construction.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Comparison {
    comparator: Comparator,
    operand: Operand,
    logic: Logic,
}

impl Comparison {
    const fn new(comparator: Comparator, operand: Operand, logic: Logic) -> Self {
        Self {
            comparator,
            operand,
            logic,
        }
    }

    // --- Equality ---

    #[must_use]
    pub fn equal(value: impl Into<Value>, logic: Logic) -> Self {
        Self::new(Comparator::Eq, Operand::Scalar(value.into()), logic)
    }

    #[must_use]
    pub fn not_equal(value: impl Into<Value>, logic: Logic) -> Self {
        Self::new(Comparator::Ne, Operand::Scalar(value.into()), logic)
    }

    // --- Ordering ---

    #[must_use]
    pub fn less_than(value: impl Into<Value>, logic: Logic) -> Self {
        Self::new(Comparator::Lt, Operand::Scalar(value.into()), logic)
    }

    #[must_use]
    pub fn less_or_equal(value: impl Into<Value>, logic: Logic) -> Self {
        Self::new(Comparator::Lte, Operand::Scalar(value.into()), logic)
    }

    #[must_use]
    pub fn greater_than(value: impl Into<Value>, logic: Logic) -> Self {
        Self::new(Comparator::Gt, Operand::Scalar(value.into()), logic)
    }

    #[must_use]
    pub fn greater_or_equal(value: impl Into<Value>, logic: Logic) -> Self {
        Self::new(Comparator::Gte, Operand::Scalar(value.into()), logic)
    }

    // --- Membership ---

    #[must_use]
    pub fn in_iter<I>(values: I, logic: Logic) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::new(
            Comparator::In,
            Operand::List(values.into_iter().map(Into::into).collect()),
            logic,
        )
    }

    #[must_use]
    pub fn not_in_iter<I>(values: I, logic: Logic) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::new(
            Comparator::NotIn,
            Operand::List(values.into_iter().map(Into::into).collect()),
            logic,
        )
    }

    // --- Bounds ---

    #[must_use]
    pub fn between(min: impl Into<Value>, max: impl Into<Value>, logic: Logic) -> Self {
        Self::new(
            Comparator::Between,
            Operand::Bounds {
                min: min.into(),
                max: max.into(),
            },
            logic,
        )
    }

    #[must_use]
    pub fn inclusive(min: impl Into<Value>, max: impl Into<Value>, logic: Logic) -> Self {
        Self::new(
            Comparator::Inclusive,
            Operand::Bounds {
                min: min.into(),
                max: max.into(),
            },
            logic,
        )
    }

    // --- Nullity ---

    #[must_use]
    pub const fn is_null(logic: Logic) -> Self {
        Self::new(Comparator::IsNull, Operand::Unit, logic)
    }

    #[must_use]
    pub const fn is_not_null(logic: Logic) -> Self {
        Self::new(Comparator::IsNotNull, Operand::Unit, logic)
    }

    // --- Pattern ---

    #[must_use]
    pub fn matches(value: impl Into<String>, pattern: MatchPattern, logic: Logic) -> Self {
        Self::new(
            Comparator::Match,
            Operand::Pattern {
                value: value.into(),
                pattern,
            },
            logic,
        )
    }

    // --- Accessors ---

    #[must_use]
    pub const fn comparator(&self) -> Comparator {
        self.comparator
    }

    #[must_use]
    pub const fn logic(&self) -> Logic {
        self.logic
    }

    #[must_use]
    pub const fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Scalar operand (`Eq`, `Ne`, `Lt`, `Lte`, `Gt`, `Gte` only).
    pub fn value(&self) -> Result<&Value, OperandError> {
        match &self.operand {
            Operand::Scalar(value) => Ok(value),
            _ => Err(self.invalid_access("value")),
        }
    }

    /// Sequence operand (`In`, `NotIn` only).
    pub fn values(&self) -> Result<&[Value], OperandError> {
        match &self.operand {
            Operand::List(values) => Ok(values),
            _ => Err(self.invalid_access("values")),
        }
    }

    /// Lower bound (`Between`, `Inclusive` only).
    pub fn min(&self) -> Result<&Value, OperandError> {
        match &self.operand {
            Operand::Bounds { min, .. } => Ok(min),
            _ => Err(self.invalid_access("min")),
        }
    }

    /// Upper bound (`Between`, `Inclusive` only).
    pub fn max(&self) -> Result<&Value, OperandError> {
        match &self.operand {
            Operand::Bounds { max, .. } => Ok(max),
            _ => Err(self.invalid_access("max")),
        }
    }

    /// Raw pattern text (`Match` only), before wildcard markers.
    pub fn match_value(&self) -> Result<&str, OperandError> {
        match &self.operand {
            Operand::Pattern { value, .. } => Ok(value),
            _ => Err(self.invalid_access("match_value")),
        }
    }

    /// Wildcard placement (`Match` only).
    pub fn match_pattern(&self) -> Result<MatchPattern, OperandError> {
        match &self.operand {
            Operand::Pattern { pattern, .. } => Ok(*pattern),
            _ => Err(self.invalid_access("match_pattern")),
        }
    }

    const fn invalid_access(&self, accessor: &'static str) -> OperandError {
        OperandError::InvalidAccess {
            comparator: self.comparator,
            accessor,
        }
    }
}

///
/// TESTS
///
