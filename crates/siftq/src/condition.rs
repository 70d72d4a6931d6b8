use crate::{comparison::Comparison, ops::Logic, range::Range, value::Value};
use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error as ThisError;

///
/// NamedValue
///
/// Payload stored under a named shorthand. A `Raw` value is read as an
/// `Eq` comparison when criteria are produced; `Typed` carries the
/// comparison exactly as given.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum NamedValue {
    Raw(Value),
    Typed(Comparison),
}

impl From<Value> for NamedValue {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl From<Comparison> for NamedValue {
    fn from(comparison: Comparison) -> Self {
        Self::Typed(comparison)
    }
}

///
/// ConditionError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConditionError {
    #[error("no named comparison registered for field `{name}`")]
    UnknownField { name: String },
}

///
/// Condition
///
/// Boolean tree node combining named shorthand comparisons, ranges, and
/// nested conditions, enabling arbitrary nesting (AND-of-ORs-of-ANDs).
///
/// Children are owned subtrees, so a condition can never become its own
/// descendant — directly or through a chain. Growth is append-only; the
/// tree is immutable by convention once handed to a compiler, and a
/// finished tree is safe to compile concurrently.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Condition {
    logic: Logic,
    named: Vec<(String, NamedValue)>,
    ranges: Vec<Range>,
    children: Vec<Condition>,
}

impl Condition {
    #[must_use]
    pub const fn new(logic: Logic) -> Self {
        Self {
            logic,
            named: Vec::new(),
            ranges: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub const fn logic(&self) -> Logic {
        self.logic
    }

    #[must_use]
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    #[must_use]
    pub fn sub_conditions(&self) -> &[Self] {
        &self.children
    }

    /// Named shorthand entries in insertion order.
    #[must_use]
    pub fn named_comparisons(&self) -> &[(String, NamedValue)] {
        &self.named
    }

    /// Append a nested condition in call order.
    pub fn add_condition(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Append a range in call order.
    pub fn add_range(&mut self, range: Range) -> &mut Self {
        self.ranges.push(range);
        self
    }

    /// Store a named shorthand. A duplicate name replaces the stored value
    /// in place, keeping its original position.
    pub fn set_comparison(&mut self, name: impl Into<String>, value: impl Into<NamedValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.named.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.named.push((name, value)),
        }
        self
    }

    /// Look up a named shorthand; absence is an error, never a default.
    pub fn comparison(&self, name: &str) -> Result<&NamedValue, ConditionError> {
        self.named
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
            .ok_or_else(|| ConditionError::UnknownField {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn has_comparison(&self, name: &str) -> bool {
        self.named.iter().any(|(existing, _)| existing == name)
    }

    /// The effective child list for compilation, in fixed order: all
    /// sub-conditions, then all ranges, then one synthesized range per
    /// named shorthand. Each category keeps its own call order.
    #[must_use]
    pub fn criteria(&self) -> Criteria<'_> {
        let mut entries =
            Vec::with_capacity(self.children.len() + self.ranges.len() + self.named.len());

        entries.extend(self.children.iter().map(Criterion::Condition));
        entries.extend(
            self.ranges
                .iter()
                .map(|range| Criterion::Range(Cow::Borrowed(range))),
        );
        entries.extend(
            self.named
                .iter()
                .map(|(name, value)| Criterion::Range(Cow::Owned(Self::synthesize(name, value)))),
        );

        Criteria(entries)
    }

    /// Turn one named shorthand into a single-constraint range. The range
    /// carries the comparison's own connective.
    fn synthesize(name: &str, value: &NamedValue) -> Range {
        let comparison = match value {
            NamedValue::Raw(value) => Comparison::equal(value.clone(), Logic::default()),
            NamedValue::Typed(comparison) => comparison.clone(),
        };

        let mut range = Range::new(name, comparison.logic());
        range.append(comparison);
        range
    }
}

///
/// Criterion
///
/// One effective child of a condition: either a nested condition or a
/// range. Synthesized ranges are owned; stored ranges are borrowed.
///

#[derive(Clone, Debug)]
pub enum Criterion<'a> {
    Condition(&'a Condition),
    Range(Cow<'a, Range>),
}

///
/// Criteria
///

#[derive(Clone, Debug, Deref, DerefMut, IntoIterator)]
pub struct Criteria<'a>(Vec<Criterion<'a>>);

///
/// TESTS
///
