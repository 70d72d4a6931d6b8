use crate::{
    comparison::Comparison,
    constraint::Constraint,
    ops::{Logic, MatchPattern},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Range
///
/// A named group of constraints: everything one field must satisfy. A new
/// range always starts with exactly one empty constraint so the first
/// append has a target without an explicit `start_group`. An empty name is
/// a valid anonymous grouping.
///
/// Callers build "AND of (OR of (x, y))"-shaped filters for one field by
/// alternating `start_group` and the convenience appenders.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Range {
    name: String,
    logic: Logic,
    constraints: Vec<Constraint>,
}

impl Range {
    #[must_use]
    pub fn new(name: impl Into<String>, logic: Logic) -> Self {
        Self {
            name: name.into(),
            logic,
            constraints: vec![Constraint::new(Logic::And)],
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn logic(&self) -> Logic {
        self.logic
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Append a fully-built constraint group; it becomes the append target.
    pub fn push(&mut self, constraint: Constraint) -> &mut Self {
        self.constraints.push(constraint);
        self
    }

    /// Begin a fresh, empty constraint group with the given connective and
    /// make it the append target.
    pub fn start_group(&mut self, logic: Logic) -> &mut Self {
        self.constraints.push(Constraint::new(logic));
        self
    }

    /// Append a comparison to the last constraint group.
    pub fn append(&mut self, comparison: Comparison) -> &mut Self {
        // A range is seeded with one constraint and entries are never
        // removed; only a hand-deserialized range can arrive empty.
        if self.constraints.is_empty() {
            self.constraints.push(Constraint::new(Logic::And));
        }
        if let Some(last) = self.constraints.last_mut() {
            last.push(comparison);
        }
        self
    }

    // --- Convenience appenders ---
    //
    // One-line wrappers around `append(Comparison::<factory>(..))`, each
    // using the comparison's default connective (`Logic::And`).

    pub fn equal(&mut self, value: impl Into<Value>) -> &mut Self {
        self.append(Comparison::equal(value, Logic::default()))
    }

    pub fn not_equal(&mut self, value: impl Into<Value>) -> &mut Self {
        self.append(Comparison::not_equal(value, Logic::default()))
    }

    pub fn less_than(&mut self, value: impl Into<Value>) -> &mut Self {
        self.append(Comparison::less_than(value, Logic::default()))
    }

    pub fn less_or_equal(&mut self, value: impl Into<Value>) -> &mut Self {
        self.append(Comparison::less_or_equal(value, Logic::default()))
    }

    pub fn greater_than(&mut self, value: impl Into<Value>) -> &mut Self {
        self.append(Comparison::greater_than(value, Logic::default()))
    }

    pub fn greater_or_equal(&mut self, value: impl Into<Value>) -> &mut Self {
        self.append(Comparison::greater_or_equal(value, Logic::default()))
    }

    pub fn in_iter<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.append(Comparison::in_iter(values, Logic::default()))
    }

    pub fn not_in_iter<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.append(Comparison::not_in_iter(values, Logic::default()))
    }

    pub fn between(&mut self, min: impl Into<Value>, max: impl Into<Value>) -> &mut Self {
        self.append(Comparison::between(min, max, Logic::default()))
    }

    pub fn inclusive(&mut self, min: impl Into<Value>, max: impl Into<Value>) -> &mut Self {
        self.append(Comparison::inclusive(min, max, Logic::default()))
    }

    pub fn is_null(&mut self) -> &mut Self {
        self.append(Comparison::is_null(Logic::default()))
    }

    pub fn is_not_null(&mut self) -> &mut Self {
        self.append(Comparison::is_not_null(Logic::default()))
    }

    pub fn matches(&mut self, value: impl Into<String>, pattern: MatchPattern) -> &mut Self {
        self.append(Comparison::matches(value, pattern, Logic::default()))
    }
}

///
/// TESTS
///
