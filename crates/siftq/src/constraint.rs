use crate::{comparison::Comparison, ops::Logic};
use serde::{Deserialize, Serialize};

///
/// Constraint
///
/// An ordered group of comparisons sharing one connective with sibling
/// groups. Owns its comparisons exclusively; built empty and grown only by
/// append. Append order is the left-to-right chain order used when
/// compiling connectives — no dedup, no reordering.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Constraint {
    logic: Logic,
    comparisons: Vec<Comparison>,
}

impl Constraint {
    /// Create an empty constraint group. The connective is fixed for the
    /// lifetime of the group.
    #[must_use]
    pub const fn new(logic: Logic) -> Self {
        Self {
            logic,
            comparisons: Vec::new(),
        }
    }

    /// Append a comparison in call order.
    pub fn push(&mut self, comparison: Comparison) -> &mut Self {
        self.comparisons.push(comparison);
        self
    }

    #[must_use]
    pub const fn logic(&self) -> Logic {
        self.logic
    }

    #[must_use]
    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comparison> {
        self.comparisons.iter()
    }
}

impl<'a> IntoIterator for &'a Constraint {
    type Item = &'a Comparison;
    type IntoIter = std::slice::Iter<'a, Comparison>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparisons.iter()
    }
}

///
/// TESTS
///
