use serde::{Deserialize, Serialize};

///
/// Operator vocabulary
///
/// Closed sets of comparison operators, match patterns, and logical
/// connectives. Pure enumeration; all interpretation happens in later
/// passes (tree construction, compilation).
///

///
/// Logic
///
/// The connective a node contributes to its parent's sequence: how it
/// joins its preceding sibling.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Logic {
    #[default]
    And,
    Or,
}

///
/// Comparator
///
/// Operator kind of a single leaf predicate. `Between` and `Inclusive`
/// differ only in boundary inclusivity; both carry a `(min, max)` pair.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Comparator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    NotIn,
    Between,
    Inclusive,
    IsNull,
    IsNotNull,
    Match,
}

///
/// MatchPattern
///
/// Governs wildcard placement when `Match` compiles to a pattern test.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MatchPattern {
    StartsWith,
    EndsWith,
    Contains,
}
