//! Backend-agnostic filter criteria: a serializable condition tree of
//! comparisons, constraints, and ranges, plus a compiler that walks the
//! tree and emits grouped leaf operations to any [`compile::QueryBackend`].

pub mod comparison;
pub mod compile;
pub mod condition;
pub mod constraint;
pub mod error;
pub mod ops;
pub mod range;
pub mod value;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        comparison::Comparison,
        compile::{Compiler, Primitive, QueryBackend},
        condition::{Condition, NamedValue},
        constraint::Constraint,
        ops::{Comparator, Logic, MatchPattern},
        range::Range,
        value::Value,
    };
}
