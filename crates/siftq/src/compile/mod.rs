use crate::{
    comparison::{Comparison, Operand},
    condition::{Condition, Criterion},
    ops::{Comparator, Logic, MatchPattern},
    range::Range,
    value::Value,
};
use thiserror::Error as ThisError;


///
/// Primitive
///
/// Closed vocabulary of leaf operations a backend must realize. `Between`
/// carries boundary inclusivity, so the `Between`/`Inclusive` distinction
/// survives the leaf-emission boundary. `Matches` carries the pattern text
/// with `%` wildcard markers already applied.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Primitive {
    Equals(Value),
    NotEquals(Value),
    LessThan(Value),
    LessOrEqual(Value),
    GreaterThan(Value),
    GreaterOrEqual(Value),
    InSet(Vec<Value>),
    NotInSet(Vec<Value>),
    IsNull,
    IsNotNull,
    Between {
        min: Value,
        max: Value,
        inclusive: bool,
    },
    Matches(String),
}

///
/// CompileError
///
/// Hard failures: compilation aborts immediately, nothing is skipped or
/// silently coerced.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CompileError {
    #[error("operator {0:?} has no backend mapping")]
    UnsupportedOperator(Comparator),

    #[error("match pattern {0:?} has no backend mapping")]
    UnsupportedMatchPattern(MatchPattern),

    #[error("value transform produced a non-text operand for match on field `{field}`")]
    InvalidMatchOperand { field: String },

    #[error("backend rejected operation: {0}")]
    Backend(String),
}

///
/// QueryBackend
///
/// Minimal contract a query engine implements to receive compiled
/// criteria. Groups open and close in strict nesting order; every leaf
/// arrives tagged with the connective joining it to its preceding
/// sibling. A backend that cannot realize a primitive or pattern must
/// fail with `UnsupportedOperator`/`UnsupportedMatchPattern`, never skip.
///

pub trait QueryBackend {
    fn open_group(&mut self, logic: Logic) -> Result<(), CompileError>;

    fn close_group(&mut self) -> Result<(), CompileError>;

    fn emit_leaf(
        &mut self,
        field: &str,
        primitive: Primitive,
        logic: Logic,
    ) -> Result<(), CompileError>;
}

/// Field-name rewrite applied to every leaf before it reaches the backend.
pub type NameTransform = Box<dyn Fn(&str) -> String>;

/// Operand rewrite applied to every leaf value, keyed by the transformed
/// field name. For match leaves it runs on the raw text before wildcard
/// markers are added.
pub type ValueTransform = Box<dyn Fn(Value, &str) -> Value>;

///
/// Compiler
///
/// Depth-first walker over a condition tree. Traversal opens one backend
/// group per condition, per range, and per constraint — balanced even when
/// the node is empty — and emits one leaf per comparison, so an all-empty
/// tree compiles to a well-formed, vacuously-true empty group.
///

pub struct Compiler<'a, B: QueryBackend> {
    backend: &'a mut B,
    name_transform: Option<NameTransform>,
    value_transform: Option<ValueTransform>,
}

impl<'a, B: QueryBackend> Compiler<'a, B> {
    #[must_use]
    pub fn new(backend: &'a mut B) -> Self {
        Self {
            backend,
            name_transform: None,
            value_transform: None,
        }
    }

    /// Install a field-name transform. Identity when absent.
    #[must_use]
    pub fn with_name_transform(mut self, transform: impl Fn(&str) -> String + 'static) -> Self {
        self.name_transform = Some(Box::new(transform));
        self
    }

    /// Install an operand value transform. Identity when absent.
    #[must_use]
    pub fn with_value_transform(
        mut self,
        transform: impl Fn(Value, &str) -> Value + 'static,
    ) -> Self {
        self.value_transform = Some(Box::new(transform));
        self
    }

    /// Compile a condition tree, emitting backend operations bottom-up as
    /// a side effect of traversal.
    pub fn compile(&mut self, condition: &Condition) -> Result<(), CompileError> {
        self.backend.open_group(condition.logic())?;

        for criterion in condition.criteria() {
            match criterion {
                Criterion::Condition(child) => self.compile(child)?,
                Criterion::Range(range) => self.compile_range(range.as_ref())?,
            }
        }

        self.backend.close_group()
    }

    /// Compile a single range: one group for the range, one nested group
    /// per constraint, one leaf per comparison.
    pub fn compile_range(&mut self, range: &Range) -> Result<(), CompileError> {
        self.backend.open_group(range.logic())?;

        let field = self.field_name(range.name());
        for constraint in range.constraints() {
            self.backend.open_group(constraint.logic())?;
            for comparison in constraint {
                let primitive = self.leaf(&field, comparison)?;
                self.backend.emit_leaf(&field, primitive, comparison.logic())?;
            }
            self.backend.close_group()?;
        }

        self.backend.close_group()
    }

    /// Map one comparison onto the backend primitive vocabulary. The
    /// catch-all arm covers operator/operand pairings the factories never
    /// produce (e.g. hand-deserialized trees).
    fn leaf(&self, field: &str, comparison: &Comparison) -> Result<Primitive, CompileError> {
        let comparator = comparison.comparator();

        let primitive = match (comparator, comparison.operand()) {
            (Comparator::Eq, Operand::Scalar(value)) => {
                Primitive::Equals(self.value(value, field))
            }
            (Comparator::Ne, Operand::Scalar(value)) => {
                Primitive::NotEquals(self.value(value, field))
            }
            (Comparator::Lt, Operand::Scalar(value)) => {
                Primitive::LessThan(self.value(value, field))
            }
            (Comparator::Lte, Operand::Scalar(value)) => {
                Primitive::LessOrEqual(self.value(value, field))
            }
            (Comparator::Gt, Operand::Scalar(value)) => {
                Primitive::GreaterThan(self.value(value, field))
            }
            (Comparator::Gte, Operand::Scalar(value)) => {
                Primitive::GreaterOrEqual(self.value(value, field))
            }
            (Comparator::In, Operand::List(values)) => {
                Primitive::InSet(self.values(values, field))
            }
            (Comparator::NotIn, Operand::List(values)) => {
                Primitive::NotInSet(self.values(values, field))
            }
            (Comparator::IsNull, Operand::Unit) => Primitive::IsNull,
            (Comparator::IsNotNull, Operand::Unit) => Primitive::IsNotNull,
            (Comparator::Between, Operand::Bounds { min, max }) => Primitive::Between {
                min: self.value(min, field),
                max: self.value(max, field),
                inclusive: false,
            },
            (Comparator::Inclusive, Operand::Bounds { min, max }) => Primitive::Between {
                min: self.value(min, field),
                max: self.value(max, field),
                inclusive: true,
            },
            (Comparator::Match, Operand::Pattern { value, pattern }) => {
                Primitive::Matches(self.wildcard(field, value, *pattern)?)
            }
            _ => return Err(CompileError::UnsupportedOperator(comparator)),
        };

        Ok(primitive)
    }

    fn field_name(&self, name: &str) -> String {
        match &self.name_transform {
            Some(transform) => transform(name),
            None => name.to_string(),
        }
    }

    fn value(&self, value: &Value, field: &str) -> Value {
        match &self.value_transform {
            Some(transform) => transform(value.clone(), field),
            None => value.clone(),
        }
    }

    fn values(&self, values: &[Value], field: &str) -> Vec<Value> {
        values
            .iter()
            .map(|value| self.value(value, field))
            .collect()
    }

    /// The transform pipeline runs on the raw text before markers are
    /// added; a literal `%` in the value is not escaped, callers must
    /// pre-escape if needed.
    fn wildcard(
        &self,
        field: &str,
        raw: &str,
        pattern: MatchPattern,
    ) -> Result<String, CompileError> {
        let transformed = self.value(&Value::Text(raw.to_string()), field);
        let Value::Text(text) = transformed else {
            return Err(CompileError::InvalidMatchOperand {
                field: field.to_string(),
            });
        };

        Ok(match pattern {
            MatchPattern::Contains => format!("%{text}%"),
            MatchPattern::StartsWith => format!("{text}%"),
            MatchPattern::EndsWith => format!("%{text}"),
        })
    }
}
