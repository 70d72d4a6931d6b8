use crate::{compile::CompileError, comparison::OperandError, condition::ConditionError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for the crate. Each stage keeps its own error type;
/// this wrapper exists for callers that thread everything through one
/// `Result`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Operand(#[from] OperandError),
}
