//! # Symbolic Errors Module
//!
//! Error taxonomy for the symbolic engine. Every operation in the engine is a
//! pure function, so each of these is a contract violation surfaced
//! synchronously at the violating call; nothing here is transient and nothing
//! is retried. A host binding layer is expected to translate these into its
//! own exception convention.

use crate::symbolic::symbolic_engine::Expr;
use thiserror::Error;

/// Error type for expression construction and differentiation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SymbolicError {
    /// Constant literal was NaN or infinite
    #[error("constant must be a finite number, got {0}")]
    InvalidConstant(f64),
    /// Variable name was empty or all whitespace
    #[error("variable name must be non-empty, got {0:?}")]
    InvalidVariableName(String),
    /// Builder operand was neither an expression nor a number
    #[error("operand is neither an expression nor a number: {0}")]
    UnsupportedOperand(String),
    /// Differentiation target must be a Var node
    #[error("differentiation target is not a variable: {0}")]
    NotAVariable(Expr),
    /// Power rule requires a constant exponent; d/dx(a^x) is not implemented
    #[error("cannot differentiate power with non-constant exponent: {0}")]
    UnsupportedDifferentiation(Expr),
}
