//! examples of usage of RustedSymDiff
/// symbolic expression construction and differentiation examples
pub mod symbolic_examples;
