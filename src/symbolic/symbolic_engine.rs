//! # Symbolic Engine Module
//!
//! This module provides the core of the symbolic algebra engine: an immutable
//! expression tree over numerical constants and named variables, validated
//! constructors, and rendering of expressions to fully parenthesized strings.
//! It is the foundation for analytical differentiation in the RustedSymDiff
//! crate.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core symbolic expression type supporting:
//! - **Constants**: `Const(f64)` - finite numerical constants
//! - **Variables**: `Var(String)` - symbolic variables like "x", "y"
//! - **Operations**: `Add`, `Mul`, `Pow` - binary composite nodes
//!
//! ### `Operand` Enum
//! The value set a host binding hands to the builders. Builders accept
//! anything convertible into an `Operand`; a single coercion funnel turns
//! numbers into `Const` nodes and rejects everything else.
//!
//! ### Key Methods
//! - `constant(val)` / `variable(name)` - validated leaf constructors
//! - `sum(a, b)` / `product(a, b)` / `power(a, b)` - composite builders with
//!   literal coercion
//! - `Symbols(symbols: &str)` - create multiple variables from a
//!   comma-separated string
//! - `Display` - fully parenthesized rendering, e.g. `((3 * (x**2)) * 1)`
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for nested expressions,
//!    enabling arbitrarily deep tree structures
//!
//! 2. **Operator Overloading**: Implements std::ops traits (Add, Mul, Neg)
//!    for natural mathematical syntax on already-validated trees: `x + y * z`
//!
//! 3. **Total Structural Immutability**: composite nodes own their children;
//!    no operation mutates an existing tree, so shared subtrees may be read
//!    and differentiated concurrently without synchronization
//!
//! 4. **Macro System**: Provides the `symbols!(x, y, z)` macro for ergonomic
//!    variable creation

use crate::symbolic::symbolic_errors::SymbolicError;
use std::fmt;

/// Core symbolic expression enum representing an algebraic formula as an
/// immutable tree.
///
/// Each composite variant exclusively owns its children through `Box<Expr>`.
/// Trees are built bottom-up through the validated constructors, are finite
/// and acyclic by construction, and are never mutated after creation: every
/// transformation returns a new tree.
///
/// # Examples
/// ```rust, ignore
/// use RustedSymDiff::symbolic::symbolic_engine::Expr;
/// let x = Expr::variable("x").unwrap();
/// let expr = Expr::sum(x, 2.0).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numerical constant value, always finite (never NaN or infinite)
    Const(f64),
    /// Symbolic variable with a non-empty name (e.g., "x", "y", "velocity")
    Var(String),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Power operation: base ** exponent
    Pow(Box<Expr>, Box<Expr>),
}

/// Display implementation rendering expressions with full, unconditional
/// parenthesization: every binary node is wrapped, so there is no
/// operator-precedence ambiguity. `Add` renders as `(A + B)`, `Mul` as
/// `(A * B)`, `Pow` as `(A**B)`. Total - rendering never fails.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({}**{})", base, exp),
        }
    }
}

/// Operand accepted by the composite builders.
///
/// Models the dynamic value set a host binding (an interpreter function
/// table, say) would pass: an already-built expression, a raw numeric
/// literal, or some foreign value the engine does not understand. Native
/// Rust callers get the conversions below for free, so `Expr::sum(x, 5.0)`
/// reads naturally.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// An already-constructed expression, passed through unchanged
    Expression(Expr),
    /// A raw numeric literal, coerced to `Const`
    Number(f64),
    /// A textual host value - not a valid operand
    Text(String),
    /// A boolean host value - not a valid operand
    Boolean(bool),
}

impl From<Expr> for Operand {
    fn from(expr: Expr) -> Self {
        Operand::Expression(expr)
    }
}

impl From<&Expr> for Operand {
    fn from(expr: &Expr) -> Self {
        Operand::Expression(expr.clone())
    }
}

impl From<f64> for Operand {
    fn from(val: f64) -> Self {
        Operand::Number(val)
    }
}

impl From<i32> for Operand {
    fn from(val: i32) -> Self {
        Operand::Number(val as f64)
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<bool> for Operand {
    fn from(flag: bool) -> Self {
        Operand::Boolean(flag)
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::Add(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::Mul(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates a constant leaf node.
    ///
    /// # Arguments
    /// * `val` - Numerical value; must be finite
    ///
    /// # Returns
    /// `Expr::Const` on success, `SymbolicError::InvalidConstant` if the
    /// value is NaN or infinite
    pub fn constant(val: f64) -> Result<Expr, SymbolicError> {
        if val.is_finite() {
            Ok(Expr::Const(val))
        } else {
            Err(SymbolicError::InvalidConstant(val))
        }
    }

    /// Creates a variable leaf node.
    ///
    /// # Arguments
    /// * `name` - Variable name; must contain at least one non-whitespace
    ///   character
    ///
    /// # Returns
    /// `Expr::Var` on success, `SymbolicError::InvalidVariableName` on an
    /// empty or blank name
    pub fn variable(name: &str) -> Result<Expr, SymbolicError> {
        if name.trim().is_empty() {
            Err(SymbolicError::InvalidVariableName(name.to_string()))
        } else {
            Ok(Expr::Var(name.to_string()))
        }
    }

    /// Coerces a builder operand into an expression.
    ///
    /// The single conversion funnel used by every composite builder:
    /// expressions pass through, numeric literals become `Const` nodes (via
    /// `constant`, so a non-finite literal fails `InvalidConstant`), and any
    /// other host value fails `UnsupportedOperand`.
    pub fn coerce_operand(operand: Operand) -> Result<Expr, SymbolicError> {
        match operand {
            Operand::Expression(expr) => Ok(expr),
            Operand::Number(val) => Expr::constant(val),
            other => Err(SymbolicError::UnsupportedOperand(format!("{:?}", other))),
        }
    }

    /// Creates a sum node `lhs + rhs`.
    ///
    /// Each operand may be an expression or a raw numeric literal; operands
    /// are moved in, never mutated.
    pub fn sum(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Result<Expr, SymbolicError> {
        Ok(Expr::Add(
            Expr::coerce_operand(lhs.into())?.boxed(),
            Expr::coerce_operand(rhs.into())?.boxed(),
        ))
    }

    /// Creates a product node `lhs * rhs`.
    ///
    /// Same operand contract as `sum`.
    pub fn product(
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
    ) -> Result<Expr, SymbolicError> {
        Ok(Expr::Mul(
            Expr::coerce_operand(lhs.into())?.boxed(),
            Expr::coerce_operand(rhs.into())?.boxed(),
        ))
    }

    /// Creates a power node `base ** exponent`.
    ///
    /// Same operand contract as `sum`. The exponent may be any expression
    /// here; differentiation later requires it to be a constant.
    pub fn power(
        base: impl Into<Operand>,
        exponent: impl Into<Operand>,
    ) -> Result<Expr, SymbolicError> {
        Ok(Expr::Pow(
            Expr::coerce_operand(base.into())?.boxed(),
            Expr::coerce_operand(exponent.into())?.boxed(),
        ))
    }

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// Parses a string containing variable names separated by commas and
    /// returns a vector of Expr::Var instances. Whitespace is automatically
    /// trimmed and empty entries are skipped.
    ///
    /// # Arguments
    /// * `symbols` - Comma-separated string of variable names (e.g., "x, y, z")
    ///
    /// # Returns
    /// Vector of Expr::Var instances for each variable name
    ///
    /// # Examples
    /// ```rust, ignore
    /// let vars = Expr::Symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        let symbols = symbols.to_string();
        let vec_trimmed: Vec<String> = symbols.split(',').map(|s| s.trim().to_string()).collect();
        let vector_of_symbolic_vars: Vec<Expr> = vec_trimmed
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| Expr::Var(s.to_string()))
            .collect();
        vector_of_symbolic_vars
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    ///
    /// Essential for creating nested expressions since Expr variants use Box<Expr>.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Checks if expression is exactly zero (constant 0.0).
    ///
    /// # Returns
    /// true if expression is Const(0.0), false otherwise
    pub fn is_zero(&self) -> bool {
        match self {
            Expr::Const(val) => val == &0.0,
            _ => false,
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Const(_) => false,
            Expr::Var(name) => name == var_name,
            Expr::Add(left, right) | Expr::Mul(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::Pow(base, exp) => {
                base.contains_variable(var_name) || exp.contains_variable(var_name)
            }
        }
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(x, y, z) -> creates variables x, y, z
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        {
            let var_names = stringify!($($var),+);
            let vars = Expr::Symbols(var_names);
            let mut iter = vars.into_iter();
            ($(
                {
                    let $var = iter.next().unwrap();
                    $var
                }
            ),+)
        }
    };
}
