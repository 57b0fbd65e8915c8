//! # Symbolic Engine Derivatives Module
//!
//! This module extends the symbolic engine with analytical differentiation.
//! Derivatives are computed by structural recursion over the expression tree,
//! one rule per node variant, evaluated bottom-up:
//!
//! - Constant rule: d/dx(c) = 0
//! - Variable rule: d/dx(x) = 1, d/dx(y) = 0
//! - Sum rule: d/dx(f + g) = f' + g'
//! - Product rule: d/dx(f * g) = f'*g + f*g'
//! - Power rule: d/dx(f^n) = n*f^(n-1)*f' for constant n, chain rule
//!   included through the trailing multiplication by f'
//!
//! ## Key Methods
//! - `differentiate(&Expr)` - derivative with respect to a variable node,
//!   validating the target
//! - `diff(var: &str)` - recursive rule dispatch by variable name
//!
//! The engine performs **no** simplification: every rule application can grow
//! the tree even where the mathematically reduced answer is smaller
//! (differentiating `x*x` yields `((1 * x) + (x * 1))`, not `2*x`). Each rule
//! stays small, total over its pattern, and independently testable; folding
//! the result is a separate concern that this crate does not take on.
//!
//! Differentiation is a pure, stateless, single-pass transform; the only
//! state is the call stack. Either a complete derivative tree is returned or
//! an error is raised - there is no partial result.

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_errors::SymbolicError;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to
    /// a variable node.
    ///
    /// # Arguments
    /// * `with_respect_to` - Target of differentiation; must be `Expr::Var`
    ///
    /// # Returns
    /// New symbolic expression representing the derivative, or
    /// - `SymbolicError::NotAVariable` if the target is not a variable node
    /// - `SymbolicError::UnsupportedDifferentiation` if a power node with a
    ///   non-constant exponent is encountered anywhere in the tree
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::variable("x")?;
    /// let f = Expr::power(&x, 2.0)?; // x^2
    /// let df_dx = f.differentiate(&x)?; // ((2 * (x**1)) * 1)
    /// ```
    pub fn differentiate(&self, with_respect_to: &Expr) -> Result<Expr, SymbolicError> {
        let Expr::Var(var) = with_respect_to else {
            return Err(SymbolicError::NotAVariable(with_respect_to.clone()));
        };
        self.diff(var)
    }

    /// Recursive rule dispatch: derivative with respect to the variable named
    /// `var`. Variable name comparison is a case-sensitive exact match.
    pub fn diff(&self, var: &str) -> Result<Expr, SymbolicError> {
        match self {
            Expr::Const(_) => Ok(Expr::Const(0.0)),
            Expr::Var(name) => {
                if name == var {
                    Ok(Expr::Const(1.0))
                } else {
                    Ok(Expr::Const(0.0))
                }
            }
            Expr::Add(lhs, rhs) => Ok(Expr::Add(
                Box::new(lhs.diff(var)?),
                Box::new(rhs.diff(var)?),
            )),
            Expr::Mul(lhs, rhs) => Ok(Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)?), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)?))),
            )),
            // n*f^(n-1)*f'; the exponent n-1 is folded numerically, the rest
            // of the tree is left exactly as the rule produces it, including
            // the trailing multiplication by f' even when f' is Const(1.0)
            Expr::Pow(base, exp) => match exp.as_ref() {
                Expr::Const(n) => Ok(Expr::Mul(
                    Box::new(Expr::Mul(
                        Box::new(Expr::Const(*n)),
                        Box::new(Expr::Pow(base.clone(), Box::new(Expr::Const(n - 1.0)))),
                    )),
                    Box::new(base.diff(var)?),
                )),
                _ => Err(SymbolicError::UnsupportedDifferentiation(self.clone())),
            },
        }
    } // end of diff
}
