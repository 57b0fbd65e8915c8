#![allow(non_snake_case)]
/// # Symbolic engine
/// a module
/// 1) builds symbolic expression trees from constants and named variables
/// 2) computes analytical derivatives by structural recursion
/// 3) renders a symbolic expression into a fully parenthesized string for printing and control of results
///# Example#
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::Expr;
/// let x = Expr::variable("x").unwrap();
/// // x^3, exponent given as a raw literal and coerced to a constant node
/// let f = Expr::power(&x, 3.0).unwrap();
/// println!("f = {}", f);
/// // differentiate with respect to x
/// let df_dx = f.differentiate(&x).unwrap();
/// assert_eq!(df_dx.to_string(), "((3 * (x**2)) * 1)");
/// ```
/// Example2#
/// ```
/// use RustedSymDiff::symbolic::symbolic_engine::Expr;
/// use RustedSymDiff::symbols;
/// let (x, y) = symbols!(x, y);
/// // product rule: d/dx(x*y) = 1*y + x*0
/// let f = Expr::product(&x, &y).unwrap();
/// let df_dx = f.differentiate(&x).unwrap();
/// println!("df_dx = {}", df_dx);
/// assert_eq!(df_dx.to_string(), "((1 * y) + (x * 0))");
/// // a symbolic exponent cannot be differentiated
/// let g = Expr::power(2.0, &x).unwrap();
/// assert!(g.differentiate(&x).is_err());
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
///____________________________________________________________________________________________________________________________
/// error taxonomy shared by the constructors and the differentiation engine
/// _____________________________________________________________________________________________________________________________________________
pub mod symbolic_errors;
