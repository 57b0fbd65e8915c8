// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::symbolic::symbolic_engine::Expr;
use crate::symbols;
use log::info;

#[allow(dead_code)]
pub fn sym_diff_examples(example: usize) {
    match example {
        0 => {
            // POWER RULE
            // build x^3 directly from a variable and a raw literal
            let x = Expr::variable("x").unwrap();
            let f = Expr::power(&x, 3.0).unwrap();
            println!("f = {}", f);
            // differentiate with respect to x
            let df_dx = f.differentiate(&x).unwrap();
            println!("df_dx = {}", df_dx);
            info!("power rule: d/dx({}) = {}", f, df_dx);
        }
        1 => {
            // SUM AND PRODUCT RULES
            let (x, y) = symbols!(x, y);
            // f = x*x + x*y, built with operator sugar
            let f = x.clone() * x.clone() + x.clone() * y.clone();
            println!("f = {}", f);
            let df_dx = f.differentiate(&x).unwrap();
            let df_dy = f.differentiate(&y).unwrap();
            println!("df_dx = {}", df_dx);
            println!("df_dy = {}", df_dy);
            // no simplification: zero and one terms are kept as produced
            let d2f_dx2 = df_dx.differentiate(&x).unwrap();
            println!("d2f_dx2 = {}", d2f_dx2);
        }
        2 => {
            // FAILURE MODES
            let x = Expr::variable("x").unwrap();
            // symbolic exponent: d/dx(2^x) is intentionally unimplemented
            let g = Expr::power(2.0, &x).unwrap();
            match g.differentiate(&x) {
                Ok(dg) => println!("dg = {}", dg),
                Err(e) => println!("differentiation failed: {}", e),
            }
            // operand that is neither an expression nor a number
            match Expr::sum(&x, "5") {
                Ok(expr) => println!("expr = {}", expr),
                Err(e) => println!("construction failed: {}", e),
            }
            // non-finite literal
            match Expr::constant(f64::NAN) {
                Ok(c) => println!("c = {}", c),
                Err(e) => println!("construction failed: {}", e),
            }
        }
        _ => {
            println!("example {} not found", example);
        }
    }
}
