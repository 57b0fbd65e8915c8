use RustedSymDiff::symbolic::symbolic_engine::Expr;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// polynomial-like tree: sum of x**k * (x + k) terms, deep enough that the
/// derivative blowup (no simplification) is visible in the timings
fn deep_expression(terms: usize) -> Expr {
    let x = Expr::Var("x".to_string());
    let mut expr = Expr::Const(0.0);
    for k in 1..=terms {
        let term = Expr::Pow(x.clone().boxed(), Expr::Const(k as f64).boxed())
            * (x.clone() + Expr::Const(k as f64));
        expr += term;
    }
    expr
}

fn bench_differentiate(c: &mut Criterion) {
    let expr = deep_expression(20);
    c.bench_function("differentiate 20-term polynomial", |b| {
        b.iter(|| black_box(&expr).diff("x").unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let derivative = deep_expression(20).diff("x").unwrap();
    c.bench_function("render derivative", |b| {
        b.iter(|| black_box(&derivative).to_string())
    });
}

criterion_group!(benches, bench_differentiate, bench_render);
criterion_main!(benches);
