use criterion::{black_box, criterion_group, criterion_main, Criterion};
use riva_ast::ast::*;
use riva_ast::render;

fn name(name: &str) -> ExpressionNode {
    ExpressionNode::Name(name.to_string())
}

fn binary(operator: &str, left: ExpressionNode, right: ExpressionNode) -> ExpressionNode {
    ExpressionNode::Binary(Box::new(BinaryExpressionNode {
        left,
        operator: operator.to_string(),
        right,
    }))
}

/// A left-leaning chain of `n` additions: `x0 + x1 + ... + xn`.
fn additive_chain(n: usize) -> ExpressionNode {
    let mut expr = name("x0");
    for i in 1..=n {
        expr = binary("+", expr, name(&format!("x{i}")));
    }
    expr
}

/// Alternates `+` and `*` down the right spine so every other level needs
/// parentheses.
fn alternating_tree(depth: usize) -> ExpressionNode {
    let mut expr = name("y");
    for level in 0..depth {
        let operator = if level % 2 == 0 { "+" } else { "*" };
        expr = binary(operator, name("y"), expr);
    }
    expr
}

fn wide_array(len: usize) -> ExpressionNode {
    ExpressionNode::Array(ArrayLiteralNode {
        elements: (0..len)
            .map(|i| ExpressionNode::Number(i as f64))
            .collect(),
    })
}

fn bench_render(c: &mut Criterion) {
    let chain = additive_chain(512);
    let alternating = alternating_tree(256);
    let array = wide_array(1024);

    c.bench_function("render_additive_chain_512", |b| {
        b.iter(|| render(black_box(&chain)))
    });
    c.bench_function("render_alternating_tree_256", |b| {
        b.iter(|| render(black_box(&alternating)))
    });
    c.bench_function("render_wide_array_1024", |b| {
        b.iter(|| render(black_box(&array)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
