use calcvis_numeric::{sample, Expression};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_sample_pass(c: &mut Criterion) {
    c.bench_function("sample 200 steps", |b| {
        b.iter(|| sample(black_box("x^3 - 2x^2 + sin(3x)"), -10.0, 10.0, 200))
    });
}

fn bench_parsed_eval(c: &mut Criterion) {
    let expr = Expression::parse("x^3 - 2x^2 + sin(3x)").expect("valid expression");
    c.bench_function("eval parsed", |b| b.iter(|| expr.eval_at(black_box(1.5))));
}

criterion_group!(benches, bench_sample_pass, bench_parsed_eval);
criterion_main!(benches);
