use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use rand::{thread_rng, Rng};

use lisplet::{env::Env, eval, lexer, parser};

/// Builds a nested literal list, `width` numbers per level.
fn generate_nested(depth: usize, width: usize) -> String {
    let mut rng = thread_rng();
    let mut source = String::new();
    for _ in 0..depth {
        source.push('(');
        for _ in 0..width {
            source.push_str(&format!("{} ", rng.gen_range(0..1000)));
        }
    }
    source.push_str(&")".repeat(depth));
    source
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let source = generate_nested(64, 8);
    let ast = parser::parse_line(&source).expect("nested input parses");
    let call = parser::parse_line("((lambda (x) (first (rest (x x x)))) 42)")
        .expect("call input parses");
    let env = Env::new_global();

    c.bench_function("tokenize", |b| {
        b.iter(|| lexer::tokenize(black_box(&source)))
    });
    c.bench_function("parse", |b| {
        b.iter(|| parser::parse_line(black_box(&source)))
    });
    c.bench_function("eval", |b| b.iter(|| eval::eval(black_box(&ast), &env)));
    c.bench_function("call", |b| b.iter(|| eval::eval(black_box(&call), &env)));
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

criterion_main!(benches);
