use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};

fn benchmark_parser(c: &mut Criterion) {
    let inputs = [
        (
            "Simple",
            r#"
            fun foo() {
                42
            }
            "#,
        ),
        (
            "Medium",
            r#"
            struct Pair[A, B] { first: A, second: B }

            fun foo(x: Int): Int where Int: Eq {
                val (a, _) = (x, 1);
                if val 0 = a { return x } else if true {} else {}
                while a < 10 { a = a + 1 }
                loop { bar(a++).baz }
            }
            "#,
        ),
    ];

    let mut group = c.benchmark_group("Parser Benchmark");

    for (name, code) in inputs {
        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_code", name), code, |b, code| {
            b.iter(|| black_box(ferrule_parse::parse(code)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parser);
criterion_main!(benches);
