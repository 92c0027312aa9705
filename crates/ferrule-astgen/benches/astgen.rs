use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use ferrule_ast::AstContext;
use ferrule_astgen::generate_ast;
use ferrule_inputs::File;
use ferrule_legacy_parse::{LegacyParser, parse_source_file};
use salsa::DatabaseImpl;

const CODE: &str = r#"
struct Pair[A, B] { first: A, second: B }

fun foo[T](x: Int, p: Pair): (Int, Int) where T: Eq {
    val (a, _) = (x, 1);
    val b: Int = -x * (a + 2);
    if val 0 = a { return (x, b) } else if b > a { g(a, b).c } else { }
    while a < 10 { a = a + 1 }
    loop { bar(a++).baz }
}
"#;

fn benchmark_astgen(c: &mut Criterion) {
    let db = DatabaseImpl::new();
    let file = File::new(&db, "bench.fe".into(), CODE.to_owned());
    let parse = ferrule_parse::parse(CODE);

    let mut group = c.benchmark_group("AST Generation Benchmark");
    group.throughput(Throughput::Bytes(CODE.len() as u64));

    group.bench_function(BenchmarkId::new("generate", "bridged"), |b| {
        b.iter(|| {
            let mut ctx = AstContext::new(&db);
            let buffer = ctx.add_buffer(file);
            black_box(generate_ast(&mut ctx, buffer, parse.tree(), &mut LegacyParser))
        });
    });
    group.bench_function(BenchmarkId::new("generate", "legacy_only"), |b| {
        b.iter(|| {
            let mut ctx = AstContext::new(&db);
            let buffer = ctx.add_buffer(file);
            black_box(parse_source_file(&mut ctx, buffer))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_astgen);
criterion_main!(benches);
