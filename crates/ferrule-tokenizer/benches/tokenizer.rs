use codspeed_criterion_compat::{
    Criterion, Throughput, black_box, criterion_group, criterion_main,
};

static SOURCE: &str = r#"
fun f[T](a: T, b) { val _ = a + -b; return a++ /* done */ }
struct Point { x: Int, y: Int } // trailing
while i < 10 { i = i + 1 }
if val (x, 0) = pair { "string \" literal" } else { 1.5e3 }
"#;

static IDENTIFIERS: &str = "It was the year when they finally immanentized the Eschaton \
     It was the year when they finally immanentized the Eschaton \
     It was the year when they finally immanentized the Eschaton";

fn iterate(s: &str) {
    use ferrule_tokenizer::{SyntaxKind, Tokenizer};

    let mut tokenizer = Tokenizer::new(s);

    loop {
        let token = tokenizer.next_token();
        if token.kind == SyntaxKind::EOF {
            break;
        }
        black_box(token);
    }
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    let source = SOURCE.repeat(32);
    let candidates = [("identifiers", IDENTIFIERS), ("mixed_source", source.as_str())];
    for (name, source) in candidates {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| iterate(s)));
    }
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
