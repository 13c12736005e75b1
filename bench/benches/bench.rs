use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lenient_uri::{absolute_to, normalize, parse, relative_to};
use url::Url;

criterion_group!(
    benches,
    bench_parse,
    bench_parse_malformed,
    bench_parse_url,
    bench_serialize,
    bench_normalize,
    bench_resolve,
    bench_resolve_url,
    bench_relativize,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com/search?q=%E6%B5%8B%E8%AF%95#fragment";
const MALFORMED_CASE: &str = "\t hTTps:/\\/\\user:pass:word@EXAMPLE.com\\a/../b?q=1#f";
const NORMALIZE_CASE: &str = "HTTP://www.EXAMPLE.com:80/a/./b/../b/c%20d?__proto__=x&q=1";
const RESOLVE_CASE_BASE: &str = "http://example.com/foo/bar";
const RESOLVE_CASE_REF: &str = "../baz";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| parse(black_box(PARSE_CASE))));
}

fn bench_parse_malformed(c: &mut Criterion) {
    c.bench_function("parse_malformed", |b| {
        b.iter(|| parse(black_box(MALFORMED_CASE)))
    });
}

fn bench_parse_url(c: &mut Criterion) {
    c.bench_function("parse_url", |b| {
        b.iter(|| Url::parse(black_box(PARSE_CASE)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let r = parse(PARSE_CASE);
    c.bench_function("serialize", |b| b.iter(|| black_box(&r).to_string()));
}

fn bench_normalize(c: &mut Criterion) {
    let r = parse(NORMALIZE_CASE);
    c.bench_function("normalize", |b| b.iter(|| normalize(black_box(&r))));
}

fn bench_resolve(c: &mut Criterion) {
    let base = parse(RESOLVE_CASE_BASE);
    let r = parse(RESOLVE_CASE_REF);
    c.bench_function("resolve", |b| b.iter(|| absolute_to(black_box(&r), &base)));
}

fn bench_resolve_url(c: &mut Criterion) {
    let base = Url::parse(RESOLVE_CASE_BASE).unwrap();
    c.bench_function("resolve_url", |b| {
        b.iter(|| base.join(black_box(RESOLVE_CASE_REF)))
    });
}

fn bench_relativize(c: &mut Criterion) {
    let base = parse(RESOLVE_CASE_BASE);
    let r = parse("http://example.com/baz/qux");
    c.bench_function("relativize", |b| b.iter(|| relative_to(black_box(&r), &base)));
}
