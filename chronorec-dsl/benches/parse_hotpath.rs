use chronorec_dsl::{parse_records_text, print_records, sort_records, sort_records_text};
use chronorec_test_utils::many_records_text;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const RECORD_MIN: &str = "BEGIN:RECORD\nIDENTIFIER:a\nTIME:19980118T230000\nEND:RECORD";

fn bench_parse(c: &mut Criterion) {
    let many = many_records_text(1024);

    c.bench_function("records/parse_min", |b| {
        b.iter(|| {
            let records = parse_records_text(black_box(RECORD_MIN)).expect("parse records");
            black_box(records.len());
        });
    });

    c.bench_function("records/parse_1024", |b| {
        b.iter(|| {
            let records = parse_records_text(black_box(&many)).expect("parse records");
            black_box(records.len());
        });
    });
}

fn bench_sort_print(c: &mut Criterion) {
    let many = many_records_text(1024);
    let records = parse_records_text(&many).expect("parse records");

    c.bench_function("records/sort_print_1024", |b| {
        b.iter(|| {
            let sorted = sort_records(black_box(records.clone()));
            black_box(print_records(&sorted));
        });
    });

    c.bench_function("records/pipeline_1024", |b| {
        b.iter(|| {
            let output = sort_records_text(black_box(&many)).expect("sort records");
            black_box(output.len());
        });
    });
}

criterion_group!(benches, bench_parse, bench_sort_print);
criterion_main!(benches);
