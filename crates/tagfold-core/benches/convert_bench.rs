use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tagfold_core::Converter;

/// Build a corpus of `sentences` sentences, four tokens each, terminated by
/// boundary records.
fn synthetic_corpus(sentences: usize) -> String {
    let mut corpus = String::new();
    for _ in 0..sentences {
        corpus.push_str("我,PN,B\n爱,VV,B\n北,NR,B\n京,NR,E\n\n");
    }
    corpus
}

fn bench_convert(c: &mut Criterion) {
    let converter = Converter::new();
    let small = synthetic_corpus(10);
    let large = synthetic_corpus(1000);

    c.bench_function("convert_10_sentences", |b| {
        b.iter(|| converter.convert_reader(black_box(small.as_bytes())).unwrap());
    });

    c.bench_function("convert_1000_sentences", |b| {
        b.iter(|| converter.convert_reader(black_box(large.as_bytes())).unwrap());
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
