use criterion::{black_box, criterion_group, criterion_main, Criterion};

use intervai_core::analyzer::{count_fillers, Analyzer};
use intervai_core::bank::QuestionBank;

const SHORT_ANSWER: &str = "A stack is LIFO, push and pop from the top. A queue is FIFO, enqueue at the back and dequeue from the front.";

fn long_answer() -> String {
    let sentence = "Well, um, I think a stack is basically like a pile of plates, you know, \
                    where the last item pushed is the first one popped. ";
    sentence.repeat(20)
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let bank = QuestionBank::builtin();
    let analyzer = Analyzer::new(&bank);
    let long = long_answer();

    group.bench_function("empty", |b| {
        b.iter(|| analyzer.analyze(black_box(8), black_box("")))
    });

    group.bench_function("short", |b| {
        b.iter(|| analyzer.analyze(black_box(8), black_box(SHORT_ANSWER)))
    });

    group.bench_function("long_with_fillers", |b| {
        b.iter(|| analyzer.analyze(black_box(8), black_box(&long)))
    });

    group.bench_function("unknown_question", |b| {
        b.iter(|| analyzer.analyze(black_box(999), black_box(SHORT_ANSWER)))
    });

    group.finish();
}

fn bench_fillers(c: &mut Criterion) {
    let long = long_answer().to_lowercase();

    c.bench_function("count_fillers", |b| {
        b.iter(|| count_fillers(black_box(&long)))
    });
}

criterion_group!(benches, bench_analyze, bench_fillers);
criterion_main!(benches);
