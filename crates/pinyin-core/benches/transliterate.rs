use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pinyin_core::dict::CharDictionary;
use pinyin_core::transliterate::{
    transform_ucwords, transform_with_tone, transform_without_tone, TransformOptions,
};

const TABLE: &str = ",天tiān,气qì,很hěn,好hǎo,今jīn,日rì,我wǒ,们men,去qù,公gōng,园yuán,散sàn,步bù,吧ba,";

const INPUTS: &[(&str, &str)] = &[
    ("short", "今天"),
    ("sentence", "今日天气很好，我们去公园散步吧。"),
    ("mixed", "Today 天气 is 很好, let's 去公园 walk!"),
];

fn bench_transliterate(c: &mut Criterion) {
    let dict = CharDictionary::parse(TABLE);
    let with_tone = TransformOptions::with_tone();
    let without_tone = TransformOptions::without_tone();

    let mut group = c.benchmark_group("transliterate");
    for &(label, input) in INPUTS {
        group.bench_with_input(BenchmarkId::new("with_tone", label), input, |b, input| {
            b.iter(|| transform_with_tone(&dict, input, &with_tone))
        });
        group.bench_with_input(BenchmarkId::new("without_tone", label), input, |b, input| {
            b.iter(|| transform_without_tone(&dict, input, &without_tone))
        });
        group.bench_with_input(BenchmarkId::new("ucwords", label), input, |b, input| {
            b.iter(|| transform_ucwords(&dict, input, ""))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let table: String = TABLE.repeat(1000);
    c.bench_function("parse_dictionary", |b| b.iter(|| CharDictionary::parse(&table)));
}

criterion_group!(benches, bench_transliterate, bench_parse);
criterion_main!(benches);
