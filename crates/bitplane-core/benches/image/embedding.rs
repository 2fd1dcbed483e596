use bitplane_core::{embed, BitDepth, ChannelLayout, Image};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

pub fn image_embedding(c: &mut Criterion) {
    let carrier = Image::from_fn(512, 512, ChannelLayout::Rgb, |x, y, ch| (x ^ y) as u8 ^ ch as u8)
        .expect("Cannot create carrier image");
    let payload = Image::from_fn(512, 512, ChannelLayout::Rgb, |x, y, ch| (x + y) as u8 + ch as u8)
        .expect("Cannot create payload image");

    let mut group = c.benchmark_group("Image Embedding");
    for k in [BitDepth::MIN, BitDepth::new(4).unwrap(), BitDepth::MAX] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| embed(&carrier, &payload, k).expect("Cannot embed payload"))
        });
    }
    group.finish();
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
