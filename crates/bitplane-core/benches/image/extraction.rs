use bitplane_core::{extract, BitDepth, ChannelLayout, Image, OutputMode};
use criterion::{criterion_group, criterion_main, Criterion};

pub fn image_extraction(c: &mut Criterion) {
    let stego = Image::from_fn(512, 512, ChannelLayout::Rgb, |x, y, ch| {
        (x * 3 + y) as u8 ^ ch as u8
    })
    .expect("Cannot create stego image");
    let k = BitDepth::new(4).unwrap();

    c.bench_function("Image Extraction RGB", |b| {
        b.iter(|| extract(&stego, k, OutputMode::Rgb).expect("Cannot extract payload"))
    });
    c.bench_function("Image Extraction Grayscale", |b| {
        b.iter(|| extract(&stego, k, OutputMode::Grayscale).expect("Cannot extract payload"))
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
