use byte_huffman::HuffmanCodec;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_text() -> Vec<u8> {
    "Huffman encoding is a greedy algorithm that builds optimal prefix codes. "
        .repeat(512)
        .into_bytes()
}

fn huffman_compression(c: &mut Criterion) {
    let input = sample_text();
    let codec = HuffmanCodec::new();

    c.bench_function("huffman compression", |b| {
        b.iter(|| codec.compress(black_box(&input)))
    });
}

fn huffman_decompression(c: &mut Criterion) {
    let input = sample_text();
    let codec = HuffmanCodec::new();
    let compressed = codec.compress(&input).unwrap();

    c.bench_function("huffman decompression", |b| {
        b.iter(|| codec.decompress(black_box(&compressed)))
    });
}

criterion_group!(benches, huffman_compression, huffman_decompression);
criterion_main!(benches);
