//! Benchmark – `casemark::CaseEncoder` and `casemark::CaseDecoder`
#![allow(missing_docs)]

use std::{hint::black_box, time::Duration};

use casemark::{CaseClassifier, CaseDecoder, CaseEncoder, chunk_utils::produce_chunks};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const WORDS: &[&str] = &[
    "the", "NASA", "Rover", "sent", "HTTP", "McDonald", "école", "ÉCOLE", "data,", "OK.",
];

/// Deterministic mixed-case prose of at most `target_len` bytes, never ending
/// inside a word.
fn make_text(target_len: usize) -> String {
    let mut s = String::with_capacity(target_len);
    for word in WORDS.iter().cycle() {
        if s.len() + word.len() + 1 > target_len {
            break;
        }
        s.push_str(word);
        s.push(' ');
    }
    s
}

fn run_streaming_decoder(stream: &[u8], parts: usize) -> usize {
    let mut decoder = CaseDecoder::new();
    let mut produced = 0usize;
    for chunk in produce_chunks(stream, parts) {
        produced += decoder.feed(chunk).unwrap().len();
    }
    produced + decoder.finish().unwrap().alignment.len()
}

fn bench_encoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("case_encoder");
    for &len in &[1_000usize, 10_000, 100_000] {
        let text = make_text(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| {
                let out = CaseEncoder::encode_with(&mut CaseClassifier, black_box(text.as_bytes()))
                    .unwrap();
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_decoder_split(c: &mut Criterion) {
    let text = make_text(10_000);
    let stream = CaseEncoder::encode_with(&mut CaseClassifier, text.as_bytes())
        .unwrap()
        .text;

    let mut group = c.benchmark_group("case_decoder_split");
    group.throughput(Throughput::Bytes(stream.len() as u64));
    for &parts in &[1usize, 100, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(parts), &parts, |b, &parts| {
            b.iter(|| black_box(run_streaming_decoder(black_box(&stream), parts)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
}

criterion_group! { name = benches; config = criterion(); targets = bench_encoder, bench_decoder_split }
criterion_main!(benches);
