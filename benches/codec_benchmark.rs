//! Codec Benchmarks
//!
//! Measures pack/unpack throughput. These operations sit on the hot path of
//! message dispatch and cache lookups, so they must stay branch-light and
//! allocation-free.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use peer_codec::{Namespace, PeerId};

fn bench_pack(c: &mut Criterion) {
    c.bench_function("pack", |b| {
        b.iter(|| {
            black_box(PeerId::new(
                black_box(Namespace::User),
                black_box(12345i64),
            ))
        })
    });
}

fn bench_unpack(c: &mut Criterion) {
    let id = PeerId::from_channel_id(1_000_000);
    c.bench_function("unpack", |b| {
        b.iter(|| {
            let id = black_box(id);
            black_box((id.namespace(), id.numeric_id()))
        })
    });
}

fn bench_typed_round_trip(c: &mut Criterion) {
    let id = PeerId::from_secret_chat_id(-7);
    c.bench_function("typed_round_trip", |b| {
        b.iter(|| black_box(black_box(id).unpack().pack()))
    });
}

criterion_group!(benches, bench_pack, bench_unpack, bench_typed_round_trip);
criterion_main!(benches);
