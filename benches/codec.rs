// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use explorant::model::{decode_cluster_label, DiagramElementKey};

mod profiler;

// Group names `codec.key` and `codec.cluster_label`; case ids stay stable across refactors.
fn keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|idx| match idx % 3 {
            0 => format!("{}", idx * 7),
            1 => format!("U{}", 0x1000 + idx * 64),
            _ => format!("C{idx}"),
        })
        .collect()
}

fn cluster_texts(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("cluster_{idx}\n  module_{idx:04}  \n\n")).collect()
}

fn benches_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec.key");
    for count in [1usize, 100, 10_000] {
        let raw = keys(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("decode_{count}"), |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for key in &raw {
                    let decoded = DiagramElementKey::decode(black_box(key)).expect("key");
                    acc = acc.wrapping_add(decoded.entity_id());
                }
                black_box(acc)
            })
        });
    }
    let malformed = ["", "X12", "U", "C1x", "99999999999999999999999"];
    group.bench_function("decode_malformed", |b| {
        b.iter(|| {
            malformed
                .iter()
                .filter(|key| DiagramElementKey::decode(black_box(**key)).is_err())
                .count()
        })
    });
    group.bench_function("display_10000", {
        let decoded = keys(10_000)
            .iter()
            .map(|key| DiagramElementKey::decode(key).expect("key"))
            .collect::<Vec<_>>();
        move |b| {
            b.iter(|| decoded.iter().map(|key| black_box(key.to_string()).len()).sum::<usize>())
        }
    });
    group.finish();

    let mut group = c.benchmark_group("codec.cluster_label");
    let texts = cluster_texts(1_000);
    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("decode_1000", |b| {
        b.iter(|| {
            texts
                .iter()
                .map(|text| decode_cluster_label(black_box(text)).expect("label").len())
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_codec
}
criterion_main!(benches);
