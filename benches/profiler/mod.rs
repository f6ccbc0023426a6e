// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion tuned by `EXPLORANT_BENCH_*` variables, with flamegraph profiling on `--profile-time`.
pub fn criterion() -> Criterion {
    let frequency = env_or::<i32>("EXPLORANT_BENCH_PROFILE_FREQ", 100).clamp(1, 1000);
    let sample_size = env_or::<usize>("EXPLORANT_BENCH_SAMPLES", 50).clamp(10, 200);
    let warmup_secs = env_or::<u64>("EXPLORANT_BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement_secs = env_or::<u64>("EXPLORANT_BENCH_MEASURE_SECS", 4).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
