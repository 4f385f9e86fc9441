use criterion::{Criterion, criterion_group, criterion_main};
use fret_chart_rust::{Instrument, SearchConfig};

use std::hint::black_box;
use std::time::Instant;

fn benchmark_chord_voicings(c: &mut Criterion) {
    let guitar = Instrument::from_preset("Standard guitar").unwrap();
    let wide = Instrument::from_preset("9-string guitar").unwrap();
    let parallel = SearchConfig {
        parallel: true,
        ..SearchConfig::default()
    };
    let wide_parallel = Instrument::from_preset("9-string guitar")
        .unwrap()
        .with_config(parallel);

    c.bench_function("chord_voicings_guitar_m7", |b| {
        b.iter(|| guitar.chord(black_box("A"), black_box("m7"), 0, None).unwrap())
    });

    c.bench_function("chord_voicings_nine_string", |b| {
        b.iter_custom(|iters| {
            let start_time = Instant::now();
            for _ in 0..iters {
                black_box(wide.chord("C", "M", 0, None).unwrap());
            }
            start_time.elapsed()
        })
    });

    c.bench_function("chord_voicings_nine_string_parallel", |b| {
        b.iter(|| wide_parallel.chord(black_box("C"), black_box("M"), 0, None).unwrap())
    });
}

fn benchmark_tracers(c: &mut Criterion) {
    let guitar = Instrument::from_preset("Standard guitar").unwrap();

    c.bench_function("trace_scale_major", |b| {
        b.iter(|| guitar.scale(black_box("D"), black_box("major")).unwrap())
    });
    c.bench_function("trace_arpeggio_dominant", |b| {
        b.iter(|| guitar.arpeggio(black_box("G"), black_box("7")).unwrap())
    });
}

criterion_group!(benches, benchmark_chord_voicings, benchmark_tracers);
criterion_main!(benches);
