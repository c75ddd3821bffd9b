use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rtchart_core::{Chart, ChartOptions, PointerEvent, PointerSample, Sample, ThemeDescriptor};

fn bench_pointer(c: &mut Criterion) {
    let samples = (0..1_440i64)
        .map(|i| Sample::new(1_704_103_200_000 + i * 60_000, 200.0 + (i % 40) as f64))
        .collect::<Vec<_>>();
    let mut chart = Chart::new(ChartOptions::default(), ThemeDescriptor::light());
    chart.set_samples(&samples);
    chart.resize(1_200.0);

    c.bench_function("pointer_move_1440", |b| {
        let mut x = 48.0f32;
        b.iter(|| {
            x = if x > 1_150.0 { 48.0 } else { x + 3.7 };
            black_box(chart.pointer(PointerEvent::Move(PointerSample::mouse(x, 120.0))))
        });
    });
}

criterion_group!(benches, bench_pointer);
criterion_main!(benches);
