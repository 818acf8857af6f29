use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use escape_time_explorer::{
    CanvasSize, ColourSchemeKind, Complex, DEFAULT_JULIA_PARAMETER, EscapeTimeAlgorithm,
    FractalAlgorithm, FractalKind, RenderSettings, View, generate_raster,
};

fn settings(fractal: FractalKind, width: u32, height: u32) -> RenderSettings {
    RenderSettings {
        fractal,
        colour_scheme: ColourSchemeKind::Hot,
        view: View::default(),
        julia: DEFAULT_JULIA_PARAMETER,
        canvas: CanvasSize::new(width, height).expect("bench canvas is valid"),
    }
}

fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_raster");

    for &fractal in FractalKind::ALL {
        let settings = settings(fractal, 320, 240);
        group.throughput(Throughput::Elements(settings.canvas.pixel_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(fractal.selector()),
            &settings,
            |b, &settings| b.iter(|| generate_raster(black_box(settings), |_| {})),
        );
    }

    group.finish();
}

fn bench_escape_time(c: &mut Criterion) {
    let algorithm = EscapeTimeAlgorithm::mandelbrot(1000).expect("bench iterations are valid");

    c.bench_function("continuous_count_interior", |b| {
        b.iter(|| algorithm.compute(black_box(Complex::new(-0.5, 0.0))))
    });
    c.bench_function("continuous_count_boundary", |b| {
        b.iter(|| algorithm.compute(black_box(Complex::new(-0.7436, 0.1318))))
    });
    c.bench_function("escape_count_boundary", |b| {
        b.iter(|| algorithm.escape_count(black_box(Complex::new(-0.7436, 0.1318))))
    });
}

criterion_group!(benches, bench_raster, bench_escape_time);
criterion_main!(benches);
