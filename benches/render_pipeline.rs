use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fractal_visualiser::{
    ColourMap, FractalKind, FractalParameters, NamedColour, OutputMode, Resolution, Viewport,
    generate, generate_parallel, sample,
};

fn bench_render_pipeline(c: &mut Criterion) {
    let viewport = Viewport::new(-2.0, -2.0, 4.0, 4.0).unwrap();
    let resolution = Resolution::new(256, 256).unwrap();
    let params = FractalParameters::new(FractalKind::Mandelbrot, 100, true).unwrap();
    let anchors = [NamedColour::Red.rgb(), NamedColour::Black.rgb()];
    let colour_map = ColourMap::build(&anchors, OutputMode::RawByteTriple).unwrap();

    c.bench_function("sample_grid", |b| {
        b.iter(|| sample(black_box(&viewport), resolution));
    });

    c.bench_function("escape_time_sequential", |b| {
        b.iter(|| generate(sample(&viewport, resolution), black_box(&params)));
    });

    c.bench_function("escape_time_parallel", |b| {
        b.iter(|| generate_parallel(sample(&viewport, resolution), black_box(&params)));
    });

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let grid = sample(&viewport, resolution);
            let field = generate_parallel(grid, &params);
            colour_map.evaluate_field(black_box(&field))
        });
    });
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);
