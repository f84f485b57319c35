use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use diffevol::{DiffEvolConfigBuilder, differential_evolution};
use ndarray::Array1;
use std::hint::black_box;

fn rastrigin(x: &Array1<f64>) -> f64 {
    let a = 10.0;
    a * x.len() as f64
        + x.iter()
            .map(|&xi| xi * xi - a * (2.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>()
}

fn bench_rastrigin_dims(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand1bin_rastrigin");
    for dim in [2usize, 5, 10] {
        let bounds = vec![(-5.12, 5.12); dim];
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, &dim| {
            b.iter(|| {
                let config = DiffEvolConfigBuilder::new()
                    .n_pop(10 * dim)
                    .n_gen(100)
                    .f(0.5)
                    .c(0.9)
                    .seed(42)
                    .verbose(false)
                    .build()
                    .expect("valid configuration");
                let result = differential_evolution(&rastrigin, &bounds, config)
                    .expect("valid bounds");
                black_box(result.best_fitness())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rastrigin_dims);
criterion_main!(benches);
