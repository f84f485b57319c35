use diffevol::{CallbackAction, DiffEvolConfigBuilder, DiffEvolProgress, differential_evolution};
use ndarray::Array1;

fn main() {
    env_logger::init();

    // Shifted sphere (3D), minimum 0 at (1, -2, 0.5)
    let target = [1.0, -2.0, 0.5];
    let shifted_sphere = move |x: &Array1<f64>| {
        x.iter()
            .zip(target.iter())
            .map(|(&xi, &ti)| (xi - ti).powi(2))
            .sum::<f64>()
    };

    let bounds = [(-5.0, 5.0); 3];

    // Callback every generation: stop early once the population has collapsed
    let config = DiffEvolConfigBuilder::new()
        .n_pop(30)
        .n_gen(500)
        .f(0.5)
        .c(0.5)
        .seed(0)
        .verbose(true)
        .callback(Box::new(|progress: &DiffEvolProgress| {
            if progress.generation % 25 == 0 {
                eprintln!(
                    "gen {:4}/{:4}  best_f={:.6e}  conv(stdE)={:.3e}",
                    progress.generation, progress.n_gen, progress.best_fitness, progress.convergence
                );
            }
            if progress.convergence < 1e-12 {
                CallbackAction::Stop
            } else {
                CallbackAction::Continue
            }
        }))
        .build()
        .expect("invalid configuration");

    let result = differential_evolution(&shifted_sphere, &bounds, config)
        .expect("optimization failed");

    println!(
        "message=\"{}\" nit={} nfev={}\nbest f={:.6e}\nbest x={:?}",
        result.message(),
        result.nit(),
        result.nfev(),
        result.best_fitness().expect("run completed"),
        result.best_parameters().expect("run completed")
    );
}
