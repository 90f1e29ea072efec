use std::{error::Error, fs::File, io::BufWriter, time::Duration};

use fastrand::Rng;
use serde_pickle::SerOptions;
use swarm_surface::observers::{DebugObserver, TrackingSwarmObserver};
use swarm_surface::prelude::*;
use swarm_surface::test_functions::Rastrigin;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut params = SwarmParameters::default();
    params
        .with_population_size(50)
        .with_search_bounds([(-5.12, 5.12), (-5.12, 5.12)])
        .with_max_velocity(1.0)
        .with_position_initializer(SwarmPositionInitializer::LatinHypercube);
    let optimizer = SwarmOptimizer::new(Rastrigin, params, Rng::new())?;

    let tracker = TrackingSwarmObserver::build();
    let mut driver = SwarmDriver::new(optimizer).setup(|d| {
        d.with_cadence(Duration::from_millis(50))
            .with_max_steps(200)
            .with_abort_signal(CtrlCAbortSignal::new())
            .with_observer(DebugObserver::build())
            .with_observer(tracker.clone())
    });
    let summary = driver.run();
    println!("{}", summary);

    let mut writer = BufWriter::new(File::create("data.pkl")?);
    serde_pickle::to_writer(&mut writer, &*tracker.read(), SerOptions::new())?;
    Ok(())
}
