use std::{sync::Arc, thread, time::Duration};

use parking_lot::RwLock;
use tracing::info;

use crate::{
    algorithms::particles::SwarmOptimizer,
    core::{NopAbortSignal, SwarmSummary},
    traits::{AbortSignal, FitnessFunction, SwarmObserver},
};

const DEFAULT_CADENCE: Duration = Duration::from_millis(1000);

/// The perpetual loop which ticks a [`SwarmOptimizer`] and hands every new state to its
/// [`SwarmObserver`]s.
///
/// The driver waits `cadence` between iterations, which is what lets a renderer interpolate
/// between swarm states at its own frame rate. It runs until its [`AbortSignal`] fires, an
/// observer returns [`ControlFlow::Break`](std::ops::ControlFlow::Break), or the optional step
/// limit is reached. Without a limit or a signal, it never stops.
pub struct SwarmDriver<F> {
    /// The optimizer being driven.
    pub optimizer: SwarmOptimizer<F>,
    observers: Vec<Arc<RwLock<dyn SwarmObserver>>>,
    abort_signal: Box<dyn AbortSignal>,
    cadence: Duration,
    max_steps: Option<usize>,
}

impl<F: FitnessFunction> SwarmDriver<F> {
    /// Creates a new [`SwarmDriver`] around the given optimizer, ticking once per second with no
    /// step limit.
    pub fn new(optimizer: SwarmOptimizer<F>) -> Self {
        Self {
            optimizer,
            observers: Vec::default(),
            abort_signal: Box::new(NopAbortSignal),
            cadence: DEFAULT_CADENCE,
            max_steps: None,
        }
    }

    /// Convenience method to use chainable methods to set up the [`SwarmDriver`].
    /// Example usage:
    /// ```rust
    /// use std::time::Duration;
    /// use fastrand::Rng;
    /// use swarm_surface::prelude::*;
    /// use swarm_surface::test_functions::Sphere;
    ///
    /// let optimizer = SwarmOptimizer::new(Sphere, SwarmParameters::default(), Rng::new()).unwrap();
    /// let mut driver = SwarmDriver::new(optimizer)
    ///     .setup(|d| d.with_cadence(Duration::ZERO).with_max_steps(10));
    /// let summary = driver.run();
    /// assert_eq!(summary.n_steps, 10);
    /// ```
    pub fn setup<S>(mut self, mut f: S) -> Self
    where
        S: FnMut(&mut Self) -> &mut Self,
    {
        f(&mut self);
        self
    }

    /// Set the delay between iterations (default: 1000 ms).
    pub fn with_cadence(&mut self, cadence: Duration) -> &mut Self {
        self.cadence = cadence;
        self
    }
    /// Stop after the given number of iterations (default: never).
    pub fn with_max_steps(&mut self, max_steps: usize) -> &mut Self {
        self.max_steps = Some(max_steps);
        self
    }
    /// Set the [`AbortSignal`] of the [`SwarmDriver`].
    pub fn with_abort_signal<A: AbortSignal + 'static>(&mut self, abort_signal: A) -> &mut Self {
        self.abort_signal = Box::new(abort_signal);
        self
    }
    /// Adds a single [`SwarmObserver`] to the [`SwarmDriver`].
    pub fn with_observer<O: SwarmObserver + 'static>(
        &mut self,
        observer: Arc<RwLock<O>>,
    ) -> &mut Self {
        self.observers.push(observer);
        self
    }

    fn notify(&self) -> bool {
        let step = self.optimizer.status().n_steps;
        let mut stop = false;
        for observer in &self.observers {
            stop = observer
                .write()
                .observe(step, self.optimizer.status())
                .is_break()
                || stop;
        }
        stop
    }

    fn steps_left(&self, steps_taken: usize) -> bool {
        self.max_steps.map_or(true, |max_steps| steps_taken < max_steps)
    }

    /// Run the swarm.
    ///
    /// Observers first see the swarm as it currently is, then after every iteration. Before
    /// each iteration the driver sleeps for the configured cadence and checks the abort signal.
    /// The returned [`SwarmSummary`] carries a message describing why the loop ended.
    pub fn run(&mut self) -> SwarmSummary {
        self.abort_signal.reset();
        info!(
            cadence_ms = self.cadence.as_millis() as u64,
            max_steps = ?self.max_steps,
            "starting swarm driver"
        );
        let mut steps_taken = 0;
        let mut observer_termination = self.notify();
        while !observer_termination && self.steps_left(steps_taken) {
            if !self.cadence.is_zero() {
                thread::sleep(self.cadence);
            }
            if self.abort_signal.is_aborted() {
                break;
            }
            self.optimizer.step();
            steps_taken += 1;
            observer_termination = self.notify();
        }
        let message = if self.abort_signal.is_aborted() {
            "Abort signal received"
        } else if observer_termination {
            "Observer requested stop"
        } else {
            "MAX STEPS"
        };
        self.optimizer.update_message(message);
        let summary = SwarmSummary::from(self.optimizer.status());
        info!(
            steps = steps_taken,
            fx = summary.fx,
            reason = message,
            "swarm driver stopped"
        );
        summary
    }
}
