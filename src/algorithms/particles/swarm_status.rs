use crate::{
    algorithms::particles::SwarmParticle,
    core::{Point, SearchBounds},
    Vector2,
};
use serde::{Deserialize, Serialize};

/// The state of a swarm: its particles, the best position found so far, and some bookkeeping.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SwarmStatus {
    /// The global best position found by all particles
    pub gbest: Point,
    /// The particles, in a fixed order
    pub particles: Vec<SwarmParticle>,
    /// The bounds the swarm was seeded in
    pub bounds: SearchBounds,
    /// The number of completed iterations
    pub n_steps: usize,
    /// The number of fitness evaluations
    pub n_f_evals: usize,
    /// A message containing information about the condition of the swarm
    pub message: String,
}

impl SwarmStatus {
    /// Get the global best position found by the swarm.
    pub const fn get_best(&self) -> &Point {
        &self.gbest
    }
    /// Iterate over the particles' current positions in index order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = &Vector2> + '_ {
        self.particles.iter().map(|particle| &particle.position.x)
    }
    /// Collect the particles' current positions in index order.
    pub fn current_positions(&self) -> Vec<Vector2> {
        self.positions().copied().collect()
    }
    /// Sets the status message.
    pub fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
    /// Replace the global best with any personal best that is strictly better. Personal bests
    /// never get worse, so this is the minimum over every personal best seen so far.
    pub(crate) fn update_global_best(&mut self) {
        for particle in &self.particles {
            if particle.best.improves_on(&self.gbest) {
                self.gbest = particle.best;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::Sphere;

    #[test]
    fn test_update_global_best_picks_minimum() {
        let mut status = SwarmStatus {
            particles: [(3.0, 0.0), (0.5, 0.5), (-2.0, 1.0)]
                .into_iter()
                .map(|(x, y)| SwarmParticle::new(Vector2::new(x, y), Vector2::zeros(), &Sphere))
                .collect(),
            ..Default::default()
        };
        status.update_global_best();
        assert_eq!(status.get_best().x, Vector2::new(0.5, 0.5));
        assert_eq!(status.get_best().fx, Some(0.5));
    }

    #[test]
    fn test_update_global_best_never_worsens() {
        let mut status = SwarmStatus {
            gbest: Point {
                x: Vector2::zeros(),
                fx: Some(0.0),
            },
            particles: vec![SwarmParticle::new(
                Vector2::new(1.0, 1.0),
                Vector2::zeros(),
                &Sphere,
            )],
            ..Default::default()
        };
        status.update_global_best();
        assert_eq!(status.get_best().fx, Some(0.0));
    }

    #[test]
    fn test_positions_in_index_order() {
        let status = SwarmStatus {
            particles: [(1.0, 2.0), (3.0, 4.0)]
                .into_iter()
                .map(|(x, y)| SwarmParticle::new(Vector2::new(x, y), Vector2::zeros(), &Sphere))
                .collect(),
            ..Default::default()
        };
        assert_eq!(status.positions().len(), 2);
        assert_eq!(
            status.current_positions(),
            vec![Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)]
        );
    }
}
