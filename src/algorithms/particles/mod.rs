/// Implementation of the synchronous Particle Swarm Optimization (PSO) algorithm
pub mod pso;
pub use pso::{SwarmOptimizer, Trajectory};

/// [`SwarmParticle`] type and the initializers used to build a swarm.
pub mod swarm;
pub use swarm::{
    SwarmBoundaryMethod, SwarmParticle, SwarmPositionInitializer, SwarmVelocityInitializer,
};

/// [`SwarmStatus`] type holding the population and the global best.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;
