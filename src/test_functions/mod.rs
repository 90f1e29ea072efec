/// Module containing the sphere test surface.
pub mod sphere;
pub use sphere::Sphere;

/// Module containing the Rastrigin test surface.
pub mod rastrigin;
pub use rastrigin::Rastrigin;

/// Module containing the Rosenbrock test surface.
pub mod rosenbrock;
pub use rosenbrock::Rosenbrock;

/// Module containing the Himmelblau test surface.
pub mod himmelblau;
pub use himmelblau::Himmelblau;
