//! # Veldt - Predator/Prey Neuroevolution Arena
//!
//! A discrete-time simulation of prey and predator agents in a toroidal 2D
//! arena. Each agent is steered by a tiny feed-forward neural network; prey
//! chase food, predators chase prey (and occasionally each other), and every
//! thirty simulated seconds the fittest half of each species is cloned and
//! mutated into the next generation.
//!
//! ## Features
//!
//! - Neural network brains (two-layer MLP with tanh activation, no biases)
//! - Truncation selection with pristine-clone + mutated-clone offspring pairs
//! - Predator feeding state machine (kills must be guarded to pay out)
//! - Intraspecies predator combat under energy pressure
//! - Deterministic, seedable simulation runs
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Neural network implementation
//! - [`simulation::prey`] - Prey behavior and state
//! - [`simulation::predator`] - Predator behavior, feeding, and combat
//! - [`simulation::world`] - World state, tick loop, and reproduction
//! - [`simulation::food`] - Food items that prey consume

/// Core simulation logic and data structures.
pub mod simulation {
    /// Neural network implementation for agent brains.
    pub mod brain;
    /// Food items that prey can consume.
    pub mod food;
    /// Geometric helpers: distances, bearings, toroidal wrapping, steering.
    pub mod geometry;
    /// Trait for locatable entities and nearest-neighbor scans.
    ///
    /// The [`locatable::Locatable`] trait is implemented by every entity
    /// with a position and a liveness status (Food, Prey, Predator), so
    /// nearest-food and nearest-agent queries share one code path.
    pub mod locatable;
    /// Simulation parameters, defaults, and validation.
    pub mod params;
    /// Predator behavior, state, and lifecycle.
    pub mod predator;
    /// Prey behavior, state, and lifecycle.
    pub mod prey;
    /// World state: collections, per-tick updates, and generations.
    pub mod world;
}
