//! Simulation parameters, defaults, validation, and config-file loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors produced while building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A population size is zero.
    #[error("population sizes must be positive (prey={prey}, predators={predators}, food={food})")]
    EmptyPopulation {
        /// Configured prey population.
        prey: usize,
        /// Configured predator population.
        predators: usize,
        /// Configured food count.
        food: usize,
    },
    /// The arena has a non-positive dimension.
    #[error("arena dimensions must be positive (got {width}x{height})")]
    InvalidArena {
        /// Configured arena width.
        width: f32,
        /// Configured arena height.
        height: f32,
    },
    /// The generation window is non-positive.
    #[error("generation time must be positive (got {0})")]
    InvalidGenerationTime(f32),
    /// A movement or contact tunable is non-positive.
    #[error("{name} must be positive (got {value})")]
    InvalidTunable {
        /// Name of the offending field.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// The config file could not be read.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The config file could not be parsed.
    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),
}

/// Simulation parameters that control arena, populations, and energy flow.
///
/// Every field has a default matching the reference configuration; a JSON
/// config file may override any subset of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Arena width.
    pub box_width: f32,
    /// Arena height.
    pub box_height: f32,
    /// Prey population target (offspring cap is half of this, doubled).
    pub n_prey: usize,
    /// Predator population target.
    pub n_predator: usize,
    /// Food items spawned at world creation and at each generation boundary.
    pub n_food: usize,
    /// Generation length in simulated seconds.
    pub generation_time: f32,
    /// Scale of the Gaussian weight noise applied to mutated offspring.
    pub mutation_rate: f32,
    /// Contact distance for feeding, predation, kill-site tending, and combat.
    pub capture_radius: f32,
    /// Energy a prey spends per active tick.
    pub prey_move_cost: f32,
    /// Energy a predator spends per active hunting tick.
    pub predator_move_cost: f32,
    /// Energy gained by a prey per food item.
    pub food_energy: f32,
    /// Energy a predator gains for a fully guarded kill.
    pub feed_energy: f32,
    /// Ticks a predator must stay at a kill site before feeding pays out.
    pub feed_duration: u32,
    /// Energy the winner of a predator-vs-predator fight takes.
    pub combat_energy: f32,
    /// Predators only initiate combat below this energy level.
    pub combat_threshold: f32,
    /// Radians of heading change per unit of brain turn output.
    pub turn_rate: f32,
    /// Distance per tick at full thrust.
    pub max_speed: f32,
    /// Energy every agent starts with; also the energy normalization base.
    pub start_energy: f32,
    /// Initial pacing in ticks per real-time second. Cosmetic only.
    pub sim_speed: f32,
    /// Lower pacing bound.
    pub min_sim_speed: f32,
    /// Upper pacing bound.
    pub max_sim_speed: f32,
    /// Seed for the world's random generator.
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            box_width: 800.0,
            box_height: 600.0,
            n_prey: 30,
            n_predator: 2,
            n_food: 60,
            generation_time: 30.0,
            mutation_rate: 0.1,
            capture_radius: 10.0,
            prey_move_cost: 0.1,
            predator_move_cost: 0.15,
            food_energy: 20.0,
            feed_energy: 30.0,
            feed_duration: 60,
            combat_energy: 20.0,
            combat_threshold: 15.0,
            turn_rate: 0.2,
            max_speed: 2.0,
            start_energy: 100.0,
            sim_speed: 60.0,
            min_sim_speed: 10.0,
            max_sim_speed: 300.0,
            seed: 0,
        }
    }
}

impl Params {
    /// Checks the configuration for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_prey == 0 || self.n_predator == 0 || self.n_food == 0 {
            return Err(ConfigError::EmptyPopulation {
                prey: self.n_prey,
                predators: self.n_predator,
                food: self.n_food,
            });
        }
        if self.box_width <= 0.0 || self.box_height <= 0.0 {
            return Err(ConfigError::InvalidArena {
                width: self.box_width,
                height: self.box_height,
            });
        }
        if self.generation_time <= 0.0 {
            return Err(ConfigError::InvalidGenerationTime(self.generation_time));
        }
        for (name, value) in [
            ("capture_radius", self.capture_radius),
            ("max_speed", self.max_speed),
            ("start_energy", self.start_energy),
            ("sim_speed", self.sim_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::InvalidTunable { name, value });
            }
        }
        Ok(())
    }

    /// Loads parameters from a JSON file; absent fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&json)?;
        Ok(params)
    }

    /// Length of the arena diagonal, used to normalize distance inputs.
    pub fn diagonal(&self) -> f32 {
        self.box_width.hypot(self.box_height)
    }
}
