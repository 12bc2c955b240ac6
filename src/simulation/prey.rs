//! Prey behavior, state, and lifecycle.
//!
//! Prey steer toward the nearest food item, spend a fixed amount of energy
//! per active tick, and die when their energy runs out. Eating is their
//! fitness signal: the score drives parent selection at each generation
//! boundary.

use ndarray::{Array1, array};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brain::{Brain, PREY_INPUTS};
use super::food::Food;
use super::geometry;
use super::locatable::{self, Locatable};
use super::params::Params;

/// A prey agent with a three-input neural network brain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prey {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Heading in radians.
    pub angle: f32,
    /// Current energy; the agent dies when this reaches zero.
    pub energy: f32,
    /// Food items eaten this generation.
    pub score: u32,
    /// Liveness flag; transitions true to false exactly once.
    pub alive: bool,
    /// Neural network that controls steering and thrust.
    pub brain: Brain,
}

impl Prey {
    /// Creates a prey at a random position with a random brain.
    pub fn new_random<R: Rng>(params: &Params, rng: &mut R) -> Self {
        let brain = Brain::new_random(PREY_INPUTS, rng);
        Self::from_parent(&brain, params, rng)
    }

    /// Creates a prey with fresh kinematic state and a clone of `brain`.
    pub fn from_parent<R: Rng>(brain: &Brain, params: &Params, rng: &mut R) -> Self {
        Self {
            pos: Array1::from_vec(vec![
                rng.random_range(0.0..params.box_width),
                rng.random_range(0.0..params.box_height),
            ]),
            angle: rng.random_range(0.0..std::f32::consts::TAU),
            energy: params.start_energy,
            score: 0,
            alive: true,
            brain: brain.clone(),
        }
    }

    /// Advances this prey by one tick against the shared food collection.
    ///
    /// Dead prey do nothing. A starving prey dies and takes no further
    /// action. With no food in the world the prey idles for free; otherwise
    /// it steers toward the nearest item, pays the movement cost, and eats
    /// the item if it ends the tick within capture range.
    pub fn update(&mut self, foods: &mut Vec<Food>, params: &Params) {
        if !self.alive {
            return;
        }
        if self.energy <= 0.0 {
            self.alive = false;
            return;
        }
        let Some(target_idx) = locatable::nearest(&self.pos, foods) else {
            return;
        };
        let target_pos = foods[target_idx].pos.clone();

        let angle_diff = (geometry::bearing(&self.pos, &target_pos) - self.angle).sin();
        let dist = geometry::distance(&self.pos, &target_pos) / params.diagonal();
        let inputs = array![angle_diff, dist, self.energy / params.start_energy];
        let output = self.brain.think(&inputs);

        geometry::steer_mut(&mut self.pos, &mut self.angle, output[0], output[1], params);
        self.energy -= params.prey_move_cost;

        if geometry::distance(&self.pos, &target_pos) < params.capture_radius {
            self.energy += params.food_energy;
            self.score += 1;
            // Vec::remove keeps collection order stable for the prey that
            // run later this tick.
            foods.remove(target_idx);
        }
    }
}

impl Locatable for Prey {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}
