//! World state: the agent and food collections, the per-tick update loop,
//! and generational selection/reproduction.
//!
//! The world owns every collection and the random generator; collections
//! are only ever mutated by [`World::step`] and [`World::reproduce`]. One
//! external driver advances the simulation by exactly one `step()` per
//! frame. Within a tick, every predator finishes its decision and its
//! effects (kills, combat) before the next predator runs, and the whole
//! predator pass lands before any prey moves - a prey killed this tick is
//! already flagged dead when the prey pass reaches it.

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use super::food::Food;
use super::params::{ConfigError, Params};
use super::predator::Predator;
use super::prey::Prey;

/// Simulated seconds per tick. Pacing changes how many ticks run per
/// real-time second, never how long a tick is.
pub const TICK_DT: f32 = 1.0 / 60.0;

/// The arena and everything living in it.
#[derive(Debug, Clone)]
pub struct World {
    /// All prey, living and dead, in update order.
    pub prey: Vec<Prey>,
    /// All predators, living and dead, in update order.
    pub predators: Vec<Predator>,
    /// Remaining food items.
    pub food: Vec<Food>,
    /// Elapsed simulated time in seconds.
    pub time: f32,
    /// Simulated time at which the current generation started.
    pub generation_start: f32,
    /// Generation counter, starting at 1.
    pub generation: u32,
    /// Pacing in ticks per real-time second. Cosmetic: read by the driver,
    /// never by simulation math.
    pub sim_speed: f32,
    /// Simulation parameters, fixed for the lifetime of the world.
    pub params: Params,
    rng: ChaCha12Rng,
}

impl World {
    /// Creates a world with random agents and food, seeded from
    /// `params.seed`. Identical parameters produce identical runs.
    pub fn new(params: Params) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut rng = ChaCha12Rng::seed_from_u64(params.seed);

        let prey = (0..params.n_prey)
            .map(|_| Prey::new_random(&params, &mut rng))
            .collect();
        let predators = (0..params.n_predator)
            .map(|_| Predator::new_random(&params, &mut rng))
            .collect();
        let food = (0..params.n_food)
            .map(|_| Food::new_random(&params, &mut rng))
            .collect();

        Ok(Self {
            prey,
            predators,
            food,
            time: 0.0,
            generation_start: 0.0,
            generation: 1,
            sim_speed: params.sim_speed,
            params,
            rng,
        })
    }

    /// Advances the simulation by one tick.
    ///
    /// Updates every predator in collection order (each sees the effects of
    /// the ones before it), then every prey, then checks the generation
    /// timer and reproduces when the window has elapsed.
    pub fn step(&mut self) {
        let mut predators = std::mem::take(&mut self.predators);
        for idx in 0..predators.len() {
            let (before, rest) = predators.split_at_mut(idx);
            if let Some((predator, after)) = rest.split_first_mut() {
                predator.update(&mut self.prey, before, after, &self.params, &mut self.rng);
            }
        }
        self.predators = predators;

        for prey in &mut self.prey {
            prey.update(&mut self.food, &self.params);
        }

        self.time += TICK_DT;
        if self.time - self.generation_start > self.params.generation_time {
            self.reproduce();
        }
    }

    /// Replaces every species with the next generation and resets the food.
    ///
    /// Parents are the top-scoring living half of each species (prey by
    /// score, predators by kills then energy); if nothing survived, fresh
    /// random parents stand in. Each parent leaves exactly two offspring:
    /// one with a mutated clone of its brain and one with a pristine clone,
    /// so the new population is twice the parent count - possibly smaller
    /// than nominal after a die-off.
    pub fn reproduce(&mut self) {
        let living_prey = self.prey.iter().filter(|c| c.alive).count();
        let living_predators = self.predators.iter().filter(|p| p.alive).count();

        let mut prey_parents: Vec<Prey> = self.prey.iter().filter(|c| c.alive).cloned().collect();
        prey_parents.sort_by(|a, b| b.score.cmp(&a.score));
        prey_parents.truncate(self.params.n_prey / 2);
        if prey_parents.is_empty() {
            prey_parents = (0..self.params.n_prey / 2)
                .map(|_| Prey::new_random(&self.params, &mut self.rng))
                .collect();
        }

        let mut next_prey = Vec::with_capacity(prey_parents.len() * 2);
        for parent in &prey_parents {
            let mut child = Prey::from_parent(&parent.brain, &self.params, &mut self.rng);
            child.brain.mutate(self.params.mutation_rate, &mut self.rng);
            next_prey.push(child);
            next_prey.push(Prey::from_parent(&parent.brain, &self.params, &mut self.rng));
        }
        self.prey = next_prey;

        let mut predator_parents: Vec<Predator> = self
            .predators
            .iter()
            .filter(|p| p.alive)
            .cloned()
            .collect();
        predator_parents.sort_by(|a, b| {
            b.kills
                .cmp(&a.kills)
                .then_with(|| b.energy.total_cmp(&a.energy))
        });
        predator_parents.truncate(self.params.n_predator / 2);
        if predator_parents.is_empty() {
            predator_parents = (0..self.params.n_predator / 2)
                .map(|_| Predator::new_random(&self.params, &mut self.rng))
                .collect();
        }

        let mut next_predators = Vec::with_capacity(predator_parents.len() * 2);
        for parent in &predator_parents {
            let mut child = Predator::from_parent(&parent.brain, &self.params, &mut self.rng);
            child.brain.mutate(self.params.mutation_rate, &mut self.rng);
            next_predators.push(child);
            next_predators.push(Predator::from_parent(&parent.brain, &self.params, &mut self.rng));
        }
        self.predators = next_predators;

        self.food = (0..self.params.n_food)
            .map(|_| Food::new_random(&self.params, &mut self.rng))
            .collect();

        self.generation_start = self.time;
        self.generation += 1;

        println!(
            "generation {}: {} prey / {} predators survived, next sizes {}/{}",
            self.generation,
            living_prey,
            living_predators,
            self.prey.len(),
            self.predators.len()
        );
    }

    /// Number of living prey.
    pub fn living_prey(&self) -> usize {
        self.prey.iter().filter(|c| c.alive).count()
    }

    /// Number of living predators.
    pub fn living_predators(&self) -> usize {
        self.predators.iter().filter(|p| p.alive).count()
    }

    /// Adjusts the pacing value, clamped to the configured bounds.
    pub fn adjust_speed(&mut self, delta: f32) {
        self.sim_speed =
            (self.sim_speed + delta).clamp(self.params.min_sim_speed, self.params.max_sim_speed);
    }
}
