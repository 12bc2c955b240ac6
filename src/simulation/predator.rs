//! Predator behavior, state, and lifecycle.
//!
//! Predators hunt the nearest living prey. A successful kill does not pay
//! energy immediately: the predator enters a feeding state and must stay at
//! the kill site for a full timer window to collect; abandoning the carcass
//! costs the whole meal. Starving predators turn on each other: below an
//! energy threshold, contact with another predator resolves as combat.

use ndarray::{Array1, array};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brain::{Brain, PREDATOR_INPUTS};
use super::geometry;
use super::locatable::{self, Locatable};
use super::params::Params;
use super::prey::Prey;

/// A predator agent with a four-input neural network brain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predator {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Heading in radians.
    pub angle: f32,
    /// Current energy; the agent dies when this reaches zero.
    pub energy: f32,
    /// Prey killed this generation; primary fitness signal.
    pub kills: u32,
    /// Liveness flag; transitions true to false exactly once.
    pub alive: bool,
    /// Whether the predator is currently guarding a kill.
    pub feeding: bool,
    /// Ticks spent at the current kill site.
    pub feed_timer: u32,
    /// Where the last kill happened; `Some` while a meal is claimable.
    pub last_kill_pos: Option<Array1<f32>>,
    /// Neural network that controls steering and thrust.
    pub brain: Brain,
}

impl Predator {
    /// Creates a predator at a random position with a random brain.
    pub fn new_random<R: Rng>(params: &Params, rng: &mut R) -> Self {
        let brain = Brain::new_random(PREDATOR_INPUTS, rng);
        Self::from_parent(&brain, params, rng)
    }

    /// Creates a predator with fresh kinematic state and a clone of `brain`.
    pub fn from_parent<R: Rng>(brain: &Brain, params: &Params, rng: &mut R) -> Self {
        Self {
            pos: Array1::from_vec(vec![
                rng.random_range(0.0..params.box_width),
                rng.random_range(0.0..params.box_height),
            ]),
            angle: rng.random_range(0.0..std::f32::consts::TAU),
            energy: params.start_energy,
            kills: 0,
            alive: true,
            feeding: false,
            feed_timer: 0,
            last_kill_pos: None,
            brain: brain.clone(),
        }
    }

    /// Advances this predator by one tick.
    ///
    /// `before` and `after` are the predators updated earlier and later in
    /// this tick, in collection order; combat mutates them directly, so each
    /// agent's full decision and its effects land before the next agent runs.
    ///
    /// A feeding predator only tends its kill. A hunting predator with no
    /// living prey available idles for free; otherwise it steers toward the
    /// nearest prey, pays the movement cost, kills on contact, and - when
    /// starving - fights any predator it touches.
    pub fn update<R: Rng>(
        &mut self,
        prey: &mut [Prey],
        before: &mut [Predator],
        after: &mut [Predator],
        params: &Params,
        rng: &mut R,
    ) {
        if !self.alive {
            return;
        }
        if self.energy <= 0.0 {
            self.alive = false;
            return;
        }

        if self.feeding {
            self.tend_kill(params);
            return;
        }

        let Some(target_idx) = locatable::nearest(&self.pos, prey) else {
            return;
        };
        let target_pos = prey[target_idx].pos.clone();

        let diagonal = params.diagonal();
        let angle_diff = (geometry::bearing(&self.pos, &target_pos) - self.angle).sin();
        let dist_to_prey = geometry::distance(&self.pos, &target_pos) / diagonal;
        // With no other living predator the avoidance input degenerates to
        // zero distance.
        let dist_to_rival = before
            .iter()
            .chain(after.iter())
            .filter(|other| other.alive)
            .map(|other| geometry::distance(&self.pos, &other.pos))
            .min_by(f32::total_cmp)
            .unwrap_or(0.0)
            / diagonal;

        let inputs = array![
            angle_diff,
            dist_to_prey,
            dist_to_rival,
            self.energy / params.start_energy
        ];
        let output = self.brain.think(&inputs);

        geometry::steer_mut(&mut self.pos, &mut self.angle, output[0], output[1], params);
        self.energy -= params.predator_move_cost;

        let target = &mut prey[target_idx];
        if target.alive && geometry::distance(&self.pos, &target.pos) < params.capture_radius {
            target.alive = false;
            self.kills += 1;
            self.feeding = true;
            self.feed_timer = 0;
            self.last_kill_pos = Some(target.pos.clone());
        }

        self.fight(before, after, params, rng);
    }

    /// One tick of guarding the current kill site.
    ///
    /// Staying within capture range advances the timer; completing it pays
    /// `feed_energy` once and returns the predator to hunting. Straying
    /// aborts the meal with no payout.
    fn tend_kill(&mut self, params: &Params) {
        match &self.last_kill_pos {
            Some(kill_pos) if geometry::distance(&self.pos, kill_pos) < params.capture_radius => {
                self.feed_timer += 1;
                if self.feed_timer >= params.feed_duration {
                    self.energy += params.feed_energy;
                    self.feeding = false;
                }
            }
            _ => {
                self.feeding = false;
            }
        }
    }

    /// Resolves combat against every touching predator, in collection order.
    ///
    /// Combat only triggers while this predator's energy is below the
    /// threshold; the check repeats per opponent, so a single win (and its
    /// energy prize) ends the aggression for this tick. The scan stops
    /// outright if this predator dies.
    fn fight<R: Rng>(
        &mut self,
        before: &mut [Predator],
        after: &mut [Predator],
        params: &Params,
        rng: &mut R,
    ) {
        for other in before.iter_mut().chain(after.iter_mut()) {
            if !self.alive {
                break;
            }
            if !other.alive || self.energy >= params.combat_threshold {
                continue;
            }
            if geometry::distance(&self.pos, &other.pos) >= params.capture_radius {
                continue;
            }
            let win = if self.energy > other.energy {
                true
            } else if self.energy < other.energy {
                false
            } else {
                rng.random_bool(0.5)
            };
            if win {
                other.alive = false;
                self.energy += params.combat_energy;
            } else {
                self.alive = false;
                other.energy += params.combat_energy;
            }
        }
    }
}

impl Locatable for Predator {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}
