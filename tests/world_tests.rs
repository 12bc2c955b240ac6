#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::{Array2, array};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use veldt::simulation::brain::{Brain, HIDDEN_SIZE, OUTPUT_SIZE, PREDATOR_INPUTS, PREY_INPUTS};
use veldt::simulation::food::Food;
use veldt::simulation::params::{ConfigError, Params};
use veldt::simulation::predator::Predator;
use veldt::simulation::prey::Prey;
use veldt::simulation::world::{TICK_DT, World};

fn create_test_params() -> Params {
    Params {
        seed: 42,
        ..Params::default()
    }
}

/// A brain whose outputs are pinned to [0, 0]: no turn, no thrust.
fn still_brain(input_size: usize) -> Brain {
    Brain::from_weights(
        Array2::zeros((input_size, HIDDEN_SIZE)),
        Array2::zeros((HIDDEN_SIZE, OUTPUT_SIZE)),
    )
}

fn prey_at(x: f32, y: f32, params: &Params) -> Prey {
    Prey {
        pos: array![x, y],
        angle: 0.0,
        energy: params.start_energy,
        score: 0,
        alive: true,
        brain: still_brain(PREY_INPUTS),
    }
}

fn predator_at(x: f32, y: f32, energy: f32) -> Predator {
    Predator {
        pos: array![x, y],
        angle: 0.0,
        energy,
        kills: 0,
        alive: true,
        feeding: false,
        feed_timer: 0,
        last_kill_pos: None,
        brain: still_brain(PREDATOR_INPUTS),
    }
}

#[test]
fn test_world_creation() {
    let params = create_test_params();
    let world = World::new(params.clone()).expect("valid params");

    assert_eq!(world.prey.len(), params.n_prey);
    assert_eq!(world.predators.len(), params.n_predator);
    assert_eq!(world.food.len(), params.n_food);
    assert_eq!(world.time, 0.0);
    assert_eq!(world.generation, 1);

    for prey in &world.prey {
        assert!(prey.alive);
        assert_eq!(prey.energy, params.start_energy);
        assert_eq!(prey.score, 0);
        assert_eq!(prey.brain.input_size(), PREY_INPUTS);
        assert!(prey.pos[0] >= 0.0 && prey.pos[0] < params.box_width);
        assert!(prey.pos[1] >= 0.0 && prey.pos[1] < params.box_height);
    }
    for predator in &world.predators {
        assert!(predator.alive);
        assert!(!predator.feeding);
        assert_eq!(predator.kills, 0);
        assert_eq!(predator.brain.input_size(), PREDATOR_INPUTS);
    }
}

#[test]
fn test_invalid_configs_rejected() {
    let zero_prey = Params {
        n_prey: 0,
        ..create_test_params()
    };
    assert!(matches!(
        World::new(zero_prey),
        Err(ConfigError::EmptyPopulation { .. })
    ));

    let bad_arena = Params {
        box_width: -800.0,
        ..create_test_params()
    };
    assert!(matches!(
        World::new(bad_arena),
        Err(ConfigError::InvalidArena { .. })
    ));

    let bad_window = Params {
        generation_time: 0.0,
        ..create_test_params()
    };
    assert!(matches!(
        World::new(bad_window),
        Err(ConfigError::InvalidGenerationTime(_))
    ));
}

#[test]
fn test_step_advances_time() {
    let mut world = World::new(create_test_params()).expect("valid params");
    world.step();
    assert!((world.time - TICK_DT).abs() < 1e-6);
}

#[test]
fn test_prey_capture_scenario() {
    let params = create_test_params();

    // Hidden unit 0 saturates on the energy input, and feeds the thrust
    // output hard positive: the brain always answers [0, 1].
    let mut w1 = Array2::zeros((PREY_INPUTS, HIDDEN_SIZE));
    w1[[2, 0]] = 1_000.0;
    let mut w2 = Array2::zeros((HIDDEN_SIZE, OUTPUT_SIZE));
    w2[[0, 1]] = 1_000.0;

    let mut prey = prey_at(0.0, 0.0, &params);
    prey.brain = Brain::from_weights(w1, w2);
    let mut foods = vec![Food {
        pos: array![1.0, 0.0],
    }];

    prey.update(&mut foods, &params);

    // Full thrust moves two units along the heading; the food one unit out
    // is inside capture range, so the tick nets -0.1 move cost +20 meal.
    assert!(prey.pos[0] > 1.9);
    assert_eq!(prey.pos[1], 0.0);
    assert!((prey.energy - 119.9).abs() < 1e-3);
    assert_eq!(prey.score, 1);
    assert!(foods.is_empty());
}

#[test]
fn test_prey_idles_for_free_without_food() {
    let params = create_test_params();
    let mut prey = prey_at(100.0, 100.0, &params);
    let mut foods: Vec<Food> = Vec::new();

    prey.update(&mut foods, &params);

    assert_eq!(prey.energy, params.start_energy);
    assert_eq!(prey.pos, array![100.0, 100.0]);
}

#[test]
fn test_prey_pays_move_cost_when_hunting_food() {
    let params = create_test_params();
    let mut prey = prey_at(100.0, 100.0, &params);
    let mut foods = vec![Food {
        pos: array![700.0, 500.0],
    }];

    prey.update(&mut foods, &params);

    assert_eq!(prey.energy, params.start_energy - params.prey_move_cost);
    assert_eq!(foods.len(), 1);
}

#[test]
fn test_starved_prey_dies_exactly_once() {
    let params = create_test_params();
    let mut prey = prey_at(100.0, 100.0, &params);
    prey.energy = 0.0;
    let mut foods = vec![Food {
        pos: array![700.0, 500.0],
    }];

    prey.update(&mut foods, &params);
    assert!(!prey.alive);

    // Dead prey never act again; energy and score stay frozen.
    prey.energy = 50.0;
    prey.update(&mut foods, &params);
    assert!(!prey.alive);
    assert_eq!(prey.energy, 50.0);
    assert_eq!(foods.len(), 1);
}

#[test]
fn test_predator_idles_for_free_without_living_prey() {
    let params = create_test_params();
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let mut predator = predator_at(100.0, 100.0, 50.0);
    let mut prey = [
        {
            let mut dead = prey_at(110.0, 100.0, &params);
            dead.alive = false;
            dead
        },
    ];

    predator.update(&mut prey, &mut [], &mut [], &params, &mut rng);

    assert_eq!(predator.energy, 50.0);
    assert_eq!(predator.pos, array![100.0, 100.0]);
}

#[test]
fn test_predation_enters_feeding_and_flags_prey_dead() {
    let params = create_test_params();
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let mut predator = predator_at(100.0, 100.0, 50.0);
    let mut prey = [prey_at(105.0, 100.0, &params)];

    predator.update(&mut prey, &mut [], &mut [], &params, &mut rng);

    assert!(!prey[0].alive);
    assert_eq!(predator.kills, 1);
    assert!(predator.feeding);
    assert_eq!(predator.feed_timer, 0);
    assert_eq!(
        predator.last_kill_pos.as_ref().expect("kill recorded"),
        &array![105.0, 100.0]
    );
    assert_eq!(predator.energy, 50.0 - params.predator_move_cost);
}

#[test]
fn test_feeding_pays_out_once_after_full_timer() {
    let params = create_test_params();
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let mut predator = predator_at(100.0, 100.0, 50.0);
    predator.feeding = true;
    predator.last_kill_pos = Some(array![102.0, 100.0]);

    for tick in 1..params.feed_duration {
        predator.update(&mut [], &mut [], &mut [], &params, &mut rng);
        assert!(predator.feeding, "still feeding at tick {tick}");
        assert_eq!(predator.energy, 50.0);
    }

    predator.update(&mut [], &mut [], &mut [], &params, &mut rng);
    assert!(!predator.feeding);
    assert_eq!(predator.energy, 50.0 + params.feed_energy);

    // No double payout on the following tick (no living prey: idle).
    predator.update(&mut [], &mut [], &mut [], &params, &mut rng);
    assert_eq!(predator.energy, 50.0 + params.feed_energy);
}

#[test]
fn test_feeding_aborts_without_payout_when_straying() {
    let params = create_test_params();
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let mut predator = predator_at(100.0, 100.0, 50.0);
    predator.feeding = true;
    predator.feed_timer = 59;
    predator.last_kill_pos = Some(array![200.0, 100.0]);

    predator.update(&mut [], &mut [], &mut [], &params, &mut rng);

    assert!(!predator.feeding);
    assert_eq!(predator.energy, 50.0);
}

#[test]
fn test_combat_favors_higher_energy() {
    let params = create_test_params();
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let mut weak = predator_at(100.0, 100.0, 10.0);
    let mut others = [predator_at(105.0, 100.0, 20.0)];
    // A living prey far away keeps the predator in its hunting branch.
    let mut prey = [prey_at(700.0, 500.0, &params)];

    weak.update(&mut prey, &mut [], &mut others, &params, &mut rng);

    assert!(!weak.alive);
    assert_eq!(others[0].energy, 20.0 + params.combat_energy);
    assert!(others[0].alive);
}

#[test]
fn test_combat_win_ends_aggression_for_the_tick() {
    let params = create_test_params();
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let mut hungry = predator_at(100.0, 100.0, 14.0);
    let mut others = [
        predator_at(104.0, 100.0, 5.0),
        predator_at(96.0, 100.0, 5.0),
    ];
    let mut prey = [prey_at(700.0, 500.0, &params)];

    hungry.update(&mut prey, &mut [], &mut others, &params, &mut rng);

    // First touch wins +20, lifting the winner over the combat threshold;
    // the second neighbor is spared.
    assert!(hungry.alive);
    assert_eq!(
        hungry.energy,
        14.0 - params.predator_move_cost + params.combat_energy
    );
    assert!(!others[0].alive);
    assert!(others[1].alive);
    assert_eq!(others[1].energy, 5.0);
}

#[test]
fn test_combat_scan_stops_when_the_attacker_dies() {
    let params = create_test_params();
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let mut doomed = predator_at(100.0, 100.0, 1.0);
    let mut others = [
        predator_at(104.0, 100.0, 20.0),
        predator_at(96.0, 100.0, 0.5),
    ];
    let mut prey = [prey_at(700.0, 500.0, &params)];

    doomed.update(&mut prey, &mut [], &mut others, &params, &mut rng);

    // Losing to the first neighbor ends the scan: no posthumous win over
    // the weaker second neighbor.
    assert!(!doomed.alive);
    assert_eq!(others[0].energy, 20.0 + params.combat_energy);
    assert!(others[1].alive);
    assert_eq!(others[1].energy, 0.5);
}

#[test]
fn test_prey_killed_this_tick_is_skipped_by_the_prey_pass() {
    let params = create_test_params();
    let mut world = World::new(params.clone()).expect("valid params");

    world.predators = vec![predator_at(100.0, 100.0, 50.0)];
    world.prey = vec![prey_at(105.0, 100.0, &params)];
    world.food = vec![Food {
        pos: array![105.0, 100.0],
    }];

    world.step();

    // The predator pass flags the prey dead before the prey pass runs, so
    // the prey neither moves, spends, nor eats the food under its feet.
    assert!(!world.prey[0].alive);
    assert_eq!(world.prey[0].energy, params.start_energy);
    assert_eq!(world.prey[0].score, 0);
    assert_eq!(world.food.len(), 1);
    assert_eq!(world.predators[0].kills, 1);
}

#[test]
fn test_reproduction_size_law() {
    let params = create_test_params();
    let mut world = World::new(params.clone()).expect("valid params");

    // Ten prey survivors, fewer than the half-population cap of fifteen:
    // the next generation is exactly twice the survivor count.
    for (idx, prey) in world.prey.iter_mut().enumerate() {
        prey.alive = idx < 10;
    }
    world.reproduce();
    assert_eq!(world.prey.len(), 20);

    // A full population is truncated to the cap and doubled back.
    let mut world = World::new(params.clone()).expect("valid params");
    world.reproduce();
    assert_eq!(world.prey.len(), (params.n_prey / 2) * 2);
    assert_eq!(world.predators.len(), (params.n_predator / 2) * 2);
    assert_eq!(world.food.len(), params.n_food);
    assert_eq!(world.generation, 2);
}

#[test]
fn test_reproduction_fallback_after_extinction() {
    let params = create_test_params();
    let mut world = World::new(params.clone()).expect("valid params");

    for prey in &mut world.prey {
        prey.alive = false;
    }
    for predator in &mut world.predators {
        predator.alive = false;
    }
    world.reproduce();

    assert_eq!(world.prey.len(), (params.n_prey / 2) * 2);
    assert_eq!(world.predators.len(), (params.n_predator / 2) * 2);
    assert!(world.prey.iter().all(|c| c.alive));
}

#[test]
fn test_reproduction_selects_top_scorers() {
    let params = Params {
        n_prey: 2,
        ..create_test_params()
    };
    let mut world = World::new(params.clone()).expect("valid params");

    // The sole parent slot goes to the scorer; its pristine clone is the
    // second child of the pair.
    let marked = Array2::from_elem((PREY_INPUTS, HIDDEN_SIZE), 7.0);
    world.prey[1].score = 5;
    world.prey[1].brain.w1 = marked.clone();

    world.reproduce();

    assert_eq!(world.prey.len(), 2);
    assert_eq!(world.prey[1].brain.w1, marked);
    assert!(world.prey.iter().all(|c| c.score == 0));
}

#[test]
fn test_reproduction_ranks_predators_by_kills_then_energy() {
    let params = Params {
        n_predator: 2,
        ..create_test_params()
    };
    let mut world = World::new(params.clone()).expect("valid params");

    let marked = Array2::from_elem((PREDATOR_INPUTS, HIDDEN_SIZE), 3.0);
    world.predators[0].kills = 1;
    world.predators[0].energy = 10.0;
    world.predators[1].kills = 1;
    world.predators[1].energy = 90.0;
    world.predators[1].brain.w1 = marked.clone();

    world.reproduce();

    // Equal kills: the higher-energy predator parents the generation.
    assert_eq!(world.predators.len(), 2);
    assert_eq!(world.predators[1].brain.w1, marked);
}

#[test]
fn test_generation_timer_triggers_reproduction() {
    let mut world = World::new(create_test_params()).expect("valid params");
    world.time = world.params.generation_time + 1.0;

    world.step();

    assert_eq!(world.generation, 2);
    assert!((world.generation_start - world.time).abs() < 1e-6);
}

#[test]
fn test_same_seed_same_trajectory() {
    let params = create_test_params();
    let mut a = World::new(params.clone()).expect("valid params");
    let mut b = World::new(params).expect("valid params");

    for _ in 0..200 {
        a.step();
        b.step();
    }

    assert_eq!(a.food.len(), b.food.len());
    for (prey_a, prey_b) in a.prey.iter().zip(&b.prey) {
        assert_eq!(prey_a.pos, prey_b.pos);
        assert_eq!(prey_a.energy, prey_b.energy);
        assert_eq!(prey_a.score, prey_b.score);
    }
    for (pred_a, pred_b) in a.predators.iter().zip(&b.predators) {
        assert_eq!(pred_a.pos, pred_b.pos);
        assert_eq!(pred_a.energy, pred_b.energy);
    }
}

#[test]
fn test_different_seeds_differ() {
    let mut params = create_test_params();
    let a = World::new(params.clone()).expect("valid params");
    params.seed = 43;
    let b = World::new(params).expect("valid params");

    let same = a
        .prey
        .iter()
        .zip(&b.prey)
        .all(|(prey_a, prey_b)| prey_a.pos == prey_b.pos);
    assert!(!same);
}

#[test]
fn test_adjust_speed_clamps_to_bounds() {
    let mut world = World::new(create_test_params()).expect("valid params");

    world.adjust_speed(1e6);
    assert_eq!(world.sim_speed, world.params.max_sim_speed);
    world.adjust_speed(-1e6);
    assert_eq!(world.sim_speed, world.params.min_sim_speed);
}
