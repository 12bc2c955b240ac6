use macroquad::prelude::*;

mod graphics;
mod ui;

use veldt::simulation::params::Params;
use veldt::simulation::world::World;

const CONFIG_PATH: &str = "veldt.json";
const MAX_STEPS_PER_FRAME: usize = 16;

#[macroquad::main("Veldt")]
async fn main() {
    let params = match Params::load_from_file(CONFIG_PATH) {
        Ok(params) => {
            println!("loaded configuration from {CONFIG_PATH}");
            params
        }
        Err(_) => Params::default(),
    };

    let mut world: Option<World> = None;
    let mut ui_state = ui::UiState::new();
    let mut accumulator = 0.0f32;
    let mut last_generation = 0u32;

    loop {
        let Some(world) = world.as_mut() else {
            clear_background(LIGHTGRAY);
            let text = "Start a new evolution by pressing Enter";
            let font_size = 30.0;

            let text_size = measure_text(text, None, font_size as _, 1.0);
            draw_text(
                text,
                screen_width() / 2. - text_size.width / 2.,
                screen_height() / 2. - text_size.height / 2.,
                font_size,
                DARKGRAY,
            );

            if is_key_pressed(KeyCode::Enter) {
                match World::new(params.clone()) {
                    Ok(fresh) => {
                        last_generation = fresh.generation;
                        world = Some(fresh);
                    }
                    Err(err) => {
                        eprintln!("invalid configuration: {err}");
                        return;
                    }
                }
            }
            next_frame().await;
            continue;
        };

        if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
            world.adjust_speed(10.0);
        }
        if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
            world.adjust_speed(-10.0);
        }
        if is_key_pressed(KeyCode::S) {
            world.reproduce();
        }

        // Fixed-timestep pacing: run sim_speed ticks per real-time second,
        // bounded per frame so a stall cannot snowball.
        accumulator += get_frame_time();
        let tick_interval = 1.0 / world.sim_speed;
        let mut steps = 0;
        while accumulator >= tick_interval && steps < MAX_STEPS_PER_FRAME {
            world.step();
            accumulator -= tick_interval;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_FRAME {
            accumulator = 0.0;
        }

        if world.generation != last_generation {
            last_generation = world.generation;
            println!(
                "[{}] entering generation {}",
                chrono::Local::now().format("%H:%M:%S"),
                world.generation
            );
        }

        ui_state.update_history(world);

        clear_background(Color::from_rgba(30, 30, 30, 255));
        graphics::draw_food(world);
        graphics::draw_agents(world);
        graphics::draw_hud(world);

        ui::draw_ui(&mut ui_state, world);
        egui_macroquad::draw();

        next_frame().await
    }
}
