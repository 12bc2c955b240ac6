use macroquad::prelude::*;
use ndarray::Array1;

use veldt::simulation::params::Params;
use veldt::simulation::world::World;

const FOOD_RADIUS: f32 = 4.0;
const PREY_RADIUS: f32 = 6.0;
const PREDATOR_RADIUS: f32 = 8.0;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Array1<f32> {
    type Output = (f32, f32);
    fn to_screen(&self, params: &Params) -> (f32, f32) {
        let scale_x = screen_width() / params.box_width;
        let scale_y = screen_height() / params.box_height;
        (self[0] * scale_x, self[1] * scale_y)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        let scale_x = screen_width() / params.box_width;
        let scale_y = screen_height() / params.box_height;
        self * scale_x.min(scale_y)
    }
}

pub fn draw_food(world: &World) {
    for item in &world.food {
        let (x, y) = item.pos.to_screen(&world.params);
        draw_circle(
            x,
            y,
            FOOD_RADIUS.to_screen(&world.params),
            Color::from_rgba(0, 255, 0, 255),
        );
    }
}

pub fn draw_agents(world: &World) {
    for predator in &world.predators {
        if !predator.alive {
            continue;
        }
        let (x, y) = predator.pos.to_screen(&world.params);
        let color = if predator.feeding {
            Color::from_rgba(255, 140, 0, 255)
        } else {
            Color::from_rgba(255, 0, 0, 255)
        };
        draw_circle(x, y, PREDATOR_RADIUS.to_screen(&world.params), color);
    }

    for prey in &world.prey {
        if !prey.alive {
            continue;
        }
        let (x, y) = prey.pos.to_screen(&world.params);
        draw_circle(
            x,
            y,
            PREY_RADIUS.to_screen(&world.params),
            Color::from_rgba(0, 0, 255, 255),
        );
    }
}

pub fn draw_hud(world: &World) {
    let text = format!(
        "Gen: {} | Speed: {:.0} tps | Prey: {} | Predators: {}",
        world.generation,
        world.sim_speed,
        world.living_prey(),
        world.living_predators()
    );
    draw_text(&text, 10.0, 20.0, 24.0, WHITE);
}
