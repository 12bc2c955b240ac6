use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use veldt::simulation::world::World;

const MAX_HISTORY_POINTS: usize = 500;

/// UI-side state: population history samples and panel bookkeeping.
pub struct UiState {
    pub prey_history: VecDeque<(f64, f64)>,
    pub predator_history: VecDeque<(f64, f64)>,
    pub food_history: VecDeque<(f64, f64)>,
    last_sample_time: f32,
    sample_interval: f32,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            prey_history: VecDeque::new(),
            predator_history: VecDeque::new(),
            food_history: VecDeque::new(),
            last_sample_time: 0.0,
            sample_interval: 0.5,
        }
    }

    /// Samples the living counts every `sample_interval` simulated seconds.
    pub fn update_history(&mut self, world: &World) {
        if world.time - self.last_sample_time < self.sample_interval && world.time > 0.0 {
            return;
        }
        self.last_sample_time = world.time;

        let t = world.time as f64;
        self.prey_history.push_back((t, world.living_prey() as f64));
        self.predator_history
            .push_back((t, world.living_predators() as f64));
        self.food_history.push_back((t, world.food.len() as f64));

        for history in [
            &mut self.prey_history,
            &mut self.predator_history,
            &mut self.food_history,
        ] {
            if history.len() > MAX_HISTORY_POINTS {
                history.pop_front();
            }
        }
    }
}

/// Draws the stats side panel: labels, pacing slider, force-generation
/// button, and the population history plot.
pub fn draw_ui(state: &mut UiState, world: &mut World) {
    egui_macroquad::ui(|egui_ctx| {
        egui::SidePanel::right("stats_panel")
            .default_width(260.0)
            .resizable(true)
            .show(egui_ctx, |ui| {
                ui.heading("Simulation");
                ui.separator();

                ui.label(format!("Time: {:.1}s", world.time));
                ui.label(format!("Generation: {}", world.generation));
                ui.separator();

                ui.label(format!(
                    "Prey: {}/{}",
                    world.living_prey(),
                    world.prey.len()
                ));
                ui.label(format!(
                    "Predators: {}/{}",
                    world.living_predators(),
                    world.predators.len()
                ));
                ui.label(format!("Food: {}", world.food.len()));
                ui.separator();

                ui.label("Speed (ticks/s)");
                let (min, max) = (world.params.min_sim_speed, world.params.max_sim_speed);
                ui.add(egui::Slider::new(&mut world.sim_speed, min..=max));

                if ui.button("New generation").clicked() {
                    world.reproduce();
                }
                ui.separator();

                draw_population_plot(ui, state);
            });
    });
}

fn draw_population_plot(ui: &mut egui::Ui, state: &UiState) {
    if state.prey_history.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTime: {:.1}s\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            let series = [
                (&state.prey_history, egui::Color32::from_rgb(100, 150, 255), "Prey"),
                (&state.predator_history, egui::Color32::from_rgb(255, 100, 100), "Predators"),
                (&state.food_history, egui::Color32::from_rgb(100, 200, 100), "Food"),
            ];
            for (data, color, name) in series {
                if !data.is_empty() {
                    let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
                    plot_ui.line(Line::new(points).color(color).name(name));
                }
            }
        });
}
