use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use nalgebra::Vector2;

use orbit_sim::scenario::presets;
use orbit_sim::sim;
use orbit_sim::types::{SimConfig, State};

fn main() -> eframe::Result {
    let vacuum = presets::earth_vacuum();
    let drag = presets::earth_drag();
    let r0 = vacuum.body.radius + 500_000.0;

    let config = SimConfig {
        dt: 1.0,
        max_steps: 40_000,
    };

    let mut runs = Vec::new();
    for v0 in [3_000.0, 7_500.0, 10_000.0] {
        let initial = State::new(Vector2::new(r0, 0.0), Vector2::new(0.0, v0));
        let traj = sim::propagate(&initial, &vacuum, &config);
        runs.push((format!("{:.0} m/s", v0), traj));
    }
    let entry = State::new(
        Vector2::new(vacuum.body.radius + 80_000.0, 0.0),
        Vector2::new(0.0, 10_000.0),
    );
    runs.push((
        "10000 m/s + drag".to_string(),
        sim::propagate(&entry, &drag, &config),
    ));

    let app = OrbitViz {
        runs,
        body_radius: vacuum.body.radius,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Planar Orbit Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct OrbitViz {
    runs: Vec<(String, Vec<State>)>,
    body_radius: f64,
}

impl OrbitViz {
    /// Downsample a trajectory to a plottable number of points.
    fn sampled(traj: &[State]) -> Vec<&State> {
        let step = (traj.len() / 2_000).max(1);
        traj.iter().step_by(step).collect()
    }

    fn earth_disk(&self) -> Vec<[f64; 2]> {
        (0..=256)
            .map(|i| {
                let theta = i as f64 / 256.0 * std::f64::consts::TAU;
                [
                    self.body_radius * theta.cos() / 1000.0,
                    self.body_radius * theta.sin() / 1000.0,
                ]
            })
            .collect()
    }
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Planar trajectories around Earth");
            let longest = self.runs.iter().map(|(_, t)| t.len()).max().unwrap_or(0);
            ui.label(format!(
                "{} scenarios  |  longest run: {} samples",
                self.runs.len(),
                longest
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Orbit plane (km)
                ui.vertical(|ui| {
                    ui.label("Orbit plane (km)");
                    Plot::new("orbit")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .data_aspect(1.0)
                        .legend(Legend::default())
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Earth", self.earth_disk()));
                            for (name, traj) in &self.runs {
                                let points: PlotPoints = Self::sampled(traj)
                                    .iter()
                                    .map(|s| [s.pos.x / 1000.0, s.pos.y / 1000.0])
                                    .collect();
                                plot_ui.line(Line::new(name.clone(), points));
                            }
                        });
                });

                // Speed over time
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    Plot::new("speed")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("Time (s)")
                        .legend(Legend::default())
                        .show(ui, |plot_ui| {
                            for (name, traj) in &self.runs {
                                let points: PlotPoints = Self::sampled(traj)
                                    .iter()
                                    .map(|s| [s.time, s.speed()])
                                    .collect();
                                plot_ui.line(Line::new(name.clone(), points));
                            }
                        });
                });
            });
        });
    }
}
