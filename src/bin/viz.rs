use eframe::egui;
use egui_plot::{HLine, Line, Plot, PlotPoints};

use ascent_sim::dynamics::state::FlightState;
use ascent_sim::guidance::{find_pitchover_angle, SearchMethod, SearchOptions};
use ascent_sim::sim::{self, Trajectory};
use ascent_sim::vehicle::{presets, VehicleConfig};

const PITCHOVER_ALTITUDE: f64 = 20.0;
const TARGET_APOGEE: f64 = 100_000.0;

fn main() -> eframe::Result {
    let vehicle = presets::rox();
    let options = SearchOptions { method: SearchMethod::Bisection, ..SearchOptions::default() };

    // Fall back to a vertical ascent when the target is out of reach.
    let angle_deg = find_pitchover_angle(&vehicle, PITCHOVER_ALTITUDE, TARGET_APOGEE, &options)
        .ok()
        .and_then(|r| r.solution().map(|s| s.pitchover_angle_deg))
        .unwrap_or(90.0);
    let trajectory = sim::simulate_trajectory(&vehicle, PITCHOVER_ALTITUDE, angle_deg.to_radians());

    let app = AscentViz { trajectory, vehicle, angle_deg };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Ascent Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct AscentViz {
    trajectory: Trajectory,
    vehicle: VehicleConfig,
    angle_deg: f64,
}

impl eframe::App for AscentViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let states = &self.trajectory.states;
        let step = (states.len() / 2000).max(1);
        let sampled: Vec<&FlightState> = states.iter().step_by(step).collect();
        let outcome = &self.trajectory.outcome;
        let apogee = sim::predict_apogee(outcome);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Vehicle: {}", self.vehicle.name));
            ui.label(format!(
                "Pitchover: {:.3} deg at {:.0} m  |  Cutoff: {:.1} km, {:.0} m/s  |  Apogee: {:.1} km  |  {}",
                self.angle_deg,
                PITCHOVER_ALTITUDE,
                outcome.state.altitude() / 1000.0,
                outcome.state.speed(),
                apogee / 1000.0,
                outcome.termination.label(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Altitude vs Time
                ui.vertical(|ui| {
                    ui.label("Altitude (km)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.elapsed_time, s.altitude() / 1000.0])
                        .collect();
                    Plot::new("altitude")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude", points));
                            plot_ui.hline(HLine::new("Predicted apogee", apogee / 1000.0));
                        });
                });

                // Velocity components vs Time
                ui.vertical(|ui| {
                    ui.label("Velocity (m/s)");
                    let vertical: PlotPoints = sampled.iter()
                        .map(|s| [s.elapsed_time, s.vertical_velocity()])
                        .collect();
                    let horizontal: PlotPoints = sampled.iter()
                        .map(|s| [s.elapsed_time, s.horizontal_velocity()])
                        .collect();
                    Plot::new("velocity")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Vertical", vertical));
                            plot_ui.line(Line::new("Horizontal", horizontal));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Attitude vs Time
                ui.vertical(|ui| {
                    ui.label("Attitude (deg)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.elapsed_time, s.attitude.to_degrees()])
                        .collect();
                    Plot::new("attitude")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Attitude", points));
                        });
                });

                // Altitude vs Downrange
                ui.vertical(|ui| {
                    ui.label("Trajectory Profile (km)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.downrange() / 1000.0, s.altitude() / 1000.0])
                        .collect();
                    Plot::new("profile")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Downrange (km)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Trajectory", points));
                        });
                });
            });
        });
    }
}
