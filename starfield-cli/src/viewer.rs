//! Interactive viewer for Starfield scenarios
//!
//! Draws every body as a circle inside the arena and steps the world once per
//! frame. When started from a file, edits to that file rebuild the world.

use eframe::egui;
use log::{info, warn};
use notify::{Event, RecommendedWatcher, Watcher};
use starfield_core::diagnostics::format_scenario_error;
use starfield_core::{
    build_simulation_context, get_body_states, step_simulation, Scenario, SimulationContext,
    Toggles,
};
use std::path::PathBuf;
use std::sync::mpsc;

/// Budget large enough that the viewer never runs out of steps
const VIEWER_MAX_STEPS: u64 = u64::MAX;

pub struct ViewerApp {
    source_path: Option<PathBuf>,
    scenario: Scenario,
    ctx_opt: Option<SimulationContext>,
    last_load_error: Option<String>,
    playing: bool,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

impl ViewerApp {
    pub fn new(
        source_path: Option<PathBuf>,
        scenario: Scenario,
        _cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut watcher = None;

        if let Some(path) = &source_path {
            watcher = notify::recommended_watcher(move |res| {
                let _ = tx.send(res);
            })
            .ok();

            if let Some(ref mut w) = watcher {
                if let Err(e) = w.watch(path, notify::RecursiveMode::NonRecursive) {
                    warn!("not watching {}: {}", path.display(), e);
                }
            }
        }

        let mut app = Self {
            source_path,
            scenario,
            ctx_opt: None,
            last_load_error: None,
            playing: true,
            file_watcher: watcher,
            file_receiver: rx,
        };
        app.reset();
        app
    }

    /// Rebuild the world from the current scenario, keeping the live toggles
    fn reset(&mut self) {
        let toggles = self.ctx_opt.as_ref().map(|c| c.world.toggles());

        match build_simulation_context(&self.scenario, VIEWER_MAX_STEPS) {
            Ok(mut ctx) => {
                if let Some(toggles) = toggles {
                    ctx.world.set_toggles(toggles);
                }
                self.ctx_opt = Some(ctx);
                self.last_load_error = None;
            }
            Err(e) => {
                self.last_load_error = Some(e.to_string());
                self.ctx_opt = None;
            }
        }
    }

    fn reload_from_disk(&mut self) {
        let Some(path) = self.source_path.clone() else {
            return;
        };

        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                self.last_load_error = Some(e.to_string());
                return;
            }
        };

        match Scenario::from_yaml(&source) {
            Ok(scenario) => {
                info!("reloaded {}", path.display());
                self.scenario = scenario;
                self.ctx_opt = None;
                self.reset();
            }
            Err(e) => {
                self.last_load_error = Some(format_scenario_error(&e, &source));
            }
        }
    }

    fn check_file_changes(&mut self) {
        let mut needs_reload = false;

        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    ..
                }) => needs_reload = true,
                Ok(_) => {}
                Err(e) => warn!("file watcher error: {}", e),
            }
        }

        if needs_reload {
            self.reload_from_disk();
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (gravity, collision, border, pause, reset, close) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::G),
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::B),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if pause {
            self.playing = !self.playing;
        }
        if reset {
            self.reset();
        }
        if let Some(sim) = self.ctx_opt.as_mut() {
            let toggles = sim.world.toggles_mut();
            toggles.gravity ^= gravity;
            toggles.collision ^= collision;
            toggles.border ^= border;
        }
    }
}

fn toggle_label(name: &str, on: bool) -> String {
    format!("{}: {}", name, if on { "on" } else { "off" })
}

fn status_line(toggles: Toggles, sim: &SimulationContext) -> String {
    let distance = sim
        .closest_distance
        .map_or_else(|| "-".to_string(), |d| format!("{:.2}", d));
    format!(
        "step {}   distance: {}   {}   {}   {}",
        sim.current_step,
        distance,
        toggle_label("[G]ravity", toggles.gravity),
        toggle_label("[C]ollision", toggles.collision),
        toggle_label("[B]order", toggles.border),
    )
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();
        self.handle_keys(ctx);

        if self.playing {
            if let Some(sim) = self.ctx_opt.as_mut() {
                step_simulation(sim);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();

                if let Some(sim) = &self.ctx_opt {
                    // Arena coordinates map onto the panel, y pointing down
                    let arena = sim.world.resolver().arena();
                    let scale = (rect.width() / arena.width).min(rect.height() / arena.height);

                    for body in get_body_states(sim) {
                        let screen_pos =
                            rect.min + egui::vec2(body.position.x * scale, body.position.y * scale);
                        let color = if body.collided {
                            egui::Color32::LIGHT_RED
                        } else {
                            egui::Color32::WHITE
                        };
                        painter.circle_filled(screen_pos, body.radius * scale, color);
                    }

                    painter.text(
                        rect.min + egui::vec2(8.0, 8.0),
                        egui::Align2::LEFT_TOP,
                        status_line(sim.world.toggles(), sim),
                        egui::FontId::proportional(18.0),
                        egui::Color32::LIGHT_GRAY,
                    );
                }

                if let Some(ref error) = self.last_load_error {
                    painter.text(
                        rect.left_bottom() + egui::vec2(8.0, -8.0),
                        egui::Align2::LEFT_BOTTOM,
                        format!("Error: {}", error),
                        egui::FontId::monospace(14.0),
                        egui::Color32::RED,
                    );
                }
            });

        if self.playing {
            ctx.request_repaint();
        }
    }
}
