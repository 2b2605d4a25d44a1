// app.rs - egui front end: controls, status line and the grid surface

use eframe::egui;
use egui::{Color32, Sense, Vec2};

use crate::input::cell_at;
use crate::render::{self, Palette};
use crate::session::Session;

pub struct LifeApp {
    session: Session,
    palette: Palette,
    // Kept alive for the tasks the session spawns
    _runtime: tokio::runtime::Runtime,
}

impl LifeApp {
    pub fn new(session: Session, runtime: tokio::runtime::Runtime) -> Self {
        Self { session, palette: Palette::default(), _runtime: runtime }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Step replies and timer ticks queued since the last frame
        self.session.pump();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let running = self.session.is_running();
                if ui.add_enabled(!running, egui::Button::new("▶ Start")).clicked() {
                    self.session.start();
                }
                if ui.add_enabled(running, egui::Button::new("⏸ Pause")).clicked() {
                    self.session.pause();
                }

                ui.separator();

                let status = self.session.status();
                ui.label(if self.session.is_running() { "Running" } else { "Paused" });
                ui.label(format!("Generation: {}", status.generation));
                ui.label(format!("Live cells: {}", self.session.grid().live_count()));
                if let Some(error) = &status.last_error {
                    ui.separator();
                    ui.colored_label(Color32::LIGHT_RED, format!("⚠ {error}"));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Square surface as wide as the panel, shrunk to fit if the
            // window is wider than it is tall
            let available = ui.available_size();
            let side = available.x.min(available.y).max(1.0);
            let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
            let surface = response.rect;

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((row, col)) = cell_at(pos, surface, self.session.grid().size()) {
                        self.session.toggle(row, col);
                    }
                }
            }

            let fills = render::frame(self.session.grid(), surface, &self.palette);
            render::paint(&painter, &fills);
        });
    }
}
