// ui.rs - Drawing the board and feeding input into the controller

use eframe::egui;
use egui::{Pos2, Rect, Stroke, Vec2, vec2};
use grid_of_life::CellRect;
use log::error;
use std::time::{Duration, Instant};

use crate::GridOfLifeApp;

fn to_screen(origin: Pos2, rect: CellRect) -> Rect {
    Rect::from_min_size(
        origin + vec2(rect.x as f32, rect.y as f32),
        vec2(rect.w as f32, rect.h as f32),
    )
}

impl GridOfLifeApp {
    fn advance(&mut self) {
        self.controller.on_advance_command();
        self.last_update = Instant::now();
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.is_running = !self.is_running;
                if self.is_running {
                    self.last_update = Instant::now();
                }
            }

            if ui.button("⏭ Step").clicked() {
                self.is_running = false;
                self.advance();
            }

            if ui.button("⏹ Clear").clicked() {
                self.is_running = false;
                self.controller.clear();
            }

            if ui.button("🌱 Reseed").clicked() {
                self.is_running = false;
                self.controller.reseed();
            }

            ui.separator();

            ui.label(format!("Generation: {}", self.controller.generation()));
            ui.label(format!("Live cells: {}", self.controller.grid().population()));
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
            if ui
                .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                .changed()
            {
                self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
            }

            ui.separator();

            let palette = self.controller.palette_mut();
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut palette.alive);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut palette.dead);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let background = self.controller.layout().background();
        let size = Vec2::new(background.w as f32, background.h as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min - vec2(background.x as f32, background.y as f32);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let rel = pos - origin;
                let x = rel.x.floor() as i32;
                let y = rel.y.floor() as i32;
                if let Err(e) = self.controller.on_pointer_release(x, y) {
                    error!("toggle at ({x}, {y}) failed: {e}");
                }
            }
        }

        let palette = *self.controller.palette();
        painter.rect_filled(to_screen(origin, background), 0.0, palette.background);

        for (rect, color) in self.controller.render_snapshot() {
            painter.rect_filled(to_screen(origin, rect), 0.0, color);
        }

        let stroke = Stroke::new(1.0, palette.lines);
        for line in self.controller.layout().grid_lines() {
            painter.line_segment(
                [
                    origin + vec2(line.x1 as f32, line.y1 as f32),
                    origin + vec2(line.x2 as f32, line.y2 as f32),
                ],
                stroke,
            );
        }
    }
}

impl eframe::App for GridOfLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.advance();
        }

        // Auto-advance if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        let background = self.controller.palette().background;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(background))
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing = Vec2::ZERO;
                self.board(ui);
            });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
