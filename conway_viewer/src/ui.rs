// ui.rs - egui front end for the viewer

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use std::time::Instant;

use crate::app::{Halt, LifeApp, MAX_SPEED, MIN_SPEED};
use conway::PRESETS;

/// Gap between cells, in points.
const SPACING: f32 = 0.5;
/// Cell size bounds, in points.
const MIN_BOX: f32 = 3.0;
const MAX_BOX: f32 = 20.0;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.tick(Instant::now()) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui);
            ui.separator();
            self.board(ui);
            ui.separator();
            self.statistics(ui);
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl LifeApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Play" };
            if ui.button(button_text).clicked() {
                self.toggle_running(Instant::now());
            }

            if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                self.advance();
            }

            if ui.button("⏹ Clear").clicked() {
                self.clear();
            }

            if ui.button("🎲 Random").clicked() {
                self.randomize();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("preset_selector")
                .selected_text(self.current_preset().name)
                .show_ui(ui, |ui| {
                    for (i, preset) in PRESETS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_preset, i, preset.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.apply_selected_preset();
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!("Size: {} x {}", self.grid.width(), self.grid.height()));
            if ui.button("- Width").clicked() {
                self.resize_by(-1, 0);
            }
            if ui.button("+ Width").clicked() {
                self.resize_by(1, 0);
            }
            if ui.button("- Height").clicked() {
                self.resize_by(0, -1);
            }
            if ui.button("+ Height").clicked() {
                self.resize_by(0, 1);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = self.speed();
            if ui.add(egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED).suffix(" gen/sec")).changed() {
                self.set_speed(speed);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });

        ui.label("Click cells to toggle them while paused. Play on an empty board seeds it randomly.");
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let (width, height) = (self.grid.width(), self.grid.height());
        let box_size = box_size(ui.available_width(), width.max(height));
        let pitch = box_size + SPACING;
        let total_size = Vec2::new(pitch * width as f32 - SPACING, pitch * height as f32 - SPACING);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        // Fill background
        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for (y, row) in self.grid.rows().iter().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                let min = origin + Vec2::new(x as f32 * pitch, y as f32 * pitch);
                let rect = Rect::from_min_size(min, Vec2::splat(box_size));
                let cell_color = if alive { self.live_color } else { self.dead_color };

                painter.rect_filled(rect, 1.0, cell_color);
                if box_size >= 6.0 {
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((x, y)) = cell_at(pos, origin, box_size) {
                    self.toggle_cell(x, y);
                }
            }
        }
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let cells = self.grid.width() * self.grid.height();
        let live_cells = self.grid.population();

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", self.grid.generation()));
            ui.label(format!("Live cells: {}", live_cells));
            ui.label(format!("Dead cells: {}", cells - live_cells));
            ui.label(format!("Population: {:.1}%", live_cells as f32 / cells as f32 * 100.0));
            match self.halted {
                Some(Halt::Extinct) => ui.label("Everything died."),
                Some(Halt::Cycle) => ui.label("Board is repeating."),
                None => ui.label(""),
            };
        });
    }
}

/// Largest cell size that fits `cells` across `available` points.
fn box_size(available: f32, cells: usize) -> f32 {
    let fit = (available + SPACING) / cells.max(1) as f32 - SPACING;
    fit.clamp(MIN_BOX, MAX_BOX)
}

/// Maps a pointer position to grid coordinates.
///
/// Positions in the gap between cells map to nothing. Positions outside the
/// board give coordinates off the grid, which the grid ignores.
fn cell_at(pos: Pos2, origin: Pos2, box_size: f32) -> Option<(isize, isize)> {
    let pitch = box_size + SPACING;
    let offset = pos - origin;
    let (col, row) = ((offset.x / pitch).floor(), (offset.y / pitch).floor());
    let inside_x = offset.x - col * pitch;
    let inside_y = offset.y - row * pitch;
    if inside_x > box_size || inside_y > box_size {
        return None;
    }
    Some((col as isize, row as isize))
}
