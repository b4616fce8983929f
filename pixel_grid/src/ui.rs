// ui.rs - egui rendering for the pixel grid window

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::app::{PixelGridApp, PixelGridInterface};
use crate::config::{
    BANNER_TEXT, CELL_SIZE, CELL_SPACING, INTERVAL_FIELD_CHARS, NOTICE_TITLE, grid_extent,
};
use crate::grid::CELL_COUNT;

impl eframe::App for PixelGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl PixelGridApp {
    /// Draw one frame. Posted shifts are applied first, so a frame never sees half a shift.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.apply_pending_events();
        let enabled = self.notice.is_none();

        egui::TopBottomPanel::top("banner").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(BANNER_TEXT);
            });
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                self.controls(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                self.grid_view(ui);
            });
        });

        self.notice_window(ctx);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Speed (ms):");

            let mut text = self.interval_text.clone();
            let field = egui::TextEdit::singleline(&mut text)
                .desired_width(INTERVAL_FIELD_CHARS as f32 * 10.0);
            if ui.add(field).changed() {
                self.set_interval_text(&text);
            }

            if ui.button("▶ Start").clicked() {
                self.start_animation();
            }

            if ui.button("⏹ Stop").clicked() {
                self.stop_animation();
            }

            if ui.button("Clear").clicked() {
                self.clear_grid();
            }
        });

        ui.horizontal(|ui| {
            let state = if self.is_running() { "Running" } else { "Idle" };
            ui.label(state);
            ui.separator();
            ui.label(format!("Active cells: {}/{}", self.grid.active_count(), CELL_COUNT));
        });
    }

    fn grid_view(&mut self, ui: &mut egui::Ui) {
        let start_pos = ui.cursor().min;
        let total_size = grid_extent();

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        painter.rect_filled(
            Rect::from_min_size(start_pos, total_size),
            0.0,
            Color32::GRAY,
        );

        let clicked_at = if response.clicked() { response.interact_pointer_pos() } else { None };
        let mut clicked_cell = None;

        for (row, cells) in self.grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let x = start_pos.x + col as f32 * (CELL_SIZE + CELL_SPACING);
                let y = start_pos.y + row as f32 * (CELL_SIZE + CELL_SPACING);
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(CELL_SIZE));

                painter.rect_filled(rect, 0.0, cell.color().color32());
                painter.rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::GRAY));

                if clicked_at.is_some_and(|pos| rect.contains(pos)) {
                    clicked_cell = Some((row, col));
                }
            }
        }

        if let Some((row, col)) = clicked_cell {
            self.click_cell(row, col);
        }
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(NOTICE_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.dismiss_notice();
        }
    }
}
