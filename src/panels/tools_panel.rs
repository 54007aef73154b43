use crate::PaintApp;
use crate::palette;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Brush");
            ui.separator();

            preset_grid(app, ui);

            let rainbow = app.surface().rainbow_mode();
            if ui.selectable_label(rainbow, "🌈 Rainbow").clicked() {
                app.set_rainbow_mode(!rainbow);
            }

            ui.separator();

            let mut step = app.width_step();
            ui.horizontal(|ui| {
                ui.label("Width:");
                if ui.add(egui::Slider::new(&mut step, 0..=45)).changed() {
                    app.set_width_step(step);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.surface().can_undo();
                let can_redo = app.surface().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("⟲ Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("⟳ Redo")).clicked() {
                    app.redo();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear_all();
                }
                if ui.button("Save").clicked() {
                    app.save_drawing();
                }
            });

            ui.separator();

            let history = app.surface().history();
            ui.label(format!("Strokes: {}", history.stroke_count()));
            ui.label(format!("Redo buffer: {}", history.redo_count()));

            if let Some(notice) = app.export_notice() {
                ui.separator();
                ui.label(notice.to_owned());
            }
        });
}

fn preset_grid(app: &mut PaintApp, ui: &mut egui::Ui) {
    egui::Grid::new("preset_colors").spacing([4.0, 4.0]).show(ui, |ui| {
        for (i, (name, color)) in palette::PRESETS.iter().enumerate() {
            let selected = !app.surface().rainbow_mode() && app.surface().color() == *color;
            let stroke = if selected {
                egui::Stroke::new(2.0, ui.visuals().strong_text_color())
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(120))
            };
            let swatch = egui::Button::new("")
                .fill(*color)
                .stroke(stroke)
                .min_size(egui::vec2(28.0, 28.0));
            if ui.add(swatch).on_hover_text(*name).clicked() {
                app.set_color(*color);
            }
            if i % 4 == 3 {
                ui.end_row();
            }
        }
    });
}
