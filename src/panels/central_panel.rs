use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_rect = ui.available_rect_before_wrap();

        // Handle input before painting so this frame shows the newest segment.
        app.handle_input(ctx, canvas_rect);

        let painter = ui.painter();
        app.renderer().render(painter, canvas_rect, app.surface().history());
    });
}
