use std::path::PathBuf;

use egui::{Color32, Key, KeyboardShortcut, Modifiers, Rect};

use crate::export;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::surface::DrawingSurface;

/// Fixed offset added to the width slider value, so the thinnest setting is
/// still a visible stroke.
pub const WIDTH_BIAS: u32 = 5;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);

/// We derive Deserialize/Serialize so we can persist brush settings on
/// shutdown. Strokes themselves are session-only and never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PaintApp {
    brush_color: Color32,
    width_step: u32,
    rainbow_mode: bool,

    #[serde(skip)]
    surface: DrawingSurface,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    canvas_rect: Rect,
    #[serde(skip)]
    export_notice: Option<String>,
}

impl Default for PaintApp {
    fn default() -> Self {
        let surface = DrawingSurface::new();
        Self {
            brush_color: surface.color(),
            width_step: 0,
            rainbow_mode: false,
            input: InputHandler::new(Rect::NOTHING),
            renderer: Renderer::new(),
            canvas_rect: Rect::NOTHING,
            export_notice: None,
            surface,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // Re-apply persisted brush settings to the fresh surface. Order
        // matters: set_color drops rainbow mode.
        app.surface.set_color(app.brush_color);
        app.surface.set_rainbow_mode(app.rainbow_mode);
        app.surface
            .set_stroke_width((app.width_step + WIDTH_BIAS) as f32);
        app
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn set_color(&mut self, color: Color32) {
        self.brush_color = color;
        self.rainbow_mode = false;
        self.surface.set_color(color);
    }

    pub fn set_rainbow_mode(&mut self, enabled: bool) {
        self.rainbow_mode = enabled;
        self.surface.set_rainbow_mode(enabled);
    }

    pub fn width_step(&self) -> u32 {
        self.width_step
    }

    pub fn set_width_step(&mut self, step: u32) {
        self.width_step = step;
        self.surface.set_stroke_width((step + WIDTH_BIAS) as f32);
    }

    pub fn undo(&mut self) {
        self.surface.undo();
    }

    pub fn redo(&mut self) {
        self.surface.redo();
    }

    pub fn clear_all(&mut self) {
        self.surface.clear_all();
    }

    pub fn export_notice(&self) -> Option<&str> {
        self.export_notice.as_deref()
    }

    /// Translate this frame's raw input into pointer events for the surface.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.canvas_rect = canvas_rect;
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.surface.handle_pointer(event);
        }
    }

    /// Rasterize the canvas and write it to the export directory.
    ///
    /// Failures end here: the user gets a notice, the log gets the details,
    /// and the drawing stays untouched.
    pub fn save_drawing(&mut self) {
        let size = self.canvas_rect.size();
        match export::save_drawing(self.surface.history(), size, &export_dir()) {
            Ok(path) => {
                self.export_notice = Some(format!("Drawing saved to {}", path.display()));
            }
            Err(err) => {
                log::error!("failed to save drawing: {err}");
                self.export_notice = Some("Error saving drawing".to_owned());
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let undo = ctx.input_mut(|input| input.consume_shortcut(&UNDO_SHORTCUT));
        let redo = ctx.input_mut(|input| {
            input.consume_shortcut(&REDO_SHORTCUT) || input.consume_shortcut(&REDO_SHIFT_SHORTCUT)
        });
        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

/// Where exported drawings land. Platform-chosen, outside the core's concern.
fn export_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join("Pictures").join("Fingerpaint"))
        .unwrap_or_else(|| PathBuf::from("paintings"))
}
