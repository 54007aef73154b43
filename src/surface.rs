use egui::{Color32, Pos2};

use crate::history::StrokeHistory;
use crate::input::{PointerEvent, PointerPhase};
use crate::palette::ColorCycle;
use crate::path::PathBuilder;

const DEFAULT_COLOR: Color32 = Color32::BLACK;
const DEFAULT_STROKE_WIDTH: f32 = 5.0;

/// The drawing surface: stroke history, smoothing state, and brush style.
///
/// Pointer events, style changes, and undo/redo all happen on the UI thread;
/// the surface holds no locks and every call returns immediately.
pub struct DrawingSurface {
    history: StrokeHistory,
    builder: PathBuilder,
    cycle: ColorCycle,
    color: Color32,
    stroke_width: f32,
    rainbow_mode: bool,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface {
    pub fn new() -> Self {
        Self {
            history: StrokeHistory::new(),
            builder: PathBuilder::new(),
            cycle: ColorCycle::new(),
            color: DEFAULT_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            rainbow_mode: false,
        }
    }

    /// Route one pointer event into the path builder.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.phase {
            PointerPhase::Down => {
                self.builder
                    .begin(&mut self.history, self.color, self.stroke_width, event.pos);
            }
            PointerPhase::Move => {
                let rainbow = self.rainbow_mode.then_some(&mut self.cycle);
                self.builder
                    .extend(&mut self.history, rainbow, self.stroke_width, event.pos);
            }
            PointerPhase::Up => {
                self.builder.finish(&mut self.history);
            }
        }
    }

    /// Convenience for tests and host glue.
    pub fn pointer(&mut self, phase: PointerPhase, pos: Pos2) {
        self.handle_pointer(PointerEvent::new(phase, pos));
    }

    /// Picking an explicit color always leaves rainbow mode.
    pub fn set_color(&mut self, color: Color32) {
        self.rainbow_mode = false;
        self.color = color;
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Toggling rainbow mode does not touch the stored explicit color; the
    /// cycle only supplies per-stroke colors while a gesture is active.
    pub fn set_rainbow_mode(&mut self, enabled: bool) {
        self.rainbow_mode = enabled;
    }

    pub fn rainbow_mode(&self) -> bool {
        self.rainbow_mode
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn undo(&mut self) {
        self.history.undo();
    }

    pub fn redo(&mut self) {
        self.history.redo();
    }

    pub fn clear_all(&mut self) {
        self.history.clear_all();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn is_drawing(&self) -> bool {
        self.builder.is_drawing()
    }
}
