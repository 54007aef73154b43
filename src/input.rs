use egui::{Context, PointerButton, Pos2, Rect};

/// Phase of a pointer contact. Every gesture is exactly one `Down`, zero or
/// more `Move`s, and one terminal `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer sample in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub pos: Pos2,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, pos: Pos2) -> Self {
        Self { phase, pos }
    }
}

/// Converts raw egui input into surface-local pointer gestures.
///
/// Tracks the primary-button drag state so a gesture started on the canvas
/// keeps receiving moves even when the pointer wanders off it, and is closed
/// with a synthetic `Up` if the button is released outside the window.
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    drawing: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            drawing: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    fn to_surface(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Process this frame's egui input and emit pointer events in order.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            if !self.drawing {
                if input.pointer.button_pressed(PointerButton::Primary) {
                    if let Some(pos) = hover {
                        if self.canvas_rect.contains(pos) {
                            self.drawing = true;
                            self.last_pointer_pos = Some(pos);
                            events.push(PointerEvent::new(PointerPhase::Down, self.to_surface(pos)));
                        }
                    }
                }
                return;
            }

            if let Some(pos) = hover {
                if self.last_pointer_pos != Some(pos) {
                    self.last_pointer_pos = Some(pos);
                    events.push(PointerEvent::new(PointerPhase::Move, self.to_surface(pos)));
                }
            }

            if !input.pointer.button_down(PointerButton::Primary) {
                // Released this frame, or the release happened off-window.
                let pos = hover
                    .or(self.last_pointer_pos)
                    .unwrap_or(self.canvas_rect.min);
                self.drawing = false;
                self.last_pointer_pos = None;
                events.push(PointerEvent::new(PointerPhase::Up, self.to_surface(pos)));
            }
        });

        events
    }
}
