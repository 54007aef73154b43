use egui::{Color32, Pos2};

use crate::history::StrokeHistory;
use crate::palette::ColorCycle;
use crate::stroke::Stroke;

/// Minimum per-axis delta for a move sample to count as motion.
pub const TOUCH_TOLERANCE: f32 = 4.0;

/// Incremental smoothing state machine for the stroke being drawn.
///
/// Raw pointer samples become quadratic curve segments: each accepted sample
/// adds a curve whose control point is the previous sample and whose endpoint
/// is the midpoint between the two, so consecutive segments join tangentially
/// at sample midpoints.
#[derive(Debug)]
pub struct PathBuilder {
    /// Last accepted raw sample; `Some` while a gesture is active.
    anchor: Option<Pos2>,
    tolerance: f32,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::with_tolerance(TOUCH_TOLERANCE)
    }

    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            anchor: None,
            tolerance,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.anchor.is_some()
    }

    /// Start a gesture: invalidate the redo buffer and open a fresh stroke.
    pub fn begin(&mut self, history: &mut StrokeHistory, color: Color32, width: f32, pos: Pos2) {
        history.clear_redo();
        let mut stroke = Stroke::new(color, width);
        stroke.move_to(pos);
        history.add(stroke);
        self.anchor = Some(pos);
    }

    /// Feed one move sample. Samples below the jitter tolerance are dropped.
    ///
    /// With `rainbow` set, every accepted sample first opens a new stroke at
    /// the anchor with the cycle's next color, so a single gesture becomes a
    /// run of hue-cycling strokes. The redo buffer is left alone here; only a
    /// pointer-down invalidates it.
    pub fn extend(
        &mut self,
        history: &mut StrokeHistory,
        rainbow: Option<&mut ColorCycle>,
        width: f32,
        pos: Pos2,
    ) {
        let Some(anchor) = self.anchor else {
            // Move without a preceding down: ignore.
            return;
        };
        if (pos.x - anchor.x).abs() < self.tolerance && (pos.y - anchor.y).abs() < self.tolerance {
            return;
        }

        if let Some(cycle) = rainbow {
            let mut stroke = Stroke::new(cycle.next(), width);
            stroke.move_to(anchor);
            history.add(stroke);
        }

        if let Some(active) = history.active_mut() {
            let midpoint = Pos2::new((pos.x + anchor.x) / 2.0, (pos.y + anchor.y) / 2.0);
            active.quad_to(anchor, midpoint);
        }
        self.anchor = Some(pos);
    }

    /// End the gesture, sealing the active stroke with a straight segment to
    /// the last accepted anchor (not the lift-off coordinates).
    pub fn finish(&mut self, history: &mut StrokeHistory) {
        let Some(anchor) = self.anchor.take() else {
            return;
        };
        if let Some(active) = history.active_mut() {
            active.line_to(anchor);
        }
    }
}
