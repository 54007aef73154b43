use egui::epaint::PathShape;
use egui::{Color32, Painter, Pos2, Rect, Shape};

use crate::history::StrokeHistory;
use crate::palette;
use crate::stroke::Stroke;

/// Curve flattening tolerance in surface units.
const FLATTEN_TOLERANCE: f32 = 0.25;

/// Paints the stroke history into an egui canvas.
///
/// Every stroke is drawn with its own recorded color and width, in insertion
/// order, anti-aliased with round caps. The style is fixed; the current brush
/// settings never affect strokes already in the history.
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: palette::BACKGROUND,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Render the whole history into `rect`.
    pub fn render(&self, painter: &Painter, rect: Rect, history: &StrokeHistory) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);

        let origin = rect.min.to_vec2();
        for stroke in history.strokes() {
            Self::paint_stroke(&painter, origin, stroke);
        }
    }

    fn paint_stroke(painter: &Painter, origin: egui::Vec2, stroke: &Stroke) {
        let points: Vec<Pos2> = stroke
            .flatten(FLATTEN_TOLERANCE)
            .into_iter()
            .map(|p| p + origin)
            .collect();
        // A gesture with no accepted move flattens to a single point and
        // paints nothing, like an empty platform path would.
        if points.len() < 2 {
            return;
        }

        let radius = stroke.width() / 2.0;
        let first = points[0];
        let last = points[points.len() - 1];

        painter.circle_filled(first, radius, stroke.color());
        painter.add(Shape::Path(PathShape::line(
            points,
            egui::Stroke::new(stroke.width(), stroke.color()),
        )));
        painter.circle_filled(last, radius, stroke.color());
    }
}
