use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Pos2};

/// A single drawing command of a stroke path, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Pos2),
    QuadTo { ctrl: Pos2, to: Pos2 },
    LineTo(Pos2),
}

/// One smoothed freehand stroke with a fixed color and width.
///
/// The path is appended to while its gesture is in progress and never touched
/// again afterwards; undo/redo move the whole stroke between collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    color: Color32,
    width: f32,
    path: Vec<PathCommand>,
}

impl Stroke {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            path: Vec::new(),
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn path(&self) -> &[PathCommand] {
        &self.path
    }

    /// Number of drawing segments (everything except the initial move-to).
    pub fn segment_count(&self) -> usize {
        self.path
            .iter()
            .filter(|command| !matches!(command, PathCommand::MoveTo(_)))
            .count()
    }

    // Path mutators are crate-private: only the path builder appends, while
    // the stroke's gesture is still active.
    pub(crate) fn move_to(&mut self, to: Pos2) {
        self.path.push(PathCommand::MoveTo(to));
    }

    pub(crate) fn quad_to(&mut self, ctrl: Pos2, to: Pos2) {
        self.path.push(PathCommand::QuadTo { ctrl, to });
    }

    pub(crate) fn line_to(&mut self, to: Pos2) {
        self.path.push(PathCommand::LineTo(to));
    }

    /// Flatten the path into a polyline, subdividing quadratic segments.
    ///
    /// Consecutive duplicate points are collapsed, so a degenerate stroke
    /// (pointer lifted without an accepted move) flattens to a single point.
    pub fn flatten(&self, tolerance: f32) -> Vec<Pos2> {
        let mut points: Vec<Pos2> = Vec::new();
        for command in &self.path {
            match *command {
                PathCommand::MoveTo(to) => {
                    points.clear();
                    points.push(to);
                }
                PathCommand::LineTo(to) => {
                    if points.last() != Some(&to) {
                        points.push(to);
                    }
                }
                PathCommand::QuadTo { ctrl, to } => {
                    let Some(&start) = points.last() else {
                        continue;
                    };
                    let curve = QuadraticBezierShape::from_points_stroke(
                        [start, ctrl, to],
                        false,
                        Color32::TRANSPARENT,
                        egui::Stroke::NONE,
                    );
                    for point in curve.flatten(Some(tolerance)) {
                        if points.last() != Some(&point) {
                            points.push(point);
                        }
                    }
                }
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_count_ignores_move_to() {
        let mut stroke = Stroke::new(Color32::BLACK, 5.0);
        stroke.move_to(Pos2::new(0.0, 0.0));
        assert_eq!(stroke.segment_count(), 0);

        stroke.quad_to(Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));
        stroke.line_to(Pos2::new(10.0, 10.0));
        assert_eq!(stroke.segment_count(), 2);
    }

    #[test]
    fn flatten_collapses_degenerate_path() {
        let mut stroke = Stroke::new(Color32::BLACK, 5.0);
        stroke.move_to(Pos2::new(3.0, 4.0));
        stroke.line_to(Pos2::new(3.0, 4.0));
        assert_eq!(stroke.flatten(0.25), vec![Pos2::new(3.0, 4.0)]);
    }

    #[test]
    fn flatten_follows_curve_endpoints() {
        let mut stroke = Stroke::new(Color32::BLACK, 5.0);
        stroke.move_to(Pos2::new(0.0, 0.0));
        stroke.quad_to(Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));
        stroke.line_to(Pos2::new(10.0, 10.0));

        let points = stroke.flatten(0.25);
        assert_eq!(points.first(), Some(&Pos2::new(0.0, 0.0)));
        assert_eq!(points.last(), Some(&Pos2::new(10.0, 10.0)));
        assert!(points.len() >= 3);
    }
}
