use egui::{Color32, Pos2};
use fingerpaint::{DrawingSurface, PathCommand, PointerPhase};

fn down(surface: &mut DrawingSurface, x: f32, y: f32) {
    surface.pointer(PointerPhase::Down, Pos2::new(x, y));
}

fn move_to(surface: &mut DrawingSurface, x: f32, y: f32) {
    surface.pointer(PointerPhase::Move, Pos2::new(x, y));
}

fn up(surface: &mut DrawingSurface, x: f32, y: f32) {
    surface.pointer(PointerPhase::Up, Pos2::new(x, y));
}

#[test]
fn single_move_gesture_builds_curve_and_terminal() {
    let mut surface = DrawingSurface::new();
    down(&mut surface, 0.0, 0.0);
    move_to(&mut surface, 10.0, 10.0);
    up(&mut surface, 10.0, 10.0);

    let strokes = surface.history().strokes();
    assert_eq!(strokes.len(), 1);

    let stroke = &strokes[0];
    assert_eq!(stroke.color(), Color32::BLACK);
    assert_eq!(stroke.width(), 5.0);
    assert_eq!(
        stroke.path(),
        &[
            PathCommand::MoveTo(Pos2::new(0.0, 0.0)),
            PathCommand::QuadTo {
                ctrl: Pos2::new(0.0, 0.0),
                to: Pos2::new(5.0, 5.0),
            },
            PathCommand::LineTo(Pos2::new(10.0, 10.0)),
        ]
    );
}

#[test]
fn segment_count_is_accepted_moves_plus_terminal() {
    let mut surface = DrawingSurface::new();
    down(&mut surface, 0.0, 0.0);
    for i in 1..=6 {
        move_to(&mut surface, i as f32 * 10.0, 0.0);
    }
    up(&mut surface, 60.0, 0.0);

    assert_eq!(surface.history().strokes()[0].segment_count(), 7);
}

#[test]
fn jitter_below_tolerance_adds_no_curve_segment() {
    let mut surface = DrawingSurface::new();
    down(&mut surface, 0.0, 0.0);
    move_to(&mut surface, 1.0, 1.0);
    up(&mut surface, 0.0, 0.0);

    let stroke = &surface.history().strokes()[0];
    assert!(
        stroke
            .path()
            .iter()
            .all(|command| !matches!(command, PathCommand::QuadTo { .. }))
    );
}

#[test]
fn jitter_keeps_the_original_anchor() {
    let mut surface = DrawingSurface::new();
    down(&mut surface, 0.0, 0.0);
    // Below tolerance on both axes: dropped, anchor stays at the origin.
    move_to(&mut surface, 2.0, 2.0);
    move_to(&mut surface, 10.0, 0.0);
    up(&mut surface, 10.0, 0.0);

    let stroke = &surface.history().strokes()[0];
    assert_eq!(
        stroke.path()[1],
        PathCommand::QuadTo {
            ctrl: Pos2::new(0.0, 0.0),
            to: Pos2::new(5.0, 0.0),
        }
    );
}

#[test]
fn one_axis_above_tolerance_is_accepted() {
    let mut surface = DrawingSurface::new();
    down(&mut surface, 0.0, 0.0);
    move_to(&mut surface, 4.0, 0.0);
    up(&mut surface, 4.0, 0.0);

    assert_eq!(surface.history().strokes()[0].segment_count(), 2);
}

#[test]
fn terminal_segment_goes_to_last_anchor_not_lift_off() {
    let mut surface = DrawingSurface::new();
    down(&mut surface, 0.0, 0.0);
    move_to(&mut surface, 10.0, 10.0);
    up(&mut surface, 50.0, 50.0);

    let stroke = &surface.history().strokes()[0];
    assert_eq!(
        stroke.path().last(),
        Some(&PathCommand::LineTo(Pos2::new(10.0, 10.0)))
    );
}

#[test]
fn dot_gesture_flattens_to_a_single_point() {
    let mut surface = DrawingSurface::new();
    down(&mut surface, 7.0, 9.0);
    up(&mut surface, 7.0, 9.0);

    let stroke = &surface.history().strokes()[0];
    assert_eq!(stroke.flatten(0.25), vec![Pos2::new(7.0, 9.0)]);
}

#[test]
fn out_of_phase_events_are_no_ops() {
    let mut surface = DrawingSurface::new();
    move_to(&mut surface, 10.0, 10.0);
    up(&mut surface, 10.0, 10.0);
    assert!(surface.history().strokes().is_empty());

    // A stray move after the gesture ended changes nothing either.
    down(&mut surface, 0.0, 0.0);
    up(&mut surface, 0.0, 0.0);
    let sealed = surface.history().strokes()[0].clone();
    move_to(&mut surface, 40.0, 40.0);
    assert_eq!(surface.history().strokes()[0], sealed);
}

#[test]
fn strokes_record_the_style_at_down_time() {
    let mut surface = DrawingSurface::new();
    surface.set_color(Color32::RED);
    surface.set_stroke_width(9.0);
    down(&mut surface, 0.0, 0.0);
    move_to(&mut surface, 10.0, 0.0);
    up(&mut surface, 10.0, 0.0);

    // Changing the style afterwards must not repaint history.
    surface.set_color(Color32::BLUE);
    surface.set_stroke_width(1.0);

    let stroke = &surface.history().strokes()[0];
    assert_eq!(stroke.color(), Color32::RED);
    assert_eq!(stroke.width(), 9.0);
}
