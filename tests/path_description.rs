use coloring_board::path::{
    DEFAULT_TENSION, LineCap, LineJoin, PathCommand, RenderMode, StrokeStyle, polyline_commands,
    smooth_commands,
};
use coloring_board::stroke::BrushShape;
use coloring_board::{points_to_path_description, points_to_smooth_path_description};
use egui::Pos2;

fn pts(coords: &[(f32, f32)]) -> Vec<Pos2> {
    coords.iter().map(|&(x, y)| Pos2::new(x, y)).collect()
}

#[test]
fn test_too_few_points_draw_nothing() {
    assert_eq!(points_to_path_description(&[]), "");
    assert_eq!(points_to_path_description(&pts(&[(3.0, 4.0)])), "");
    assert_eq!(points_to_smooth_path_description(&[], DEFAULT_TENSION), "");
    assert_eq!(
        points_to_smooth_path_description(&pts(&[(3.0, 4.0)]), DEFAULT_TENSION),
        ""
    );
}

#[test]
fn test_two_points_single_segment() {
    let points = pts(&[(0.0, 0.0), (10.0, 10.0)]);
    assert_eq!(points_to_path_description(&points), "M 0,0 L 10,10");
    assert_eq!(
        polyline_commands(&points),
        vec![
            PathCommand::MoveTo(Pos2::new(0.0, 0.0)),
            PathCommand::LineTo(Pos2::new(10.0, 10.0)),
        ]
    );
}

#[test]
fn test_polyline_visits_points_in_order() {
    let points = pts(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]);
    assert_eq!(points_to_path_description(&points), "M 0,0 L 5,5 L 10,0");
}

#[test]
fn test_fractional_and_negative_coordinates() {
    let points = pts(&[(1.5, -2.25), (-0.5, 3.0)]);
    assert_eq!(points_to_path_description(&points), "M 1.5,-2.25 L -0.5,3");
}

#[test]
fn test_smooth_two_points_is_straight() {
    let points = pts(&[(0.0, 0.0), (10.0, 10.0)]);
    assert_eq!(
        points_to_smooth_path_description(&points, DEFAULT_TENSION),
        "M 0,0 L 10,10"
    );
}

#[test]
fn test_smooth_three_points() {
    let points = pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
    // lead-in control sits halfway along the first segment; the interior
    // point gets controls a quarter of the span on either side
    assert_eq!(
        points_to_smooth_path_description(&points, 0.5),
        "M 0,0 C 5,0 10,0 10,0 C 5,0 15,0 20,0"
    );
}

#[test]
fn test_smooth_command_count() {
    let points = pts(&[(0.0, 0.0), (4.0, 8.0), (9.0, 3.0), (15.0, 10.0), (20.0, 0.0)]);
    let commands = smooth_commands(&points, DEFAULT_TENSION);
    // move + lead-in + one cubic per interior point
    assert_eq!(commands.len(), 1 + 1 + 3);
    assert_eq!(commands[0], PathCommand::MoveTo(points[0]));
    assert!(matches!(
        commands.last(),
        Some(PathCommand::CubicTo { to, .. }) if *to == points[4]
    ));
}

#[test]
fn test_smooth_tolerates_repeated_points() {
    let points = pts(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]);
    let description = points_to_smooth_path_description(&points, DEFAULT_TENSION);
    assert!(!description.contains("NaN"));
    assert_eq!(description, "M 2,2 C 2,2 2,2 2,2 C 2,2 2,2 2,2");
}

#[test]
fn test_render_mode_selects_algorithm() {
    let points = pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
    assert_eq!(
        RenderMode::Polyline.describe(&points),
        points_to_path_description(&points)
    );
    assert_eq!(
        RenderMode::Smooth { tension: 0.5 }.describe(&points),
        points_to_smooth_path_description(&points, 0.5)
    );
    assert_eq!(RenderMode::default(), RenderMode::Polyline);
}

#[test]
fn test_stroke_style_per_shape() {
    let round = StrokeStyle::for_shape(BrushShape::Round);
    assert_eq!((round.cap, round.join), (LineCap::Round, LineJoin::Round));

    let square = StrokeStyle::for_shape(BrushShape::Square);
    assert_eq!((square.svg_linecap(), square.svg_linejoin()), ("butt", "miter"));

    // star has no geometry of its own
    assert_eq!(StrokeStyle::for_shape(BrushShape::Star), round);
}
