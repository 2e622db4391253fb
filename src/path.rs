//! Point sequence to vector path conversion.
//!
//! A stroke's points are turned into a list of [`PathCommand`]s, which can
//! be printed as an SVG path description (`d` attribute) or flattened back
//! into a polyline for painting.

use crate::stroke::BrushShape;
use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const DEFAULT_TENSION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Pos2),
    LineTo(Pos2),
    CubicTo { c1: Pos2, c2: Pos2, to: Pos2 },
}

/// `M p0` then a straight segment to every following point
pub fn polyline_commands(points: &[Pos2]) -> Vec<PathCommand> {
    let [first, rest @ ..] = points else {
        return Vec::new();
    };
    if rest.is_empty() {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(*first));
    commands.extend(rest.iter().copied().map(PathCommand::LineTo));
    commands
}

/// Catmull-Rom style curve through `points`.
///
/// Two points still give a straight line. Longer inputs start with a cubic
/// whose only real control point sits `tension` of the way along the first
/// segment, then one cubic per interior point using that point's incoming
/// and outgoing control points.
pub fn smooth_commands(points: &[Pos2], tension: f32) -> Vec<PathCommand> {
    if points.len() <= 2 {
        return polyline_commands(points);
    }

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(points[0]));

    let (_, lead) = control_points(points[0], points[0], points[1], tension);
    commands.push(PathCommand::CubicTo {
        c1: lead,
        c2: points[1],
        to: points[1],
    });

    for window in points.windows(3) {
        let (c1, c2) = control_points(window[0], window[1], window[2], tension);
        commands.push(PathCommand::CubicTo {
            c1,
            c2,
            to: window[2],
        });
    }

    commands
}

/// Control points on either side of `p1`, spread along `p0 -> p2`
/// proportionally to the adjacent segment lengths
fn control_points(p0: Pos2, p1: Pos2, p2: Pos2, tension: f32) -> (Pos2, Pos2) {
    let d01 = p0.distance(p1);
    let d12 = p1.distance(p2);
    let total = d01 + d12;
    if total <= 0.0 {
        return (p1, p1);
    }

    let span: Vec2 = p2 - p0;
    let fa = tension * d01 / total;
    let fb = tension * d12 / total;
    (p1 - span * fa, p1 + span * fb)
}

/// SVG path description (`M x,y L x,y ...`) for a command list
pub fn describe(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = match command {
            PathCommand::MoveTo(p) => write!(out, "M {}", coord(*p)),
            PathCommand::LineTo(p) => write!(out, "L {}", coord(*p)),
            PathCommand::CubicTo { c1, c2, to } => {
                write!(out, "C {} {} {}", coord(*c1), coord(*c2), coord(*to))
            }
        };
    }
    out
}

fn coord(p: Pos2) -> String {
    format!("{},{}", number(p.x), number(p.y))
}

// Shortest form, and no "-0"
fn number(v: f32) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}

pub fn points_to_path_description(points: &[Pos2]) -> String {
    describe(&polyline_commands(points))
}

pub fn points_to_smooth_path_description(points: &[Pos2], tension: f32) -> String {
    describe(&smooth_commands(points, tension))
}

/// Turn commands into a single polyline, sampling each cubic with
/// `curve_steps` segments
pub fn flatten(commands: &[PathCommand], curve_steps: usize) -> Vec<Pos2> {
    let steps = curve_steps.max(1);
    let mut out: Vec<Pos2> = Vec::new();
    for command in commands {
        match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => out.push(p),
            PathCommand::CubicTo { c1, c2, to } => {
                let from = out.last().copied().unwrap_or(c1);
                for i in 1..=steps {
                    let t = i as f32 / steps as f32;
                    out.push(cubic_point(from, c1, c2, to, t));
                }
            }
        }
    }
    out
}

fn cubic_point(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    Pos2::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// How a point sequence is turned into a path
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    Polyline,
    Smooth { tension: f32 },
}

impl RenderMode {
    pub fn commands(self, points: &[Pos2]) -> Vec<PathCommand> {
        match self {
            RenderMode::Polyline => polyline_commands(points),
            RenderMode::Smooth { tension } => smooth_commands(points, tension),
        }
    }

    pub fn describe(self, points: &[Pos2]) -> String {
        describe(&self.commands(points))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
    Butt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Round,
    Miter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Star has no geometry of its own and draws like round
    pub fn for_shape(shape: BrushShape) -> Self {
        match shape {
            BrushShape::Square => Self {
                cap: LineCap::Butt,
                join: LineJoin::Miter,
            },
            BrushShape::Round | BrushShape::Star => Self {
                cap: LineCap::Round,
                join: LineJoin::Round,
            },
        }
    }

    pub fn svg_linecap(self) -> &'static str {
        match self.cap {
            LineCap::Round => "round",
            LineCap::Butt => "butt",
        }
    }

    pub fn svg_linejoin(self) -> &'static str {
        match self.join {
            LineJoin::Round => "round",
            LineJoin::Miter => "miter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_format() {
        assert_eq!(number(10.0), "10");
        assert_eq!(number(2.5), "2.5");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(-3.0), "-3");
    }

    #[test]
    fn test_control_points_collapse_on_repeated_point() {
        let p = Pos2::new(4.0, 4.0);
        assert_eq!(control_points(p, p, p, DEFAULT_TENSION), (p, p));
    }

    #[test]
    fn test_control_points_symmetric() {
        let (c1, c2) = control_points(
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 0.0),
            Pos2::new(20.0, 0.0),
            0.5,
        );
        assert_eq!(c1, Pos2::new(5.0, 0.0));
        assert_eq!(c2, Pos2::new(15.0, 0.0));
    }

    #[test]
    fn test_flatten_hits_cubic_endpoint() {
        let commands = smooth_commands(
            &[Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0), Pos2::new(20.0, 0.0)],
            DEFAULT_TENSION,
        );
        let line = flatten(&commands, 8);
        assert_eq!(line.first(), Some(&Pos2::new(0.0, 0.0)));
        let last = line.last().copied().unwrap();
        assert!((last.x - 20.0).abs() < 1e-4 && last.y.abs() < 1e-4);
        assert_eq!(line.len(), 1 + 8 * 2);
    }

    #[test]
    fn test_flatten_polyline_is_identity() {
        let points = [Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0), Pos2::new(10.0, 0.0)];
        assert_eq!(flatten(&polyline_commands(&points), 8), points.to_vec());
    }

    #[test]
    fn test_render_mode_serde() {
        let mode: RenderMode = serde_json::from_str(r#"{"kind":"smooth","tension":0.25}"#).unwrap();
        assert_eq!(mode, RenderMode::Smooth { tension: 0.25 });
        let mode: RenderMode = serde_json::from_str(r#"{"kind":"polyline"}"#).unwrap();
        assert_eq!(mode, RenderMode::Polyline);
    }
}
