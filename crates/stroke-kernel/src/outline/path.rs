use std::fmt;

use crate::geometry::Point2d;

/// A renderer-agnostic drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2d),
    LineTo(Point2d),
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {:.2},{:.2}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {:.2},{:.2}", p.x, p.y),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// Move to the first point, line to each following point, close.
pub fn path_commands(points: &[Point2d]) -> Vec<PathCommand> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut commands = Vec::with_capacity(points.len() + 1);
    commands.push(PathCommand::MoveTo(*first));
    commands.extend(rest.iter().map(|p| PathCommand::LineTo(*p)));
    commands.push(PathCommand::Close);
    commands
}

/// SVG-style path data for a closed polygon; empty for no points.
pub fn to_path(points: &[Point2d]) -> String {
    path_commands(points)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
