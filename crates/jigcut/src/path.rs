//! Vector path primitives in image pixel space.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Segment {
    Line {
        to: Point,
    },
    Quadratic {
        ctrl: Point,
        to: Point,
    },
    Cubic {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

impl Segment {
    pub fn to(&self) -> Point {
        match *self {
            Segment::Line { to } | Segment::Quadratic { to, .. } | Segment::Cubic { to, .. } => to,
        }
    }

    pub fn is_curve(&self) -> bool {
        !matches!(self, Segment::Line { .. })
    }

    /// Control points followed by the end point.
    fn points(&self) -> impl Iterator<Item = Point> {
        let pts: [Option<Point>; 3] = match *self {
            Segment::Line { to } => [Some(to), None, None],
            Segment::Quadratic { ctrl, to } => [Some(ctrl), Some(to), None],
            Segment::Cubic { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
        };
        pts.into_iter().flatten()
    }

    /// The same curve walked backwards, ending at `start` (the point this segment starts from).
    fn reversed(&self, start: Point) -> Segment {
        match *self {
            Segment::Line { .. } => Segment::Line { to: start },
            Segment::Quadratic { ctrl, .. } => Segment::Quadratic { ctrl, to: start },
            Segment::Cubic { ctrl1, ctrl2, .. } => Segment::Cubic {
                ctrl1: ctrl2,
                ctrl2: ctrl1,
                to: start,
            },
        }
    }
}

/// A run of segments starting at `start`. Each segment begins where the previous one ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPath {
    pub start: Point,
    pub segments: Vec<Segment>,
    pub closed: bool,
}

impl SubPath {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
            closed: false,
        }
    }

    pub fn line_to(&mut self, to: Point) {
        self.segments.push(Segment::Line { to });
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.segments.push(Segment::Quadratic { ctrl, to });
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.segments.push(Segment::Cubic { ctrl1, ctrl2, to });
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Current pen position: the last segment's end point, or `start` when empty.
    pub fn end_point(&self) -> Point {
        self.segments.last().map_or(self.start, Segment::to)
    }

    /// Same geometry traced from the end point back to `start`.
    pub fn reversed(&self) -> SubPath {
        let mut starts = Vec::with_capacity(self.segments.len());
        let mut pen = self.start;
        for seg in &self.segments {
            starts.push(pen);
            pen = seg.to();
        }
        let segments = self
            .segments
            .iter()
            .zip(starts)
            .rev()
            .map(|(seg, from)| seg.reversed(from))
            .collect();
        SubPath {
            start: pen,
            segments,
            closed: self.closed,
        }
    }

    pub fn has_curves(&self) -> bool {
        self.segments.iter().any(Segment::is_curve)
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().flat_map(Segment::points))
    }
}

/// One or more sub-paths. Piece outlines hold a single closed sub-path; the cut overlay holds
/// one open sub-path per interior edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sub: SubPath) {
        self.subpaths.push(sub);
    }

    pub fn segment_count(&self) -> usize {
        self.subpaths.iter().map(|s| s.segments.len()).sum()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.subpaths.iter().flat_map(|s| s.segments.iter())
    }

    /// Box around every start, control and end point. Contains the curve itself (bezier
    /// convex hull property) but may be larger than its tight bounds.
    pub fn control_bounds(&self) -> Option<Rect> {
        let mut points = self.subpaths.iter().flat_map(SubPath::points).peekable();
        points.peek()?;
        Some(Rect::from_points(points))
    }

    /// SVG path data (`M`, `L`, `Q`, `C`, `Z`), coordinates rounded to two decimals.
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for sub in &self.subpaths {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "M{}", fmt_point(sub.start));
            for seg in &sub.segments {
                let _ = match *seg {
                    Segment::Line { to } => write!(out, " L{}", fmt_point(to)),
                    Segment::Quadratic { ctrl, to } => {
                        write!(out, " Q{} {}", fmt_point(ctrl), fmt_point(to))
                    }
                    Segment::Cubic { ctrl1, ctrl2, to } => write!(
                        out,
                        " C{} {} {}",
                        fmt_point(ctrl1),
                        fmt_point(ctrl2),
                        fmt_point(to)
                    ),
                };
            }
            if sub.closed {
                out.push_str(" Z");
            }
        }
        out
    }
}

fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_number(p.x), fmt_number(p.y))
}

fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{:.2}", (v * 100.0).round() / 100.0);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}
