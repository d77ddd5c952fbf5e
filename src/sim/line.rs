//! Straight segment geometry
//!
//! A segment's supporting line is kept in implicit form `A·x + B·y = C`.
//! Two lines are solved with Cramer's rule and the solution is accepted only
//! when it falls inside the bounding ranges of both segments.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::float_cmp::TolerantFloat;

/// A bounded line between two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Implicit-form coefficients of the supporting line
    #[inline]
    pub fn coefficients(&self) -> LineCoefficients {
        LineCoefficients::through(self.start, self.end)
    }

    /// Check whether `point` lies in the closed bounding box of the segment
    ///
    /// Each axis is tested independently with the tolerant comparator, so a
    /// point equal to an endpoint coordinate is always inside.
    pub fn bounds_contain(&self, point: Vec2) -> bool {
        within(point.x, self.start.x, self.end.x) && within(point.y, self.start.y, self.end.y)
    }
}

#[inline]
fn within(value: f32, p: f32, q: f32) -> bool {
    p.min(q).at_most(value) && value.at_most(p.max(q))
}

/// Coefficients of `a·x + b·y = c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCoefficients {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl LineCoefficients {
    /// Line through two points
    ///
    /// A zero-length input gives `(0, 0, 0)`, which has a zero determinant
    /// against any other line.
    #[inline]
    pub fn through(p1: Vec2, p2: Vec2) -> Self {
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        let c = a * p1.x + b * p1.y;
        Self { a, b, c }
    }

    /// Determinant of the 2x2 system formed with `other`
    #[inline]
    pub fn determinant(&self, other: &Self) -> f32 {
        self.a * other.b - other.a * self.b
    }

    /// Residual `a·x + b·y - c` at `point` (zero on the line)
    #[inline]
    pub fn residual(&self, point: Vec2) -> f32 {
        self.a * point.x + self.b * point.y - self.c
    }

    /// Crossing point of two infinite lines
    ///
    /// Parallel and collinear lines are detected with an exact `det == 0.0`
    /// test. Nearly parallel lines therefore still produce a (possibly far
    /// away) point; the bounds check in [`intersection`] rejects it unless it
    /// really lies on both segments.
    pub fn solve(&self, other: &Self) -> Option<Vec2> {
        let det = self.determinant(other);
        if det == 0.0 {
            return None;
        }

        let x = (other.b * self.c - self.b * other.c) / det;
        let y = (self.a * other.c - other.a * self.c) / det;
        Some(Vec2::new(x, y))
    }
}

/// Intersection point of two bounded segments, if any
pub fn intersection(first: &Segment, second: &Segment) -> Option<Vec2> {
    let point = first.coefficients().solve(&second.coefficients())?;

    if first.bounds_contain(point) && second.bounds_contain(point) {
        Some(point)
    } else {
        None
    }
}
