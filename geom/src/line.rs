use std::iter::FusedIterator;
use std::mem::swap;

use crate::Vector2;

/// An iterator over the grid points of a rasterized line segment.
///
/// The iterator always walks along its X-axis. For steep segments the axes are transposed and every point is transposed back upon
/// output. The minor axis advances based on an integer error accumulator, so no floating-point arithmetic or division is involved.
///
/// Instances are created by [`line`] and [`line_exact`]. A `Line` can not be restarted; create a new one to walk the segment again.
#[derive(Clone, Debug)]
pub struct Line {
    /// The next X-value (inclusive).
    x: i32,
    /// The final X-value (inclusive).
    end_x: i32,
    /// The current Y-value.
    y: i32,
    /// The Y-increment (either 1 or -1).
    y_step: i32,
    /// The error accumulator.
    err: i64,
    /// The span on the X-axis.
    diff_x: i64,
    /// The absolute span on the Y-axis.
    diff_y: i64,
    /// Flag that signals that X and Y must be swapped upon output.
    steep: bool,
    /// Flag that signals that iteration is exhausted.
    exhausted: bool,
}

impl Line {
    /// Creates a new instance that walks from `source` to `end` along the X-axis.
    ///
    /// # Parameters
    /// * `source`: The start point (in walking space).
    /// * `end`: The end point (in walking space).
    /// * `steep`: Whether the output points must be transposed.
    fn walk(source: (i32, i32), end: (i32, i32), steep: bool) -> Self {
        let (source_x, source_y) = source;
        let (end_x, end_y) = end;
        let diff_x = i64::from(end_x) - i64::from(source_x);
        let diff_y = (i64::from(end_y) - i64::from(source_y)).abs();

        Self {
            x: source_x,
            end_x,
            y: source_y,
            y_step: if source_y < end_y { 1 } else { -1 },
            // Integer division truncates toward zero, which matters for negative spans
            err: diff_x / 2,
            diff_x,
            diff_y,
            steep,
            exhausted: source_x > end_x,
        }
    }

    fn is_steep(source: Vector2<i32>, end: Vector2<i32>) -> bool {
        let span_y = (i64::from(source.y) - i64::from(end.y)).abs();
        let span_x = (i64::from(end.x) - i64::from(source.x)).abs();
        span_y > span_x
    }
}

impl Iterator for Line {
    type Item = Vector2<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let out = if self.steep {
            Vector2::new(self.y, self.x)
        } else {
            Vector2::new(self.x, self.y)
        };

        if self.x == self.end_x {
            self.exhausted = true;
        } else {
            self.err -= self.diff_y;
            if self.err < 0 {
                self.y += self.y_step;
                self.err += self.diff_x;
            }
            self.x += 1;
        }

        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }

        // A span of 2^32 points does not fit into a 32-bit `usize`
        match usize::try_from(i64::from(self.end_x) - i64::from(self.x) + 1) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Only on 64-bit targets, where every span fits into a `usize`.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Line {}

impl FusedIterator for Line {}

/// Rasterizes the line segment from `source` to `end`.
///
/// This is the compatible rasterization: the dominant axis is detected and the endpoints are transposed and ordered, but the walk
/// itself is driven by the untransposed endpoints. Consequently:
///
/// * Horizontal-ish segments (`|dy| <= |dx|`) with `source.x <= end.x` produce the exact Bresenham line from `source` to `end`.
/// * Segments with `source.x > end.x` produce no points at all.
/// * Steep segments produce `end.x - source.x + 1` points, which do not reach `end`.
///
/// Every point is 8-connected to its predecessor. Use [`line_exact`] to always cover both endpoints.
///
/// # Parameters
/// * `source`: The start point.
/// * `end`: The end point.
///
/// # Example
///
/// ```
/// use grid_geom::{line, Vector2};
///
/// let points: Vec<_> = line(Vector2::new(0, 0), Vector2::new(4, 2)).collect();
/// assert_eq!(points, vec![
///     Vector2::new(0, 0),
///     Vector2::new(1, 0),
///     Vector2::new(2, 1),
///     Vector2::new(3, 1),
///     Vector2::new(4, 2),
/// ]);
/// ```
pub fn line(source: Vector2<i32>, end: Vector2<i32>) -> Line {
    // Only the dominant axis is taken from the walking space; the walk itself keeps the original orientation.
    // `walking_space` orders by the transposed X-values, not by `source.x > end.x`. That difference is unobservable here, since
    // the ordered endpoints are discarded, and `line_exact` needs the transposed comparison.
    let (_, _, steep) = walking_space(source, end);
    Line::walk((source.x, source.y), (end.x, end.y), steep)
}

/// Rasterizes the line segment from `source` to `end`, covering both endpoints.
///
/// The walk follows the dominant axis in ascending order. For a segment whose dominant axis runs "backwards" (from higher to lower
/// coordinates) the points are therefore produced from `end` to `source`. The result always contains
/// `max(|dx|, |dy|) + 1` points and every point is 8-connected to its predecessor.
///
/// # Parameters
/// * `source`: The start point.
/// * `end`: The end point.
pub fn line_exact(source: Vector2<i32>, end: Vector2<i32>) -> Line {
    let (source, end, steep) = walking_space(source, end);
    Line::walk(source, end, steep)
}

/// Transposes and orders the endpoints such that the segment can be walked along the X-axis in ascending order.
///
/// # Return
/// The start and end points in walking space and whether the segment is steep (i.e. the walking space is transposed).
fn walking_space(source: Vector2<i32>, end: Vector2<i32>) -> ((i32, i32), (i32, i32), bool) {
    let steep = Line::is_steep(source, end);

    let (mut source_x, mut source_y) = (source.x, source.y);
    let (mut end_x, mut end_y) = (end.x, end.y);
    if steep {
        swap(&mut source_x, &mut source_y);
        swap(&mut end_x, &mut end_y);
    }
    if source_x > end_x {
        swap(&mut source_x, &mut end_x);
        swap(&mut source_y, &mut end_y);
    }

    ((source_x, source_y), (end_x, end_y), steep)
}

impl Vector2<i32> {
    /// Rasterizes the line segment from this point to `end`. See [`line`].
    #[inline(always)]
    pub fn line_to(self, end: Self) -> Line {
        line(self, end)
    }

    /// Rasterizes the line segment from this point to `end`, covering both endpoints. See [`line_exact`].
    #[inline(always)]
    pub fn line_exact_to(self, end: Self) -> Line {
        line_exact(self, end)
    }
}
