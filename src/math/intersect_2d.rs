use std::cmp::Ordering;

use super::IntPoint;

/// Exact orientation of `c` relative to the directed line `a -> b`.
///
/// Positive when `c` is to the left (counter-clockwise turn), negative when
/// to the right, zero when collinear.
#[must_use]
pub fn orient_2d(a: IntPoint, b: IntPoint, c: IntPoint) -> i128 {
    cross(
        i128::from(b.x - a.x),
        i128::from(b.y - a.y),
        i128::from(c.x - a.x),
        i128::from(c.y - a.y),
    )
}

/// 2D cross product of `(ux, uy)` and `(vx, vy)`.
#[must_use]
pub fn cross(ux: i128, uy: i128, vx: i128, vy: i128) -> i128 {
    ux * vy - uy * vx
}

/// Returns `true` if `p` lies on the closed segment `a -> b`.
#[must_use]
pub fn on_segment(p: IntPoint, a: IntPoint, b: IntPoint) -> bool {
    orient_2d(a, b, p) == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Returns `true` if `p` lies on the segment `a -> b` but is neither endpoint.
#[must_use]
pub fn in_segment_interior(p: IntPoint, a: IntPoint, b: IntPoint) -> bool {
    p != a && p != b && on_segment(p, a, b)
}

/// Proper crossing of segments `a -> b` and `c -> d`, rounded to the integer grid.
///
/// Only crossings where each segment passes strictly through the other are
/// reported. Touching at an endpoint, T-junctions and collinear overlaps return
/// `None`: their interesting points are already segment endpoints.
///
/// Coordinates must be within [`super::MAX_COORD`]; the rounded point then
/// lies inside the bounding box of both segments.
#[must_use]
pub fn segment_crossing(a: IntPoint, b: IntPoint, c: IntPoint, d: IntPoint) -> Option<IntPoint> {
    let o1 = orient_2d(a, b, c).signum();
    let o2 = orient_2d(a, b, d).signum();
    let o3 = orient_2d(c, d, a).signum();
    let o4 = orient_2d(c, d, b).signum();
    if o1 * o2 >= 0 || o3 * o4 >= 0 {
        return None;
    }

    let (d1x, d1y) = (i128::from(b.x - a.x), i128::from(b.y - a.y));
    let (d2x, d2y) = (i128::from(d.x - c.x), i128::from(d.y - c.y));
    let den = cross(d1x, d1y, d2x, d2y);
    let num = cross(
        i128::from(c.x - a.x),
        i128::from(c.y - a.y),
        d2x,
        d2y,
    );
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };

    let x = round_div(i128::from(a.x) * den + d1x * num, den);
    let y = round_div(i128::from(a.y) * den + d1y * num, den);
    Some(IntPoint::new(i64::try_from(x).ok()?, i64::try_from(y).ok()?))
}

/// Returns `true` if the closed segment `a -> b` meets the unit pixel centred
/// on `center`.
///
/// Pixels are half-open, `[x - 1/2, x + 1/2) x [y - 1/2, y + 1/2)`, so every
/// point of the plane lies in exactly one pixel: the one that rounding half
/// up maps it onto. A segment passing through a shared pixel corner touches
/// only the pixel owning that corner.
#[must_use]
pub fn segment_touches_pixel(a: IntPoint, b: IntPoint, center: IntPoint) -> bool {
    // Doubled coordinates keep the half-unit pixel bounds integral.
    let doubled = |v: i64| 2 * i128::from(v);
    let mut range = ParamRange::UNIT;
    range.clip_axis(doubled(a.x), doubled(b.x - a.x), doubled(center.x))
        && range.clip_axis(doubled(a.y), doubled(b.y - a.y), doubled(center.y))
        && !range.is_empty()
}

/// A bound `num / den` on the segment parameter `t`, with `den > 0`.
#[derive(Debug, Clone, Copy)]
struct ParamBound {
    num: i128,
    den: i128,
    strict: bool,
}

impl ParamBound {
    fn cmp_value(self, other: Self) -> Ordering {
        (self.num * other.den).cmp(&(other.num * self.den))
    }
}

/// The set of `t` in `[0, 1]` still inside the pixel.
#[derive(Debug, Clone, Copy)]
struct ParamRange {
    lower: ParamBound,
    upper: ParamBound,
}

impl ParamRange {
    const UNIT: Self = Self {
        lower: ParamBound {
            num: 0,
            den: 1,
            strict: false,
        },
        upper: ParamBound {
            num: 1,
            den: 1,
            strict: false,
        },
    };

    /// Restricts the range to `center - 1 <= from + t * delta < center + 1`.
    /// Returns `false` when an axis-parallel segment misses the slab.
    fn clip_axis(&mut self, from: i128, delta: i128, center: i128) -> bool {
        let (low, high) = (center - 1, center + 1);
        match delta.cmp(&0) {
            Ordering::Equal => (low..high).contains(&from),
            Ordering::Greater => {
                self.raise(ParamBound {
                    num: low - from,
                    den: delta,
                    strict: false,
                });
                self.lower_to(ParamBound {
                    num: high - from,
                    den: delta,
                    strict: true,
                });
                true
            }
            Ordering::Less => {
                self.lower_to(ParamBound {
                    num: from - low,
                    den: -delta,
                    strict: false,
                });
                self.raise(ParamBound {
                    num: from - high,
                    den: -delta,
                    strict: true,
                });
                true
            }
        }
    }

    fn raise(&mut self, bound: ParamBound) {
        match bound.cmp_value(self.lower) {
            Ordering::Greater => self.lower = bound,
            Ordering::Equal => self.lower.strict |= bound.strict,
            Ordering::Less => {}
        }
    }

    fn lower_to(&mut self, bound: ParamBound) {
        match bound.cmp_value(self.upper) {
            Ordering::Less => self.upper = bound,
            Ordering::Equal => self.upper.strict |= bound.strict,
            Ordering::Greater => {}
        }
    }

    fn is_empty(&self) -> bool {
        match self.lower.cmp_value(self.upper) {
            Ordering::Greater => true,
            Ordering::Equal => self.lower.strict || self.upper.strict,
            Ordering::Less => false,
        }
    }
}

/// Exact scalar projection of `p - a` onto `b - a` (unnormalized).
#[must_use]
pub fn projection(p: IntPoint, a: IntPoint, b: IntPoint) -> i128 {
    i128::from(p.x - a.x) * i128::from(b.x - a.x) + i128::from(p.y - a.y) * i128::from(b.y - a.y)
}

/// Divides `n` by a positive `d`, rounding half up.
fn round_div(n: i128, d: i128) -> i128 {
    (2 * n + d).div_euclid(2 * d)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> IntPoint {
        IntPoint::new(x, y)
    }

    #[test]
    fn orientation_signs() {
        assert!(orient_2d(p(0, 0), p(4, 0), p(2, 3)) > 0);
        assert!(orient_2d(p(0, 0), p(4, 0), p(2, -3)) < 0);
        assert_eq!(orient_2d(p(0, 0), p(4, 0), p(9, 0)), 0);
    }

    #[test]
    fn on_segment_includes_endpoints() {
        assert!(on_segment(p(0, 0), p(0, 0), p(4, 4)));
        assert!(on_segment(p(2, 2), p(0, 0), p(4, 4)));
        assert!(!on_segment(p(5, 5), p(0, 0), p(4, 4)));
        assert!(!on_segment(p(2, 3), p(0, 0), p(4, 4)));
    }

    #[test]
    fn interior_excludes_endpoints() {
        assert!(!in_segment_interior(p(4, 4), p(0, 0), p(4, 4)));
        assert!(in_segment_interior(p(1, 1), p(0, 0), p(4, 4)));
    }

    #[test]
    fn crossing_exact_integer() {
        let hit = segment_crossing(p(4, 0), p(4, 4), p(2, 2), p(6, 2));
        assert_eq!(hit, Some(p(4, 2)));
    }

    #[test]
    fn crossing_rounds_to_nearest() {
        // Diagonals of a 3x3 box cross at (1.5, 1.5), rounded half up.
        let hit = segment_crossing(p(0, 0), p(3, 3), p(0, 3), p(3, 0));
        assert_eq!(hit, Some(p(2, 2)));

        // (0,0)-(5,1) and (0,1)-(5,0) cross at (2.5, 0.5).
        let hit = segment_crossing(p(0, 0), p(5, 1), p(0, 1), p(5, 0));
        assert_eq!(hit, Some(p(3, 1)));
    }

    #[test]
    fn crossing_rounds_negative_coordinates_half_up() {
        // Crossing at (-1.5, -1.5) rounds to (-1, -1).
        let hit = segment_crossing(p(-3, -3), p(0, 0), p(-3, 0), p(0, -3));
        assert_eq!(hit, Some(p(-1, -1)));
    }

    #[test]
    fn touching_and_collinear_are_not_crossings() {
        // Shared endpoint.
        assert_eq!(segment_crossing(p(0, 0), p(4, 0), p(4, 0), p(4, 4)), None);
        // T-junction.
        assert_eq!(segment_crossing(p(0, 0), p(4, 0), p(2, 0), p(2, 4)), None);
        // Collinear overlap.
        assert_eq!(segment_crossing(p(0, 0), p(4, 0), p(2, 0), p(6, 0)), None);
        // Disjoint.
        assert_eq!(segment_crossing(p(0, 0), p(1, 1), p(3, 0), p(4, 1)), None);
    }

    #[test]
    fn crossing_at_coordinate_limit() {
        let m = super::super::MAX_COORD;
        let hit = segment_crossing(p(-m, -m), p(m, m), p(-m, m), p(m, -m));
        assert_eq!(hit, Some(p(0, 0)));
    }

    #[test]
    fn pixel_touch_through_center() {
        assert!(segment_touches_pixel(p(0, 0), p(4, 4), p(2, 2)));
    }

    #[test]
    fn pixel_touch_near_miss() {
        // The segment reaches y = 0.5 at x = 50, so it crosses from the pixel
        // of (50, 0) into the pixel of (50, 1).
        assert!(segment_touches_pixel(p(0, 0), p(100, 1), p(50, 0)));
        assert!(segment_touches_pixel(p(0, 0), p(100, 1), p(50, 1)));
        // (50, 2) is well clear of the segment.
        assert!(!segment_touches_pixel(p(0, 0), p(100, 1), p(50, 2)));
    }

    #[test]
    fn pixel_corner_belongs_to_one_pixel() {
        // (0.5, 0.5) is the lower-left corner of the pixel of (1, 1) and lies
        // outside the other three pixels meeting there.
        assert!(segment_touches_pixel(p(0, 1), p(1, 0), p(1, 1)));
        assert!(!segment_touches_pixel(p(0, 1), p(1, 0), p(0, 0)));
        assert!(!segment_touches_pixel(p(0, 0), p(1, 1), p(1, 0)));
        assert!(!segment_touches_pixel(p(0, 0), p(1, 1), p(0, 1)));
        // A crossing rounded half up lands in the pixel both segments touch.
        let hit = segment_crossing(p(0, 0), p(1, 1), p(0, 1), p(1, 0)).unwrap();
        assert_eq!(hit, p(1, 1));
    }

    #[test]
    fn pixel_touch_respects_segment_extent() {
        assert!(!segment_touches_pixel(p(0, 0), p(4, 0), p(6, 0)));
        assert!(segment_touches_pixel(p(0, 0), p(4, 0), p(4, 0)));
    }

    #[test]
    fn projection_orders_along_segment() {
        let a = p(0, 0);
        let b = p(10, 0);
        assert!(projection(p(2, 0), a, b) < projection(p(7, 0), a, b));
        assert_eq!(projection(a, a, b), 0);
    }
}
