use super::intersect_2d::orient_2d;
use super::IntPoint;

/// Twice the signed area of a closed polygon (shoelace formula), exactly.
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area2(points: &[IntPoint]) -> i128 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut sum = 0i128;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y);
    }
    sum
}

/// Signed area of a closed polygon.
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn signed_area(points: &[IntPoint]) -> f64 {
    signed_area2(points) as f64 * 0.5
}

/// Rotates a closed polygon so it starts at its lowest-leftmost vertex
/// (smallest x, ties broken by smallest y).
#[must_use]
pub fn rotate_to_canonical_start(points: &[IntPoint]) -> Vec<IntPoint> {
    let Some(best) = points
        .iter()
        .enumerate()
        .min_by_key(|(_, pt)| **pt)
        .map(|(i, _)| i)
    else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Winding number of a closed polygon around `point`.
///
/// Counts signed crossings of the horizontal ray to the right of `point`.
/// The result is meaningless for points lying on the boundary; check those
/// separately with [`super::intersect_2d::on_segment`].
#[must_use]
pub fn winding_number(point: IntPoint, points: &[IntPoint]) -> i32 {
    let n = points.len();
    let mut winding = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if a.y <= point.y {
            if b.y > point.y && orient_2d(a, b, point) > 0 {
                winding += 1;
            }
        } else if b.y <= point.y && orient_2d(a, b, point) < 0 {
            winding -= 1;
        }
    }
    winding
}

/// Removes consecutive duplicate vertices, including a last vertex equal to the first.
#[must_use]
pub fn dedup_closed(points: &[IntPoint]) -> Vec<IntPoint> {
    let mut out: Vec<IntPoint> = Vec::with_capacity(points.len());
    for &pt in points {
        if out.last() != Some(&pt) {
            out.push(pt);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Returns `true` if all points lie on one line (or there are fewer than 3 distinct points).
#[must_use]
pub fn is_collinear(points: &[IntPoint]) -> bool {
    let Some(&first) = points.first() else {
        return true;
    };
    let Some(&second) = points.iter().find(|&&pt| pt != first) else {
        return true;
    };
    points.iter().all(|&pt| orient_2d(first, second, pt) == 0)
}

/// Removes vertices where the boundary continues straight on, wrapping around
/// the closing edge.
#[must_use]
pub fn strip_collinear(points: &[IntPoint]) -> Vec<IntPoint> {
    let mut out: Vec<IntPoint> = Vec::with_capacity(points.len());
    for &pt in points {
        while out.len() >= 2 && orient_2d(out[out.len() - 2], out[out.len() - 1], pt) == 0 {
            out.pop();
        }
        out.push(pt);
    }

    loop {
        let n = out.len();
        if n < 3 {
            break;
        }
        if orient_2d(out[n - 2], out[n - 1], out[0]) == 0 {
            out.pop();
        } else if orient_2d(out[n - 1], out[0], out[1]) == 0 {
            out.remove(0);
        } else {
            break;
        }
    }
    out
}
