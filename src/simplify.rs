//! Polyline simplification using the Ramer-Douglas-Peucker algorithm.

use crate::geom::V3d;

/// 3D distance from `p` to the closed segment `a`-`b`.
/// A zero-length segment measures the distance to `a`.
fn distance_to_segment(p: V3d, a: V3d, b: V3d) -> f64 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return (p - a).length();
    }

    let u = (p - a).dot(ab) / len2;
    let proj = if u <= 0.0 {
        a
    } else if u >= 1.0 {
        b
    } else {
        a + ab * u
    };
    (p - proj).length()
}

/// Simplifies `vertices` in place.
///
/// The interior vertex farthest from the segment between the first and last vertex is kept
/// when it is more than `epsilon` away, and both halves are simplified recursively.
/// Otherwise only the end points survive. The end points are always kept. Fewer than 3
/// vertices is a no-op.
///
/// `epsilon` is in coordinate units; a negative value keeps every vertex.
pub fn simplify_polygon(vertices: &mut Vec<V3d>, epsilon: f64) {
    let n = vertices.len();
    if n < 3 {
        return;
    }

    let front = vertices[0];
    let back = vertices[n - 1];

    let mut split_i = 1;
    let mut split_dist = distance_to_segment(vertices[1], front, back);
    for (i, &v) in vertices.iter().enumerate().take(n - 1).skip(2) {
        let dist = distance_to_segment(v, front, back);
        if dist > split_dist {
            split_i = i;
            split_dist = dist;
        }
    }

    if split_dist > epsilon {
        let mut head = vertices[..=split_i].to_vec();
        let mut tail = vertices[split_i..].to_vec();

        simplify_polygon(&mut head, epsilon);
        simplify_polygon(&mut tail, epsilon);

        // The split vertex ends `head` and starts `tail`.
        head.pop();
        head.extend(tail);
        *vertices = head;
    } else {
        *vertices = vec![front, back];
    }
}

/// Non-mutating form of [`simplify_polygon`].
pub fn simplified(vertices: &[V3d], epsilon: f64) -> Vec<V3d> {
    let mut out = vertices.to_vec();
    simplify_polygon(&mut out, epsilon);
    out
}
