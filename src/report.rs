use crate::geom::V3d;

/// Area-weighted normal of a (possibly non-planar) polygon. Its length is the polygon area.
///
/// Fewer than 3 points gives zero.
pub fn polygon_area_normal_3d(polygon: &[V3d]) -> V3d {
    let n = polygon.len();
    match n {
        0..=2 => V3d::ZERO,
        3 => (polygon[1] - polygon[0]).cross(polygon[2] - polygon[0]) * 0.5,
        // Cross product of the diagonals is twice the area.
        4 => (polygon[2] - polygon[0]).cross(polygon[3] - polygon[1]) * 0.5,
        _ => {
            // Fan of quads around polygon[0], closed by a final quad or triangle.
            let h = (n - 1) / 2;
            let k = if n % 2 == 1 { 0 } else { n - 1 };

            let mut area_normal = V3d::ZERO;
            for i in 1..h {
                area_normal = area_normal
                    + (polygon[2 * i] - polygon[0]).cross(polygon[2 * i + 1] - polygon[2 * i - 1]);
            }
            area_normal = area_normal
                + (polygon[2 * h] - polygon[0]).cross(polygon[k] - polygon[2 * h - 1]);

            area_normal * 0.5
        }
    }
}

fn segments(points: &[V3d], is_closed: bool) -> impl Iterator<Item = (V3d, V3d)> + '_ {
    let closing = if is_closed && points.len() > 2 {
        Some((points[points.len() - 1], points[0]))
    } else {
        None
    };
    points.windows(2).map(|w| (w[0], w[1])).chain(closing)
}

/// Summary of a point sequence as display text: 3D length, horizontal length and the
/// horizontal (z dropped) area.
pub fn geometry_data_as_text(points: &[V3d], is_closed: bool) -> String {
    let length: f64 = segments(points, is_closed).map(|(a, b)| (b - a).length()).sum();
    let horizontal_length: f64 = segments(points, is_closed)
        .map(|(a, b)| (b - a).horizontal().length())
        .sum();

    let horizontal: Vec<V3d> = points.iter().map(|p| p.horizontal()).collect();
    let horizontal_area = polygon_area_normal_3d(&horizontal).length();

    format!(
        "Length: {length:.2}\nHorizontal Length: {horizontal_length:.2}\nHorizontal Area: {horizontal_area:.2}"
    )
}
