use crate::geom::{Iv2, PlanarPoint};
use crate::im::BinIm;

/// True when `p` lies on the closed segment `a`-`b` (exactly collinear, inside its bbox).
fn is_on_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> bool {
    let cross = (p.0 - a.0) * (b.1 - a.1) - (p.1 - a.1) * (b.0 - a.0);
    cross == 0.0
        && p.0 >= a.0.min(b.0)
        && p.0 <= a.0.max(b.0)
        && p.1 >= a.1.min(b.1)
        && p.1 <= a.1.max(b.1)
}

/// Ray-casting point-in-polygon test. The polygon is implicitly closed.
///
/// Points on an edge or vertex count as inside, which keeps edge pixels included when the
/// polygon is a traced raster contour.
pub fn is_inside_polygon<P: PlanarPoint>(point: P, polygon: &[P]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }

    let p = point.xy();

    let mut j = n - 1;
    for i in 0..n {
        if is_on_segment(p, polygon[j].xy(), polygon[i].xy()) {
            return true;
        }
        j = i;
    }

    let (x, y) = p;
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = polygon[i].xy();
        let (xj, yj) = polygon[j].xy();

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Unsigned polygon area (shoelace). Fewer than 3 points gives 0.
pub fn area<P: PlanarPoint>(polygon: &[P]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }

    let mut twice_area = 0.0;
    for i in 0..n {
        let (x0, y0) = polygon[i].xy();
        let (x1, y1) = polygon[(i + 1) % n].xy();
        twice_area += x0 * y1 - x1 * y0;
    }
    twice_area.abs() * 0.5
}

/// Copy of `im` with every pixel inside `polygon` (raster coords, on-edge included) set to `value`.
///
/// Brute force, every pixel against every edge. A malformed raster gives `BinIm::empty()`.
pub fn assign_value_inside_polygon(im: &BinIm, polygon: &[Iv2], value: i32) -> BinIm {
    if !im.is_well_formed() {
        return BinIm::empty();
    }

    let mut out = BinIm::new(im.w, im.h);
    for y in 0..im.h {
        for x in 0..im.w {
            let p = Iv2 { x: x as i32, y: y as i32 };
            out.arr[y * out.s + x] = if is_inside_polygon(p, polygon) {
                value
            } else {
                im.arr[y * im.s + x]
            };
        }
    }
    out
}
