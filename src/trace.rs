use crate::geom::Iv2;
use crate::im::BinIm;

// 8-neighborhood LUT, clockwise with rows growing downward. (dy, dx)
const DIR_TO_DELT_CW: [(i32, i32); 8] = [
    ( 0,  1), // 0 E
    ( 1,  1), // 1 SE
    ( 1,  0), // 2 S
    ( 1, -1), // 3 SW
    ( 0, -1), // 4 W
    (-1, -1), // 5 NW
    (-1,  0), // 6 N
    (-1,  1), // 7 NE
];

// After a step in direction d the next search starts at d + 6, i.e. backed up a quarter turn
// so concave corners are not skipped.
const BACKTRACK: usize = 6;

/// Foreground with at least one 8-neighbor that is background or outside the raster.
fn is_boundary_pixel(im: &BinIm, x: i32, y: i32) -> bool {
    if im.get_or_zero(x as isize, y as isize) == 0 {
        return false;
    }
    DIR_TO_DELT_CW
        .iter()
        .any(|&(dy, dx)| im.get_or_zero((x + dx) as isize, (y + dy) as isize) == 0)
}

/// Traces the outer contour of the foreground with Moore-neighbor following.
///
/// Starts at the first boundary pixel in row-major order and walks clockwise until it
/// gets back to the start. The start pixel is reported once, first; closing the polygon
/// is left to the caller. When the walk dead-ends (e.g. a lone pixel) the partial path
/// is returned.
///
/// A malformed raster or one without foreground gives an empty path.
pub fn boundary(im: &BinIm) -> Vec<Iv2> {
    let mut contour = Vec::new();
    if !im.is_well_formed() {
        return contour;
    }

    let mut start = None;
    let mut n_boundary = 0usize;
    for y in 0..im.h as i32 {
        for x in 0..im.w as i32 {
            if is_boundary_pixel(im, x, y) {
                n_boundary += 1;
                if start.is_none() {
                    start = Some(Iv2 { x, y });
                }
            }
        }
    }
    let Some(start) = start else {
        return contour;
    };

    contour.push(start);

    // Every (pixel, dir) state can occur at most once on a walk that returns to the start.
    let max_steps = 8 * n_boundary;

    let mut curr = start;
    let mut dir = 0usize;
    for _ in 0..max_steps {
        let next = (0..8).map(|i| (dir + i) % 8).find_map(|d| {
            let (dy, dx) = DIR_TO_DELT_CW[d];
            let (nx, ny) = (curr.x + dx, curr.y + dy);
            is_boundary_pixel(im, nx, ny).then_some((d, Iv2 { x: nx, y: ny }))
        });

        let Some((d, p)) = next else {
            // Dead end: nothing to walk to.
            break;
        };
        if p == start {
            break;
        }

        contour.push(p);
        curr = p;
        dir = (d + BACKTRACK) % 8;
    }

    contour
}
