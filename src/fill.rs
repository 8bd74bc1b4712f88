use crate::im::BinIm;

/// Marks every background pixel 4-connected to (`start_x`, `start_y`) in `exterior`.
/// Explicit stack, so large rasters can't overflow the call stack.
fn flood_exterior(
    im: &BinIm,
    exterior: &mut [bool],
    start_x: usize,
    start_y: usize,
    stack: &mut Vec<(usize, usize)>,
) {
    let w = im.w;
    let h = im.h;

    stack.clear();
    stack.push((start_x, start_y));

    while let Some((x, y)) = stack.pop() {
        let i = y * w + x;
        if exterior[i] || im.arr[y * im.s + x] != 0 {
            // Already marked, or foreground.
            continue;
        }
        exterior[i] = true;

        if y + 1 < h {
            stack.push((x, y + 1));
        }
        if x + 1 < w {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if x > 0 {
            stack.push((x - 1, y));
        }
    }
}

/// Fills enclosed holes: background pixels not reachable from the raster
/// border (4-connected) become foreground. Foreground is never changed,
/// whatever its value.
///
/// A malformed raster gives `BinIm::empty()`.
pub fn fill_interior(src: &BinIm) -> BinIm {
    if !src.is_well_formed() {
        return BinIm::empty();
    }

    let w = src.w;
    let h = src.h;

    let mut exterior = vec![false; w * h];
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(w * h / 10 + 1024);
    for x in 0..w {
        for y in [0, h - 1] {
            flood_exterior(src, &mut exterior, x, y, &mut stack);
        }
    }
    for y in 0..h {
        for x in [0, w - 1] {
            flood_exterior(src, &mut exterior, x, y, &mut stack);
        }
    }

    let mut im = BinIm::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = src.arr[y * src.s + x];
            im.arr[y * w + x] = if v == 0 && !exterior[y * w + x] { 1 } else { v };
        }
    }

    im
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Iv2;
    use crate::poly::assign_value_inside_polygon;
    use crate::test_helpers::{bin_im_from_ascii, bin_im_strategy};
    use proptest::prelude::*;

    #[test]
    fn fills_single_hole() {
        let im = BinIm::from_rows(&[vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]);
        let out = fill_interior(&im);
        assert_eq!(out.to_rows(), vec![vec![1, 1, 1]; 3]);
    }

    #[test]
    fn exterior_background_is_kept() {
        let im = bin_im_from_ascii(
            r#"
                .......
                .#####.
                .#...#.
                .#.#.#.
                .#...#.
                .#####.
                .......
            "#,
        );
        let expected = bin_im_from_ascii(
            r#"
                .......
                .#####.
                .#####.
                .#####.
                .#####.
                .#####.
                .......
            "#,
        );
        assert_eq!(fill_interior(&im), expected);
    }

    #[test]
    fn diagonal_gap_still_encloses_hole() {
        // Only 4-connected leaks reach the hole, so a diagonal gap doesn't open it.
        let im = bin_im_from_ascii(
            r#"
                .###.
                #...#
                #...#
                .###.
            "#,
        );
        let expected = bin_im_from_ascii(
            r#"
                .###.
                #####
                #####
                .###.
            "#,
        );
        assert_eq!(fill_interior(&im), expected);
    }

    #[test]
    fn open_ring_is_not_filled() {
        let im = bin_im_from_ascii(
            r#"
                #####
                #...#
                #....
                #####
            "#,
        );
        assert_eq!(fill_interior(&im), im);
    }

    #[test]
    fn non_binary_foreground_values_survive() {
        let im = BinIm::from_rows(&[vec![2, 2, 2], vec![2, 0, 2], vec![2, 2, 2]]);
        let out = fill_interior(&im);
        assert_eq!(out.to_rows(), vec![vec![2, 2, 2], vec![2, 1, 2], vec![2, 2, 2]]);
    }

    #[test]
    fn negative_foreground_values_survive() {
        let ring = BinIm::from_rows(&[vec![-1, -1, -1], vec![-1, 0, -1], vec![-1, -1, -1]]);
        let out = fill_interior(&ring);
        assert_eq!(out.to_rows(), vec![vec![-1, -1, -1], vec![-1, 1, -1], vec![-1, -1, -1]]);

        // Same ring, built by clearing a polygon to -1.
        let im = BinIm::new(5, 5);
        let square = [Iv2::new(1, 1), Iv2::new(3, 1), Iv2::new(3, 3), Iv2::new(1, 3)];
        let mut marked = assign_value_inside_polygon(&im, &square, -1);
        marked.arr[2 * 5 + 2] = 0;
        let out = fill_interior(&marked);
        assert_eq!(out.arr[2 * 5 + 2], 1);
        assert_eq!(out.arr.iter().filter(|&&v| v == -1).count(), 8);
        assert_eq!(out.arr[0], 0);
    }

    #[test]
    fn malformed_gives_empty() {
        assert_eq!(fill_interior(&BinIm::empty()), BinIm::empty());
        assert_eq!(fill_interior(&BinIm::from_rows(&[vec![0], vec![]])), BinIm::empty());
    }

    #[test]
    fn large_exterior_flood_does_not_overflow() {
        let n = 600;
        let mut im = BinIm::new(n, n);
        let c = n / 2;
        for y in c - 1..=c + 1 {
            for x in c - 1..=c + 1 {
                im.arr[y * n + x] = 1;
            }
        }
        im.arr[c * n + c] = 0;

        let out = fill_interior(&im);
        assert_eq!(out.count_foreground(), 9);
        assert_eq!(out.arr[c * n + c], 1);
    }

    proptest! {
        #[test]
        fn fill_is_idempotent(im in bin_im_strategy(9, 9)) {
            let once = fill_interior(&im);
            prop_assert_eq!(fill_interior(&once), once.clone());
        }

        #[test]
        fn fill_only_adds_foreground(im in bin_im_strategy(9, 9)) {
            let out = fill_interior(&im);
            for (a, b) in im.arr.iter().zip(out.arr.iter()) {
                if *a != 0 {
                    prop_assert_eq!(a, b);
                }
            }
        }
    }
}
