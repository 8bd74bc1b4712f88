use crate::geom::Iv2;
use crate::im::BinIm;
use proptest::prelude::*;

/// Parses `#` as 1 and `.` as 0. Blank lines and indentation are ignored.
pub fn bin_im_from_ascii(grid: &str) -> BinIm {
    let rows: Vec<&str> = grid
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let h = rows.len();
    assert!(h > 0, "grid must have at least one non-empty row");
    let w = rows[0].len();
    for r in &rows {
        assert_eq!(r.len(), w, "all rows must have equal length");
    }

    let mut im = BinIm::new(w, h);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            im.arr[y * im.s + x] = match ch {
                '#' => 1,
                '.' => 0,
                _ => panic!("invalid pixel char '{ch}', expected '#' or '.'"),
            };
        }
    }
    im
}

/// `(row, col)` pairs to raster points.
pub fn rc(pairs: &[(i32, i32)]) -> Vec<Iv2> {
    pairs.iter().map(|&(r, c)| Iv2::from_row_col(r, c)).collect()
}

/// Random 0/1 rasters from 1x1 up to `max_w` x `max_h`.
pub fn bin_im_strategy(max_w: usize, max_h: usize) -> impl Strategy<Value = BinIm> {
    (1..=max_w, 1..=max_h).prop_flat_map(|(w, h)| {
        proptest::collection::vec(0i32..2, w * h).prop_map(move |arr| BinIm { w, h, s: w, arr })
    })
}
