use super::core::BinIm;
use crate::geom::Iv2;

/// Renders a raster as `#` (foreground) and `.` (background), one line per row.
pub fn bin_im_to_ascii(im: &BinIm) -> String {
    let mut out = String::new();
    if !im.is_well_formed() {
        return out;
    }
    for y in 0..im.h {
        for x in 0..im.w {
            out.push(if im.arr[y * im.s + x] != 0 { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Like `bin_im_to_ascii` but marks traced contour pixels with `*`.
pub fn bin_im_with_contour_to_ascii(im: &BinIm, contour: &[Iv2]) -> String {
    let mut out = String::new();
    if !im.is_well_formed() {
        return out;
    }
    let mut on_contour = vec![false; im.w * im.h];
    for p in contour {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < im.w && (p.y as usize) < im.h {
            on_contour[p.y as usize * im.w + p.x as usize] = true;
        }
    }
    for y in 0..im.h {
        for x in 0..im.w {
            let ch = if on_contour[y * im.w + x] {
                '*'
            } else if im.arr[y * im.s + x] != 0 {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

pub fn debug_print_bin_im(label: &str, im: &BinIm) {
    println!("{label} ({}x{}, {} set):", im.w, im.h, im.count_foreground());
    print!("{}", bin_im_to_ascii(im));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_top_to_bottom() {
        let im = BinIm::from_rows(&[vec![1, 0], vec![0, 1]]);
        assert_eq!(bin_im_to_ascii(&im), "#.\n.#\n");
    }

    #[test]
    fn contour_pixels_override_foreground() {
        let im = BinIm::from_rows(&[vec![1, 1, 0]]);
        let contour = [Iv2 { x: 0, y: 0 }, Iv2 { x: 9, y: 9 }];
        assert_eq!(bin_im_with_contour_to_ascii(&im, &contour), "*#.\n");
    }

    #[test]
    fn malformed_renders_nothing() {
        assert_eq!(bin_im_to_ascii(&BinIm::empty()), "");
    }
}
