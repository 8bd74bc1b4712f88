use crate::im::{BinIm, ROI};
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MorphKind {
    Erode,
    Dilate,
}

// -----------------------------------------------------------------------------
// Square structuring element expressed as flat offsets into the source array
// -----------------------------------------------------------------------------
#[derive(Clone, Debug)]
struct WinMorphOp {
    offsets: Vec<isize>,
}

impl WinMorphOp {
    fn new(kernel_size: usize, im_pitch: usize) -> Self {
        let r_pix = kernel_size / 2;
        let r = r_pix as isize;
        let pitch = im_pitch as isize;

        let side = 2 * r_pix + 1;
        let mut offsets = Vec::with_capacity(side * side);
        for y in -r..=r {
            for x in -r..=r {
                offsets.push(y * pitch + x);
            }
        }

        Self { offsets }
    }
}

// -----------------------------------------------------------------------------
// Window core. Only the ROI inset by the kernel radius is evaluated, so every
// neighbor sample stays in-bounds and the border band of the result stays 0.
// -----------------------------------------------------------------------------
fn im_morph_win(src: &BinIm, kernel_size: i32, kind: MorphKind) -> BinIm {
    if !src.is_well_formed() || kernel_size <= 0 {
        return BinIm::empty();
    }

    let mut dst = BinIm::new(src.w, src.h);

    // An empty ROI means the footprint never fits, so skip building the window.
    let roi = ROI::inset(src.w, src.h, kernel_size as usize / 2);
    if roi.is_empty() {
        return dst;
    }
    let op = WinMorphOp::new(kernel_size as usize, src.s);

    let src_arr: &[i32] = &src.arr;
    let src_s = src.s;
    let dst_s = dst.s;

    // Rows only read `src`, so they can be filled independently.
    dst.arr
        .par_chunks_mut(dst_s)
        .enumerate()
        .filter(|(y, _)| *y >= roi.t && *y < roi.b)
        .for_each(|(y, dst_row)| {
            for x in roi.l..roi.r {
                let curr = (y * src_s + x) as isize;
                let is_set = |off: &isize| src_arr[(curr + *off) as usize] != 0;
                let hit = match kind {
                    MorphKind::Erode => op.offsets.iter().all(is_set),
                    MorphKind::Dilate => op.offsets.iter().any(is_set),
                };
                dst_row[x] = if hit { 1 } else { 0 };
            }
        });

    dst
}

/// Shrinks the foreground by a `kernel_size` square.
///
/// A pixel stays set only if its whole footprint is set. Pixels closer than
/// `kernel_size / 2` to an edge are always 0. A malformed raster or a
/// non-positive kernel gives `BinIm::empty()`.
pub fn erode(src: &BinIm, kernel_size: i32) -> BinIm {
    im_morph_win(src, kernel_size, MorphKind::Erode)
}

/// Grows the foreground by a `kernel_size` square.
///
/// Same border and invalid-input rules as [`erode`].
pub fn dilate(src: &BinIm, kernel_size: i32) -> BinIm {
    im_morph_win(src, kernel_size, MorphKind::Dilate)
}

/// Erode then dilate. Removes specks smaller than the kernel.
pub fn open(src: &BinIm, kernel_size: i32) -> BinIm {
    dilate(&erode(src, kernel_size), kernel_size)
}

/// Dilate then erode. Closes gaps smaller than the kernel.
pub fn close(src: &BinIm, kernel_size: i32) -> BinIm {
    erode(&dilate(src, kernel_size), kernel_size)
}
