#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Im<T, const N_CH: usize> {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride in elements (w * N_CH)
    pub arr: Vec<T>,
}

// Constructor
// -----------------------------------------------------------------------------
impl<T: Copy + Default, const N_CH: usize> Im<T, N_CH> {
    pub fn new(w: usize, h: usize) -> Self {
        let s = w * N_CH;
        let arr = vec![T::default(); s * h];
        Self { w, h, s, arr }
    }
}

impl<T, const N_CH: usize> Im<T, N_CH> {
    /// The "no data" image. Every raster op returns this on invalid input.
    pub fn empty() -> Self {
        Self {
            w: 0,
            h: 0,
            s: 0,
            arr: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Shared shape check used by every raster op before touching pixels.
    pub fn is_well_formed(&self) -> bool {
        self.w > 0 && self.h > 0 && self.s >= self.w * N_CH && self.arr.len() >= self.s * self.h
    }
}

// Binary rasters
// -----------------------------------------------------------------------------

impl Im<i32, 1> {
    /// Builds a raster from row vectors.
    ///
    /// Zero rows, zero-length rows or rows of unequal length give `Im::empty()`.
    pub fn from_rows(rows: &[Vec<i32>]) -> Self {
        let h = rows.len();
        let Some(first) = rows.first() else {
            return Self::empty();
        };
        let w = first.len();
        if w == 0 || rows.iter().any(|r| r.len() != w) {
            return Self::empty();
        }

        let mut arr = Vec::with_capacity(w * h);
        for row in rows {
            arr.extend_from_slice(row);
        }
        Self { w, h, s: w, arr }
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        if !self.is_well_formed() {
            return Vec::new();
        }
        (0..self.h)
            .map(|y| self.arr[y * self.s..y * self.s + self.w].to_vec())
            .collect()
    }

    /// Bounds-checked read. Out-of-range coordinates read as background.
    #[inline]
    pub fn get_or_zero(&self, x: isize, y: isize) -> i32 {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return 0;
        }
        self.arr[y as usize * self.s + x as usize]
    }

    pub fn count_foreground(&self) -> usize {
        if !self.is_well_formed() {
            return 0;
        }
        (0..self.h)
            .map(|y| {
                self.arr[y * self.s..y * self.s + self.w]
                    .iter()
                    .filter(|&&v| v != 0)
                    .count()
            })
            .sum()
    }

    /// Malformed input gives `Im::empty()`.
    pub fn to_mask_im(&self) -> Im<u8, 1> {
        if !self.is_well_formed() {
            return Im::empty();
        }
        let mut mask_im = Im::<u8, 1>::new(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                let v = self.arr[y * self.s + x];
                mask_im.arr[y * mask_im.s + x] = if v != 0 { 255 } else { 0 };
            }
        }
        mask_im
    }
}

impl Im<u8, 1> {
    /// Malformed input gives `Im::empty()`.
    pub fn to_bin_im(&self) -> Im<i32, 1> {
        if !self.is_well_formed() {
            return Im::empty();
        }
        let mut bin_im = Im::<i32, 1>::new(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                let v = self.arr[y * self.s + x];
                bin_im.arr[y * bin_im.s + x] = if v != 0 { 1 } else { 0 };
            }
        }
        bin_im
    }
}

pub type BinIm = Im<i32, 1>;
pub type MaskIm = Im<u8, 1>;
