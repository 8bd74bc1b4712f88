use super::core::{BinIm, Im};
use image::ImageResult;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

/// Copies the visible `w * h` pixels out of a possibly strided 1-channel image.
fn packed_pixels<T: Copy>(im: &Im<T, 1>) -> Vec<T> {
    let mut out = Vec::with_capacity(im.w * im.h);
    for y in 0..im.h {
        out.extend_from_slice(&im.arr[y * im.s..y * im.s + im.w]);
    }
    out
}

// PNG I/O
// -----------------------------------------------------------------------------
impl Im<u8, 1> {
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        if !self.is_well_formed() {
            return Err(dim_mismatch_err());
        }
        let img = image::GrayImage::from_raw(self.w as u32, self.h as u32, packed_pixels(self))
            .ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)
    }

    pub fn load_png<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = image::open(path)?.into_luma8();
        let w = img.width() as usize;
        let h = img.height() as usize;
        let arr = img.into_raw();

        if arr.len() != w * h {
            return Err(dim_mismatch_err());
        }
        Ok(Self { w, h, s: w, arr })
    }
}

impl Im<i32, 1> {
    /// Saves the raster as an 8-bit mask (foreground -> 255).
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.to_mask_im().save_png(path)
    }

    /// Loads any image as luma8 and thresholds it at mid-gray.
    pub fn load_png<P: AsRef<Path>>(path: P) -> ImageResult<BinIm> {
        let mask_im = Im::<u8, 1>::load_png(path)?;
        let mut bin_im = BinIm::new(mask_im.w, mask_im.h);
        for (dst, &src) in bin_im.arr.iter_mut().zip(mask_im.arr.iter()) {
            *dst = if src > 127 { 1 } else { 0 };
        }
        Ok(bin_im)
    }
}

// Tests
// -----------------------------------------------------------------------------
