use crate::fill::fill_interior;
use crate::geom::{Iv2, V3d};
use crate::im::BinIm;
use crate::morph::{dilate, erode};
use crate::simplify::simplify_polygon;
use crate::trace::boundary;
use serde::{Deserialize, Serialize};

/// Placement of a raster in world space. Rows grow along +y, columns along +x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterGrid {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_w: f64,
    pub cell_h: f64,
    pub z: f64,
}

impl Default for RasterGrid {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_w: 1.0,
            cell_h: 1.0,
            z: 0.0,
        }
    }
}

impl RasterGrid {
    /// World position of the centre of cell `p`.
    pub fn to_world(&self, p: Iv2) -> V3d {
        V3d::new(
            self.origin_x + (p.x as f64 + 0.5) * self.cell_w,
            self.origin_y + (p.y as f64 + 0.5) * self.cell_h,
            self.z,
        )
    }

    pub fn polygon_to_world(&self, polygon: &[Iv2]) -> Vec<V3d> {
        polygon.iter().map(|&p| self.to_world(p)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    pub fill_interior: bool,
    /// 0 skips erosion.
    pub erode_kernel: i32,
    /// 0 skips dilation.
    pub dilate_kernel: i32,
    /// Simplification threshold in world units.
    pub epsilon: f64,
    /// Repeat the first point at the end.
    pub close_polygon: bool,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            fill_interior: true,
            erode_kernel: 1,
            dilate_kernel: 1,
            epsilon: 0.0,
            close_polygon: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPolygon {
    /// Contour length straight out of the tracer, before simplification.
    pub raw_point_count: usize,
    pub points: Vec<V3d>,
}

impl ExtractedPolygon {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The cleaned raster that `extract_polygon` traces: optional hole fill, then erode, then dilate.
pub fn cleaned_raster(im: &BinIm, params: &ExtractParams) -> BinIm {
    let mut out = if params.fill_interior {
        fill_interior(im)
    } else if im.is_well_formed() {
        im.clone()
    } else {
        BinIm::empty()
    };
    if params.erode_kernel != 0 {
        out = erode(&out, params.erode_kernel);
    }
    if params.dilate_kernel != 0 {
        out = dilate(&out, params.dilate_kernel);
    }
    out
}

/// Raster to simplified world-space polygon.
///
/// A malformed raster or one that cleans away to nothing gives an empty polygon.
pub fn extract_polygon(im: &BinIm, grid: &RasterGrid, params: &ExtractParams) -> ExtractedPolygon {
    let cleaned = cleaned_raster(im, params);
    let contour = boundary(&cleaned);
    if contour.is_empty() {
        return ExtractedPolygon::default();
    }

    let raw_point_count = contour.len();
    let mut points = grid.polygon_to_world(&contour);
    simplify_polygon(&mut points, params.epsilon);

    if params.close_polygon && points.len() > 2 {
        points.push(points[0]);
    }

    ExtractedPolygon {
        raw_point_count,
        points,
    }
}

/// Simplification threshold for contour-map polygons.
///
/// Smoothed contours tolerate a coarser threshold; dense level sets and large grids scale it up.
pub fn contour_simplify_epsilon(sample_spacing: f64, smooth: bool, n_levels: usize, n_cells: usize) -> f64 {
    let mut epsilon = if smooth {
        5.0e-2 * sample_spacing
    } else {
        1.0e-3 * sample_spacing
    };
    if n_levels >= 10 {
        epsilon *= 2.0;
    }
    if n_cells > 1_000_000 {
        epsilon *= 4.0;
    } else if n_cells > 100_000 {
        epsilon *= 2.0;
    }
    epsilon
}

/// Scalar field to binary raster: `v >= threshold` is foreground, NaN is background.
/// Jagged or empty input gives `BinIm::empty()`.
pub fn binary_from_threshold(values: &[Vec<f64>], threshold: f64) -> BinIm {
    let rows: Vec<Vec<i32>> = values
        .iter()
        .map(|row| row.iter().map(|&v| if v >= threshold { 1 } else { 0 }).collect())
        .collect();
    BinIm::from_rows(&rows)
}
