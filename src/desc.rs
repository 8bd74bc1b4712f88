use crate::contour::{ExtractParams, RasterGrid};
use crate::error::{Error, Result};
use crate::geom::V3d;
use crate::im::BinIm;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the binary raster of an extract job comes from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterSource {
    /// Inline rows of 0/1 cells.
    Rows(Vec<Vec<i32>>),
    /// Image file, thresholded at mid-gray. Relative paths resolve against the job file.
    Png(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractJob {
    pub raster: RasterSource,
    #[serde(default)]
    pub grid: RasterGrid,
    #[serde(default)]
    pub params: ExtractParams,
}

pub fn parse_extract_job_json(json_text: &str) -> Result<ExtractJob> {
    Ok(serde_json::from_str(json_text)?)
}

/// Points file: `[[x, y, z], ...]`.
pub fn parse_points_json(json_text: &str) -> Result<Vec<V3d>> {
    let raw: Vec<[f64; 3]> = serde_json::from_str(json_text)?;
    Ok(raw.into_iter().map(V3d::from).collect())
}

pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

impl ExtractJob {
    pub fn load(path: &Path) -> Result<Self> {
        parse_extract_job_json(&read_text(path)?)
    }

    /// Materializes the raster. `base_dir` anchors relative image paths.
    pub fn raster(&self, base_dir: &Path) -> Result<BinIm> {
        let im = match &self.raster {
            RasterSource::Rows(rows) => BinIm::from_rows(rows),
            RasterSource::Png(path) => load_png(&base_dir.join(path))?,
        };
        if !im.is_well_formed() {
            return Err(Error::InvalidJob(
                "raster is empty or its rows differ in length".to_string(),
            ));
        }
        Ok(im)
    }
}

#[cfg(feature = "im-io")]
fn load_png(path: &Path) -> Result<BinIm> {
    Ok(BinIm::load_png(path)?)
}

#[cfg(not(feature = "im-io"))]
fn load_png(path: &Path) -> Result<BinIm> {
    Err(Error::InvalidJob(format!(
        "{} is an image raster but image IO is not compiled in (feature `im-io`)",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_JSON: &str = r#"
        {
            "raster": {
                "rows": [
                    [0, 0, 0, 0],
                    [0, 1, 1, 0],
                    [0, 1, 1, 0],
                    [0, 0, 0, 0]
                ]
            },
            "grid": { "origin_x": 1000.0, "cell_w": 50.0, "cell_h": 50.0 },
            "params": { "epsilon": 10.0, "close_polygon": false }
        }
    "#;

    #[test]
    fn parses_job_with_partial_sections() {
        let job = parse_extract_job_json(TEST_JSON).unwrap();
        assert_eq!(job.grid.origin_x, 1000.0);
        assert_eq!(job.grid.origin_y, 0.0);
        assert_eq!(job.params.epsilon, 10.0);
        assert!(!job.params.close_polygon);
        assert_eq!(job.params.erode_kernel, 1);

        let im = job.raster(Path::new(".")).unwrap();
        assert_eq!((im.w, im.h), (4, 4));
        assert_eq!(im.count_foreground(), 4);
    }

    #[test]
    fn grid_and_params_are_optional() {
        let job = parse_extract_job_json(r#"{ "raster": { "rows": [[1]] } }"#).unwrap();
        assert_eq!(job.grid, RasterGrid::default());
        assert_eq!(job.params, ExtractParams::default());
    }

    #[test]
    fn jagged_rows_are_rejected() {
        let job = parse_extract_job_json(r#"{ "raster": { "rows": [[1, 1], [1]] } }"#).unwrap();
        assert!(matches!(job.raster(Path::new(".")), Err(Error::InvalidJob(_))));
    }

    #[test]
    fn png_source_parses_as_path() {
        let job = parse_extract_job_json(r#"{ "raster": { "png": "mask.png" } }"#).unwrap();
        assert_eq!(job.raster, RasterSource::Png(PathBuf::from("mask.png")));
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(parse_extract_job_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn points_file_parses_triples() {
        let pts = parse_points_json("[[0, 0, 0], [1.5, 2, -3]]").unwrap();
        assert_eq!(pts, vec![V3d::new(0.0, 0.0, 0.0), V3d::new(1.5, 2.0, -3.0)]);
    }
}
