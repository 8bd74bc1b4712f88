use std::ops::{Add, Mul, Sub};

/// Raster-space point. `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Iv2 {
    pub x: i32,
    pub y: i32,
}

impl Iv2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Builds a point from a `(row, col)` pair.
    pub const fn from_row_col(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    pub const fn row_col(self) -> (i32, i32) {
        (self.y, self.x)
    }
}

/// World-space point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct V3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl V3d {
    pub const ZERO: V3d = V3d { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, o: V3d) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    #[inline]
    pub fn cross(self, o: V3d) -> V3d {
        V3d {
            x: self.y * o.z - self.z * o.y,
            y: self.z * o.x - self.x * o.z,
            z: self.x * o.y - self.y * o.x,
        }
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Same point dropped onto the z = 0 plane.
    #[inline]
    pub fn horizontal(self) -> V3d {
        V3d { z: 0.0, ..self }
    }
}

impl Add for V3d {
    type Output = V3d;
    #[inline]
    fn add(self, o: V3d) -> V3d {
        V3d::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for V3d {
    type Output = V3d;
    #[inline]
    fn sub(self, o: V3d) -> V3d {
        V3d::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Mul<f64> for V3d {
    type Output = V3d;
    #[inline]
    fn mul(self, k: f64) -> V3d {
        V3d::new(self.x * k, self.y * k, self.z * k)
    }
}

impl From<[f64; 3]> for V3d {
    fn from(a: [f64; 3]) -> Self {
        V3d::new(a[0], a[1], a[2])
    }
}

/// Anything that can be read as a point in the xy-plane.
pub trait PlanarPoint: Copy {
    fn xy(self) -> (f64, f64);
}

impl PlanarPoint for Iv2 {
    #[inline(always)]
    fn xy(self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl PlanarPoint for V3d {
    #[inline(always)]
    fn xy(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

macro_rules! impl_planar_point_array {
    ($($t:ty),* $(,)?) => {
        $(
            impl PlanarPoint for [$t; 2] {
                #[inline(always)]
                fn xy(self) -> (f64, f64) {
                    (self[0] as f64, self[1] as f64)
                }
            }
        )*
    };
}

impl_planar_point_array!(i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes_is_right_handed() {
        let x = V3d::new(1.0, 0.0, 0.0);
        let y = V3d::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), V3d::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), V3d::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn row_col_maps_to_y_x() {
        let p = Iv2::from_row_col(2, 5);
        assert_eq!(p, Iv2 { x: 5, y: 2 });
        assert_eq!(p.row_col(), (2, 5));
    }

    #[test]
    fn horizontal_drops_z() {
        let v = V3d::new(3.0, 4.0, 12.0);
        assert_eq!(v.length(), 13.0);
        assert_eq!(v.horizontal().length(), 5.0);
    }
}
