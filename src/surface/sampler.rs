use glam::{Vec3, vec3};

use crate::surface::Interval;

/// Walks the parameter grid in the fixed order the horizon algorithm needs:
/// rows from `row_axis.end` down to `row_axis.start`, columns from
/// `col_axis.start` up to `col_axis.end`.
///
/// Rows yielded later must be *nearer* to the viewer under the transform in
/// use; that is what lets two 1-D horizon arrays stand in for a depth
/// buffer. The sampler performs no depth reasoning of its own; it only fixes
/// the order, and the caller's transform must honour it.
pub struct SurfaceSampler<F> {
    row_axis: Interval,
    col_axis: Interval,
    height: F,
}

impl<F: Fn(f32, f32) -> f32> SurfaceSampler<F> {
    pub fn new(row_axis: Interval, col_axis: Interval, height: F) -> Self {
        Self {
            row_axis,
            col_axis,
            height,
        }
    }

    /// Row (depth) values, rear row first.
    pub fn rows(&self) -> impl Iterator<Item = f32> {
        self.row_axis.descending()
    }

    /// Samples for one row, left to right; `y` holds the evaluated height.
    pub fn row_points(&self, row: f32) -> impl Iterator<Item = Vec3> {
        self.col_axis
            .ascending()
            .map(move |col| vec3(col, (self.height)(col, row), row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_descend_columns_ascend() {
        let sampler = SurfaceSampler::new(
            Interval::new(0.0, 2.0, 1.0),
            Interval::new(0.0, 3.0, 1.0),
            |_, _| 0.0,
        );
        assert_eq!(sampler.rows().collect::<Vec<_>>(), vec![2.0, 1.0, 0.0]);
        let xs: Vec<f32> = sampler.row_points(1.0).map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn height_lands_in_y() {
        let sampler = SurfaceSampler::new(
            Interval::new(0.0, 1.0, 1.0),
            Interval::new(0.0, 2.0, 1.0),
            |x, z| x + 10.0 * z,
        );
        let pts: Vec<Vec3> = sampler.row_points(1.0).collect();
        assert_eq!(pts[2], vec3(2.0, 12.0, 1.0));
    }
}
