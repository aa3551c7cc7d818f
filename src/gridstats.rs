use approx::abs_diff_eq;
use ndarray::{Array2, Axis};
use ndarray_stats::QuantileExt;
use crate::model::grid::{GridShape, SurfaceGrid};

pub(crate) const RECTILINEAR_TOLERANCE: f64 = 1e-9;

/// Inclusive value range of one grid matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

/// Ranges are `None` when the matrix holds NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSummary {
    pub shape: GridShape,
    pub x1: Option<Range>,
    pub x2: Option<Range>,
    pub y: Option<Range>,
    pub rectilinear: bool,
}

impl GridSummary {
    pub fn from_grid(grid: &SurfaceGrid) -> Self {
        GridSummary {
            shape: grid.shape(),
            x1: range(&grid.x1),
            x2: range(&grid.x2),
            y: range(&grid.y),
            rectilinear: is_rectilinear(grid),
        }
    }
}

pub(crate) fn range(values: &Array2<f64>) -> Option<Range> {
    let min = values.min().ok()?;
    let max = values.max().ok()?;
    Some(Range { min: *min, max: *max })
}

/// X1 must only vary down the rows and X2 only across the columns.
pub(crate) fn is_rectilinear(grid: &SurfaceGrid) -> bool {
    constant_along(&grid.x1, Axis(1)) && constant_along(&grid.x2, Axis(0))
}

fn constant_along(values: &Array2<f64>, axis: Axis) -> bool {
    values.lanes(axis).into_iter().all(|lane| {
        let first = lane[0];
        lane.iter().all(|v| abs_diff_eq!(*v, first, epsilon = RECTILINEAR_TOLERANCE))
    })
}
