use ndarray::{Array1, Array2};
use crate::constants::{GRID_NX, GRID_NY};
use crate::error::{Result, SurfaceError};
use crate::model::table::SurfaceTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub nx: usize,
    pub ny: usize,
}

impl GridShape {
    pub fn new(nx: usize, ny: usize) -> Self {
        GridShape { nx, ny }
    }

    /// `nx * ny`, or `None` when the product overflows `usize`.
    pub fn point_count(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)
    }

    pub fn is_empty(&self) -> bool {
        self.nx == 0 || self.ny == 0
    }
}

impl Default for GridShape {
    fn default() -> Self {
        GridShape::new(GRID_NX, GRID_NY)
    }
}

/// Surface samples on an `nx` x `ny` lattice.
///
/// Row-major: element `[i, j]` of every matrix is input row `i * ny + j`.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceGrid {
    pub x1: Array2<f64>,
    pub x2: Array2<f64>,
    pub y: Array2<f64>,
}

impl SurfaceGrid {
    pub fn reshape(table: &SurfaceTable, shape: GridShape) -> Result<Self> {
        let GridShape { nx, ny } = shape;
        if shape.is_empty() {
            return Err(SurfaceError::EmptyShape { nx, ny });
        }
        let expected = shape.point_count().ok_or(SurfaceError::ShapeOverflow { nx, ny })?;
        Ok(SurfaceGrid {
            x1: reshape_column(&table.x1, shape, expected)?,
            x2: reshape_column(&table.x2, shape, expected)?,
            y: reshape_column(&table.y, shape, expected)?,
        })
    }

    /// Inverse of [`SurfaceGrid::reshape`].
    pub fn flatten(&self) -> SurfaceTable {
        SurfaceTable::new(
            self.x1.iter().copied().collect(),
            self.x2.iter().copied().collect(),
            self.y.iter().copied().collect(),
        )
    }

    pub fn shape(&self) -> GridShape {
        let (nx, ny) = self.y.dim();
        GridShape::new(nx, ny)
    }

    /// X1 sample per grid row, taken from the first column.
    pub fn x1_axis(&self) -> Array1<f64> {
        self.x1.column(0).to_owned()
    }

    /// X2 sample per grid column, taken from the first row.
    pub fn x2_axis(&self) -> Array1<f64> {
        self.x2.row(0).to_owned()
    }
}

fn reshape_column(values: &[f64], shape: GridShape, expected: usize) -> Result<Array2<f64>> {
    let GridShape { nx, ny } = shape;
    if values.len() != expected {
        return Err(SurfaceError::Reshape {
            expected,
            actual: values.len(),
            nx,
            ny,
        });
    }
    // Length is checked above; from_shape_vec only fails on a length mismatch
    Array2::from_shape_vec((nx, ny), values.to_vec()).map_err(|_| SurfaceError::Reshape {
        expected,
        actual: values.len(),
        nx,
        ny,
    })
}
