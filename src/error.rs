use thiserror::Error;

/// Errors raised while loading or reshaping surface points
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column {0:?} in header")]
    MissingColumn(&'static str),

    /// `row` is 1-based and counts data rows only
    #[error("row {row}, column {column:?}: cannot parse {value:?} as a number")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("cannot reshape {actual} values into a {nx}x{ny} grid (expected {expected})")]
    Reshape {
        expected: usize,
        actual: usize,
        nx: usize,
        ny: usize,
    },

    #[error("grid dimensions must be non-zero, got {nx}x{ny}")]
    EmptyShape { nx: usize, ny: usize },

    #[error("grid of {nx}x{ny} points does not fit in memory")]
    ShapeOverflow { nx: usize, ny: usize },

    #[error("contour level count must be at least 1")]
    NoContourLevels,
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
