/// File written by the response surface exporter.
pub const SURFACE_POINTS_CSV: &str = "surface_points.csv";

// Must match the nx/ny the exporter sampled with.
pub const GRID_NX: usize = 50;
pub const GRID_NY: usize = 50;

pub const CONTOUR_LEVELS: usize = 20;

pub const COLUMN_X1: &str = "x1";
pub const COLUMN_X2: &str = "x2";
pub const COLUMN_Y: &str = "y";
