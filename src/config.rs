use std::path::PathBuf;
use crate::constants::SURFACE_POINTS_CSV;
use crate::model::grid::GridShape;
use crate::plots::style::PlotStyle;

/// Everything one viewer run needs. The defaults are the exporter's contract:
/// `surface_points.csv` on a 50x50 grid, drawn with 20 contour levels.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub input: PathBuf,
    pub shape: GridShape,
    pub style: PlotStyle,
}

impl RenderConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        RenderConfig {
            input: input.into(),
            shape: GridShape::default(),
            style: PlotStyle::default(),
        }
    }

    pub fn with_shape(mut self, nx: usize, ny: usize) -> Self {
        self.shape = GridShape::new(nx, ny);
        self
    }

    pub fn with_contour_levels(mut self, levels: usize) -> Self {
        self.style.contour_levels = levels;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::new(SURFACE_POINTS_CSV)
    }
}
