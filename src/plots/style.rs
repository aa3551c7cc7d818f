use ndarray::ArrayView2;
use plotly::common::{ColorScale, ColorScalePalette, Title};
use plotly::layout::Axis;
use crate::constants::CONTOUR_LEVELS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotStyle {
    pub contour_levels: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle { contour_levels: CONTOUR_LEVELS }
    }
}

pub(crate) fn viridis() -> ColorScale {
    ColorScale::Palette(ColorScalePalette::Viridis)
}

pub(crate) fn titled_axis(title: &str) -> Axis {
    Axis::new().title(Title::from(title))
}

/// Nested row vectors in the layout plotly expects for `z`.
pub(crate) fn nested_rows(values: ArrayView2<f64>) -> Vec<Vec<f64>> {
    values.rows().into_iter().map(|row| row.to_vec()).collect()
}
