use log::{info, warn};
use plotly::common::{ColorBar, Title};
use plotly::contour::{Coloring, Contours};
use plotly::{Contour, Layout, Plot};
use crate::error::Result;
use crate::gridstats::is_rectilinear;
use crate::model::grid::SurfaceGrid;
use crate::plots::style::{nested_rows, titled_axis, viridis, PlotStyle};
use crate::viewer::PlotViewer;

pub const CONTOUR_TITLE: &str = "Response Surface Contour";

/// Filled contour of Y with X1 horizontal and X2 vertical.
///
/// Contour traces only take 1D axes, so rows of `z` run along X2 and the grid
/// is assumed rectilinear.
pub fn contour_plot(grid: &SurfaceGrid, style: &PlotStyle) -> Plot {
    let trace = Contour::new(
        grid.x1_axis().to_vec(),
        grid.x2_axis().to_vec(),
        nested_rows(grid.y.t()),
    )
    .contours(Contours::new().coloring(Coloring::Fill))
    .n_contours(style.contour_levels)
    .color_scale(viridis())
    .color_bar(ColorBar::new().title(Title::from("Y")))
    .name("Y");

    let layout = Layout::new()
        .title(Title::from(CONTOUR_TITLE))
        .width(600)
        .height(500)
        .x_axis(titled_axis("X1"))
        .y_axis(titled_axis("X2"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

pub fn render_contour(grid: &SurfaceGrid, style: &PlotStyle, viewer: &dyn PlotViewer) -> Result<()> {
    if !is_rectilinear(grid) {
        warn!("Grid is not rectilinear, contour axes are taken from the first row and column");
    }
    info!("Rendering contour with {} levels", style.contour_levels);
    viewer.display("contour", &contour_plot(grid, style))
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use serde_json::{json, Value};
    use crate::viewer::RecordingViewer;
    use super::*;

    fn get_grid() -> SurfaceGrid {
        // y = x1 + 10 * x2
        SurfaceGrid {
            x1: array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
            x2: array![[0.0, 1.0, 2.0], [0.0, 1.0, 2.0]],
            y: array![[0.0, 10.0, 20.0], [1.0, 11.0, 21.0]],
        }
    }

    #[test]
    fn test_contour_trace() {
        let plot = contour_plot(&get_grid(), &PlotStyle::default());
        let json: Value = serde_json::from_str(&plot.to_json()).unwrap();
        let trace = &json["data"][0];
        assert_eq!(trace["type"], "contour");
        assert_eq!(trace["ncontours"], 20);
        assert_eq!(trace["colorbar"]["title"]["text"], "Y");
        assert_eq!(trace["x"], json!([0.0, 1.0]));
        assert_eq!(trace["y"], json!([0.0, 1.0, 2.0]));
        // z[row = x2][col = x1]
        assert_eq!(trace["z"], json!([[0.0, 1.0], [10.0, 11.0], [20.0, 21.0]]));
        assert_eq!(json["layout"]["title"]["text"], CONTOUR_TITLE);
    }

    #[test]
    fn test_contour_levels_follow_style() {
        let style = PlotStyle { contour_levels: 7 };
        let json: Value = serde_json::from_str(&contour_plot(&get_grid(), &style).to_json()).unwrap();
        assert_eq!(json["data"][0]["ncontours"], 7);
    }

    #[test]
    fn test_render_contour_on_skewed_grid() {
        let mut grid = get_grid();
        grid.x1[[0, 1]] = 0.5;
        let viewer = RecordingViewer::new();
        render_contour(&grid, &PlotStyle::default(), &viewer).unwrap();
        assert_eq!(viewer.len(), 1);
        assert_eq!(viewer.plots()[0].0, "contour");
    }
}
