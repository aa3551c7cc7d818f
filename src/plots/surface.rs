use log::info;
use plotly::common::Title;
use plotly::layout::LayoutScene;
use plotly::{Layout, Plot, Surface};
use crate::error::Result;
use crate::model::grid::SurfaceGrid;
use crate::plots::style::{nested_rows, titled_axis, viridis};
use crate::viewer::PlotViewer;

pub const SURFACE_TITLE: &str = "Response Surface (Quadratic)";

/// 3D surface colored by Y. X1 and X2 go in as full matrices, so z[i][j]
/// is placed at (X1[i][j], X2[i][j]) whatever the grid spacing.
pub fn surface_plot(grid: &SurfaceGrid) -> Plot {
    let trace = Surface::new(nested_rows(grid.y.view()))
        .x(nested_rows(grid.x1.view()))
        .y(nested_rows(grid.x2.view()))
        .color_scale(viridis())
        .name("Y");

    let layout = Layout::new()
        .title(Title::from(SURFACE_TITLE))
        .width(800)
        .height(600)
        .scene(
            LayoutScene::new()
                .x_axis(titled_axis("X1"))
                .y_axis(titled_axis("X2"))
                .z_axis(titled_axis("Y")),
        );

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

pub fn render_surface(grid: &SurfaceGrid, viewer: &dyn PlotViewer) -> Result<()> {
    let shape = grid.shape();
    info!("Rendering surface over {}x{} grid", shape.nx, shape.ny);
    viewer.display("surface", &surface_plot(grid))
}
