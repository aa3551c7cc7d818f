use log::{debug, info, warn};
use crate::config::RenderConfig;
use crate::error::{Result, SurfaceError};
use crate::gridstats::GridSummary;
use crate::model::grid::SurfaceGrid;
use crate::model::table::SurfaceTable;
use crate::plots::contour::render_contour;
use crate::plots::surface::render_surface;
use crate::viewer::PlotViewer;

/// Load, reshape, then draw the surface followed by the contour.
///
/// Config, load and reshape errors are returned before anything reaches `viewer`.
pub fn run(config: &RenderConfig, viewer: &dyn PlotViewer) -> Result<GridSummary> {
    if config.style.contour_levels == 0 {
        return Err(SurfaceError::NoContourLevels);
    }
    info!("Loading surface points from {:?}", config.input);
    let table = SurfaceTable::from_file(&config.input)?;

    let grid = SurfaceGrid::reshape(&table, config.shape)?;
    let summary = GridSummary::from_grid(&grid);
    debug!("{:?}", summary);
    if summary.y.is_none() {
        warn!("Response column contains NaN");
    }

    render_surface(&grid, viewer)?;
    render_contour(&grid, &config.style, viewer)?;
    Ok(summary)
}
