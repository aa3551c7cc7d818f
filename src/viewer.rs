use std::cell::RefCell;
use log::info;
use plotly::Plot;
use crate::error::Result;

/// Destination for rendered plots.
pub trait PlotViewer {
    fn display(&self, name: &str, plot: &Plot) -> Result<()>;
}

/// Opens each plot in the system browser.
pub struct BrowserViewer;

impl PlotViewer for BrowserViewer {
    fn display(&self, name: &str, plot: &Plot) -> Result<()> {
        info!("Showing {}", name);
        plot.show();
        Ok(())
    }
}

/// Keeps the JSON of every displayed plot in memory.
#[derive(Default)]
pub struct RecordingViewer {
    plots: RefCell<Vec<(String, String)>>,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(name, json)` pairs in display order.
    pub fn plots(&self) -> Vec<(String, String)> {
        self.plots.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.plots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.borrow().is_empty()
    }
}

impl PlotViewer for RecordingViewer {
    fn display(&self, name: &str, plot: &Plot) -> Result<()> {
        self.plots.borrow_mut().push((name.to_string(), plot.to_json()));
        Ok(())
    }
}
