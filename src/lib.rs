pub mod config;
pub mod constants;
pub mod error;
pub mod gridstats;
pub mod model;
pub mod pipeline;
pub mod plots;
pub mod viewer;
