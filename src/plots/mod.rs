pub mod contour;
pub mod style;
pub mod surface;
