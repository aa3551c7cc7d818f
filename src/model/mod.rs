pub mod grid;
pub mod table;
