pub mod cell;
pub mod feature;
pub mod grid;

pub use cell::{AXIAL_DIRECTIONS, HexCell};
pub use feature::HexCellsToFeatures;
pub use grid::{AccuracyWarning, GridConfig, HexGrid, HexGridBuilder};
