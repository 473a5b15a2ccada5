pub mod axial;
pub mod constants;
pub mod geometry;
pub mod metrics;
pub mod projection;

pub use axial::{axial_from_xy, axial_round, cube_round, xy_from_axial};
pub use constants::{DEFAULT_ACCURACY_RADIUS_M, IDENTIFIER_VERSION};
pub use geometry::{geographic_hexagon, planar_hexagon};
pub use metrics::{
    CellMetrics, from_apothem, from_area, from_circumradius, from_spacing, from_width,
};
pub use projection::{meters_per_degree, project, unproject};
