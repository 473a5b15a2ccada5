//! # hexgeo-rs
//!
//! A flat-topped hexagonal spatial index over WGS84 coordinates, built on a
//! local tangent-plane projection. A grid is fixed by a reference origin and
//! a cell size in meters; every operation is a pure transform with no shared
//! state, so independent grids (one per game world or region) coexist
//! freely.
//!
//! There are three main entry points.
//!
//! ### 1. `HexGrid` - Locating points and cells
//!
//! ```
//! use hexgeo_rs::HexGrid;
//!
//! # fn main() -> Result<(), hexgeo_rs::HexGeoError> {
//! let grid = HexGrid::new(52.52, 13.405, 250.0)?;
//!
//! let cell = grid.locate(&(13.41, 52.523))?;
//! println!("{} at ({}, {})", cell.id, cell.q, cell.r);
//!
//! // The cell center locates back to the same cell
//! let again = grid.locate(&cell.center)?;
//! assert_eq!(cell.id, again.id);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `HexCell` - Boundaries for rendering
//!
//! ```
//! use hexgeo_rs::HexGrid;
//!
//! # fn main() -> Result<(), hexgeo_rs::HexGeoError> {
//! let grid = HexGrid::new(52.52, 13.405, 250.0)?;
//! let cell = grid.cell(2, -1)?;
//!
//! let polygon = cell.to_polygon()?;
//! assert_eq!(polygon.exterior().coords().count(), 7);
//!
//! let geojson = cell.to_geojson()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `HexCellsToFeatures` - Bulk GeoJSON for map clients
//!
//! ```
//! use hexgeo_rs::{HexCellsToFeatures, HexGrid};
//!
//! # fn main() -> Result<(), hexgeo_rs::HexGeoError> {
//! let grid = HexGrid::new(52.52, 13.405, 250.0)?;
//! let cells = grid.cells_in_range(0, 0, 2)?;
//!
//! let collection = cells.to_feature_collection()?;
//! assert_eq!(collection.features.len(), 19);
//! # Ok(())
//! # }
//! ```
//!
//! The underlying projector and axial primitives are exported from [`core`]
//! for callers that need finer control, e.g. custom rounding near cell
//! boundaries.

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    AXIAL_DIRECTIONS, AccuracyWarning, GridConfig, HexCell, HexCellsToFeatures, HexGrid,
    HexGridBuilder,
};
pub use core::{
    CellMetrics, DEFAULT_ACCURACY_RADIUS_M, IDENTIFIER_VERSION, axial_from_xy, axial_round,
    cube_round, from_apothem, from_area, from_circumradius, from_spacing, from_width,
    geographic_hexagon, meters_per_degree, planar_hexagon, project, unproject, xy_from_axial,
};
pub use util::{
    Coordinate, HexGeoError, decode_identifier, generate_identifier, geodesic_distance_m,
};

pub use geo_types;
pub use geojson;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), HexGeoError> {
        let grid = HexGrid::builder()
            .origin(52.52, 13.405)
            .size_m(250.0)
            .build()?;

        let pt = point! { x: 13.4102, y: 52.5235 };
        let cell = grid.locate(&pt)?;

        let (version, q, r, size_m) = decode_identifier(&cell.id)?;
        assert_eq!(version, IDENTIFIER_VERSION);
        assert_eq!((q, r), (cell.q, cell.r));
        assert!((size_m - 250.0).abs() < 0.001);

        let polygon = cell.to_polygon()?;
        assert_eq!(polygon.exterior().coords().count(), 7);

        assert!(grid.accuracy_warning(&pt).is_none());
        Ok(())
    }

    #[test]
    fn test_shared_origin_shared_cells() -> Result<(), HexGeoError> {
        // Two nearby points land in the same cell only because both are
        // quantized against the same grid origin
        let grid = HexGrid::new(52.52, 13.405, 250.0)?;

        let a = grid.locate(&(13.4051, 52.5201))?;
        let b = grid.locate(&(13.4055, 52.5203))?;
        assert_eq!(a.id, b.id);
        Ok(())
    }

    #[test]
    fn test_round_trip_locality() -> Result<(), HexGeoError> {
        let grid = HexGrid::new(52.52, 13.405, 250.0)?;

        for (lon, lat) in [
            (13.405, 52.52),
            (13.39, 52.51),
            (13.45, 52.55),
            (13.36, 52.49),
        ] {
            let cell = grid.locate(&(lon, lat))?;
            let (x, y) = project(lat, lon, 52.52, 13.405)?;
            let (cx, cy) = project(cell.lat(), cell.lon(), 52.52, 13.405)?;
            let d = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            assert!(d <= 250.0, "({}, {}) is {}m from its cell center", lon, lat, d);
        }
        Ok(())
    }

    #[test]
    fn test_equatorial_polygon_matches_reference() -> Result<(), HexGeoError> {
        // Cell polygon at (0, 0) with 100 m cells: 7 lon/lat pairs, closed,
        // vertex 0 exactly 100 m due east of the center
        let polygon = geographic_hexagon(0.0, 0.0, 100.0)?;
        let ring = polygon.exterior();

        assert_eq!(ring.coords().count(), 7);
        assert_eq!(ring.0[0], ring.0[6]);

        let v0 = ring.0[0];
        let (x, y) = project(v0.y, v0.x, 0.0, 0.0)?;
        assert!((x - 100.0).abs() < 1e-6);
        assert!(y.abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_core_primitives_reexported() {
        let (x, y) = xy_from_axial(1.0, 0.0, 100.0);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 86.60254).abs() < 1e-5);

        assert_eq!(cube_round(1.2, -0.5, -0.7), (1, 0, -1));
        assert_eq!(axial_round(0.1, -0.1), (0, 0));
    }
}
