use crate::core::geometry::geographic_hexagon;
use crate::core::metrics::{CellMetrics, from_circumradius};
use crate::util::error::HexGeoError;
use geo_types::{Point, Polygon};
use wkt::ToWkt;

/// Axial offsets of the 6 neighbors of any cell, flat-top orientation,
/// starting with the east-northeast edge and winding clockwise.
pub const AXIAL_DIRECTIONS: [(i64, i64); 6] =
    [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// A single hexagonal cell of one grid tessellation.
///
/// Each `HexCell` carries its axial coordinates, its center in geographic
/// coordinates, and a stable encoded identifier. Cells are plain values
/// produced per query; two cells are only comparable when they come from
/// grids sharing the same origin and size.
///
/// # Example
///
/// ```
/// use hexgeo_rs::HexGrid;
///
/// # fn main() -> Result<(), hexgeo_rs::HexGeoError> {
/// let grid = HexGrid::new(52.52, 13.405, 250.0)?;
/// let cell = grid.locate(&(13.41, 52.523))?;
/// println!("{} at ({}, {})", cell.id, cell.q, cell.r);
/// let polygon = cell.to_polygon()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    /// Encoded identifier, unique within the cell's grid (Base64 URL-safe)
    pub id: String,
    /// Center point in geographic coordinates (x = longitude, y = latitude)
    pub center: Point<f64>,
    /// Axial q coordinate (column axis)
    pub q: i64,
    /// Axial r coordinate (diagonal axis)
    pub r: i64,
    /// Hexagon circumradius in meters
    pub size_m: f64,
}

impl HexCell {
    pub(crate) fn new(id: String, center: Point<f64>, q: i64, r: i64, size_m: f64) -> Self {
        Self {
            id,
            center,
            q,
            r,
            size_m,
        }
    }

    /// Returns the longitude of the cell center in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.center.x()
    }

    /// Returns the latitude of the cell center in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    /// Third cube-coordinate axis, derived so that `q + s() + r == 0`.
    pub fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Number of grid steps between this cell and `other`.
    pub fn grid_distance(&self, other: &HexCell) -> u64 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u64
    }

    /// Axial coordinates of the 6 adjacent cells.
    pub fn neighbor_coords(&self) -> [(i64, i64); 6] {
        AXIAL_DIRECTIONS.map(|(dq, dr)| (self.q + dq, self.r + dr))
    }

    /// Derived measurements of this cell (apothem, spacing, area, ...).
    pub fn metrics(&self) -> Result<CellMetrics, HexGeoError> {
        from_circumradius(self.size_m)
    }

    /// Converts this cell to its boundary polygon.
    ///
    /// Returns a `geo_types::Polygon` whose closed exterior ring holds 7
    /// lon/lat coordinates, suitable for spatial operations or direct
    /// GeoJSON export.
    pub fn to_polygon(&self) -> Result<Polygon<f64>, HexGeoError> {
        geographic_hexagon(self.lat(), self.lon(), self.size_m)
    }

    /// Converts this cell's boundary to a GeoJSON geometry.
    pub fn to_geojson(&self) -> Result<geojson::Geometry, HexGeoError> {
        let polygon = self.to_polygon()?;
        Ok(geojson::Geometry::new(geojson::Value::from(&polygon)))
    }

    /// Converts this cell's boundary to a WKT string.
    pub fn to_wkt(&self) -> Result<String, HexGeoError> {
        Ok(self.to_polygon()?.wkt_string())
    }
}
