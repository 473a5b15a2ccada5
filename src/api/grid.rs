use crate::api::cell::{AXIAL_DIRECTIONS, HexCell};
use crate::core::axial::{axial_from_xy, axial_round, xy_from_axial};
use crate::core::constants::DEFAULT_ACCURACY_RADIUS_M;
use crate::core::projection::{project, unproject};
use crate::util::coord::{Coordinate, geodesic_distance_m, validate_finite};
use crate::util::error::HexGeoError;
use crate::util::identifier::{decode_identifier, generate_identifier};
use geo_types::{Point, Polygon};
use serde::{Deserialize, Serialize};

/// Plain configuration of one grid tessellation, loadable from per-region
/// service settings.
///
/// The origin must be fixed and shared across every query that is meant to
/// be comparable: two points located against different origins are not
/// comparable cell identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Latitude of the projection origin, decimal degrees
    pub origin_lat: f64,
    /// Longitude of the projection origin, decimal degrees
    pub origin_lon: f64,
    /// Hexagon circumradius in meters
    pub size_m: f64,
    /// Advisory distance from the origin beyond which projection accuracy
    /// degrades
    #[serde(default = "default_accuracy_radius")]
    pub accuracy_radius_m: f64,
}

fn default_accuracy_radius() -> f64 {
    DEFAULT_ACCURACY_RADIUS_M
}

/// Advisory signal that a query point lies beyond the grid's accuracy
/// radius. Not an error: results are still returned best-effort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyWarning {
    /// Geodesic distance from the grid origin to the query point, meters
    pub distance_m: f64,
    /// The grid's configured accuracy radius, meters
    pub threshold_m: f64,
}

/// A hexagonal tessellation fixed by an origin and a cell size.
///
/// The grid holds no cell state; every operation is a pure transform over
/// its immutable configuration, safe to call concurrently. Independent grids
/// (one per game world or region) coexist freely.
///
/// # Example
///
/// ```
/// use hexgeo_rs::HexGrid;
///
/// # fn main() -> Result<(), hexgeo_rs::HexGeoError> {
/// let grid = HexGrid::new(52.52, 13.405, 250.0)?;
///
/// let cell = grid.locate(&(13.41, 52.523))?;
/// let same = grid.locate(&grid.cell(cell.q, cell.r)?.center)?;
/// assert_eq!(cell.id, same.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGrid {
    config: GridConfig,
}

impl HexGrid {
    pub fn builder() -> HexGridBuilder {
        HexGridBuilder::new()
    }

    /// Creates a grid from an origin and cell size, with the default
    /// accuracy radius.
    pub fn new(origin_lat: f64, origin_lon: f64, size_m: f64) -> Result<Self, HexGeoError> {
        Self::from_config(GridConfig {
            origin_lat,
            origin_lon,
            size_m,
            accuracy_radius_m: DEFAULT_ACCURACY_RADIUS_M,
        })
    }

    /// Validates a configuration and fixes the tessellation it describes.
    pub fn from_config(config: GridConfig) -> Result<Self, HexGeoError> {
        if !config.origin_lat.is_finite() || !config.origin_lon.is_finite() {
            return Err(HexGeoError::NonFiniteCoordinate);
        }
        if config.origin_lat.abs() >= 90.0 {
            return Err(HexGeoError::InvalidReferenceLatitude(config.origin_lat));
        }
        if !config.size_m.is_finite() || config.size_m <= 0.0 {
            return Err(HexGeoError::InvalidCellSize(config.size_m));
        }
        if !config.accuracy_radius_m.is_finite() || config.accuracy_radius_m <= 0.0 {
            return Err(HexGeoError::InvalidMetric(
                "Accuracy radius must be positive".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The projection origin as a lon/lat point.
    pub fn origin(&self) -> Point<f64> {
        Point::new(self.config.origin_lon, self.config.origin_lat)
    }

    pub fn size_m(&self) -> f64 {
        self.config.size_m
    }

    /// Returns the cell containing the given geographic point.
    ///
    /// Total and deterministic for a fixed grid: every finite point maps to
    /// exactly one cell. Points beyond the accuracy radius still resolve;
    /// see [`HexGrid::accuracy_warning`].
    pub fn locate<C: Coordinate>(&self, coord: &C) -> Result<HexCell, HexGeoError> {
        validate_finite(coord)?;
        let (x, y) = project(
            coord.lat(),
            coord.lon(),
            self.config.origin_lat,
            self.config.origin_lon,
        )?;
        let (qf, rf) = axial_from_xy(x, y, self.config.size_m);
        let (q, r) = axial_round(qf, rf);
        self.cell(q, r)
    }

    /// Returns the cell with the given axial coordinates.
    ///
    /// Right inverse of [`HexGrid::locate`]: the returned center always
    /// locates back to `(q, r)`.
    pub fn cell(&self, q: i64, r: i64) -> Result<HexCell, HexGeoError> {
        let (x, y) = xy_from_axial(q as f64, r as f64, self.config.size_m);
        let (lat, lon) = unproject(x, y, self.config.origin_lat, self.config.origin_lon)?;
        let id = generate_identifier(q, r, self.config.size_m);
        Ok(HexCell::new(
            id,
            Point::new(lon, lat),
            q,
            r,
            self.config.size_m,
        ))
    }

    /// Returns the boundary polygon of the cell at `(q, r)`.
    pub fn cell_polygon(&self, q: i64, r: i64) -> Result<Polygon<f64>, HexGeoError> {
        self.cell(q, r)?.to_polygon()
    }

    /// Reconstructs a cell from an encoded identifier.
    ///
    /// Fails with [`HexGeoError::GridMismatch`] when the identifier was
    /// produced by a grid with a different cell size.
    pub fn cell_from_id(&self, id: &str) -> Result<HexCell, HexGeoError> {
        let (_, q, r, size_m) = decode_identifier(id)?;
        if (size_m - self.config.size_m).abs() > 1e-3 {
            return Err(HexGeoError::GridMismatch(format!(
                "identifier cell size {}m does not match grid cell size {}m",
                size_m, self.config.size_m
            )));
        }
        self.cell(q, r)
    }

    /// Advisory check that a query point is within the grid's accuracy
    /// radius of the origin.
    ///
    /// Returns `Some` when the geodesic distance exceeds the configured
    /// radius, `None` otherwise (including for non-finite input, which the
    /// query operations reject as errors instead).
    pub fn accuracy_warning<C: Coordinate>(&self, coord: &C) -> Option<AccuracyWarning> {
        if validate_finite(coord).is_err() {
            return None;
        }
        let distance_m = geodesic_distance_m(&self.origin(), coord);
        if distance_m > self.config.accuracy_radius_m {
            Some(AccuracyWarning {
                distance_m,
                threshold_m: self.config.accuracy_radius_m,
            })
        } else {
            None
        }
    }

    /// Returns the 6 cells adjacent to `(q, r)`.
    pub fn neighbors(&self, q: i64, r: i64) -> Result<Vec<HexCell>, HexGeoError> {
        AXIAL_DIRECTIONS
            .iter()
            .map(|&(dq, dr)| self.cell(q + dq, r + dr))
            .collect()
    }

    /// Returns all cells within `range` grid steps of `(q, r)`, the center
    /// included. Yields `1 + 3 * range * (range + 1)` cells.
    pub fn cells_in_range(&self, q: i64, r: i64, range: u32) -> Result<Vec<HexCell>, HexGeoError> {
        let n = range as i64;
        let mut cells = Vec::with_capacity((1 + 3 * n * (n + 1)) as usize);
        for dq in -n..=n {
            for dr in (-n).max(-dq - n)..=n.min(-dq + n) {
                cells.push(self.cell(q + dq, r + dr)?);
            }
        }
        Ok(cells)
    }

    /// Returns all cells whose center falls inside the closed lon/lat
    /// rectangle spanned by `min` and `max`, for map viewport rendering.
    pub fn cover_extent<A: Coordinate, B: Coordinate>(
        &self,
        min: &A,
        max: &B,
    ) -> Result<Vec<HexCell>, HexGeoError> {
        validate_finite(min)?;
        validate_finite(max)?;

        let corners = [
            (min.lon(), min.lat()),
            (max.lon(), min.lat()),
            (max.lon(), max.lat()),
            (min.lon(), max.lat()),
        ];

        let mut min_q = i64::MAX;
        let mut max_q = i64::MIN;
        let mut min_r = i64::MAX;
        let mut max_r = i64::MIN;
        for corner in &corners {
            let cell = self.locate(corner)?;
            min_q = min_q.min(cell.q);
            max_q = max_q.max(cell.q);
            min_r = min_r.min(cell.r);
            max_r = max_r.max(cell.r);
        }

        let mut cells = Vec::new();
        // One cell of margin: a cell whose center is inside the rectangle
        // can have axial coordinates just outside the corner cells' range
        for q in (min_q - 1)..=(max_q + 1) {
            for r in (min_r - 1)..=(max_r + 1) {
                let cell = self.cell(q, r)?;
                if cell.lon() >= min.lon()
                    && cell.lon() <= max.lon()
                    && cell.lat() >= min.lat()
                    && cell.lat() <= max.lat()
                {
                    cells.push(cell);
                }
            }
        }
        Ok(cells)
    }
}

#[derive(Debug, Default)]
pub struct HexGridBuilder {
    origin_lat: Option<f64>,
    origin_lon: Option<f64>,
    size_m: Option<f64>,
    accuracy_radius_m: Option<f64>,
}

impl HexGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, lat: f64, lon: f64) -> Self {
        self.origin_lat = Some(lat);
        self.origin_lon = Some(lon);
        self
    }

    pub fn size_m(mut self, size_m: f64) -> Self {
        self.size_m = Some(size_m);
        self
    }

    pub fn accuracy_radius_m(mut self, radius_m: f64) -> Self {
        self.accuracy_radius_m = Some(radius_m);
        self
    }

    pub fn build(self) -> Result<HexGrid, HexGeoError> {
        let origin_lat = self.origin_lat.expect("origin must be set");
        let origin_lon = self.origin_lon.expect("origin must be set");
        let size_m = self.size_m.expect("size_m must be set");

        HexGrid::from_config(GridConfig {
            origin_lat,
            origin_lon,
            size_m,
            accuracy_radius_m: self.accuracy_radius_m.unwrap_or(DEFAULT_ACCURACY_RADIUS_M),
        })
    }
}
