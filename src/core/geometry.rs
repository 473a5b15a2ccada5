use crate::core::projection::unproject;
use crate::util::error::HexGeoError;
use geo_types::{Coord, LineString, Polygon};

/// Builds the hexagon boundary around a planar center, in meters.
///
/// Flat-top orientation with vertex 0 due east (angles 0°, 60°, ..., 300°,
/// counter-clockwise). The exterior ring holds 7 coordinates, the last equal
/// to the first.
pub fn planar_hexagon(center_x: f64, center_y: f64, size: f64) -> Polygon<f64> {
    let mut coords = Vec::with_capacity(7);

    for i in 0..6 {
        let angle_rad = (i as f64 * 60.0).to_radians();
        let x = center_x + size * angle_rad.cos();
        let y = center_y + size * angle_rad.sin();
        coords.push(Coord { x, y });
    }
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

/// Builds the hexagon boundary around a geographic center, as a lon/lat
/// ring.
///
/// Each vertex is computed as a planar offset of exactly `size_m` meters
/// from the center and unprojected against the center itself, so vertices
/// sit at planar distance `size_m`; their geographic distance is only
/// approximately that, degrading with cell size and latitude. Ring
/// coordinates are `(x = longitude, y = latitude)`, closed and
/// counter-clockwise, directly usable as a GeoJSON Polygon exterior.
pub fn geographic_hexagon(
    lat_center: f64,
    lon_center: f64,
    size_m: f64,
) -> Result<Polygon<f64>, HexGeoError> {
    if !size_m.is_finite() || size_m <= 0.0 {
        return Err(HexGeoError::InvalidCellSize(size_m));
    }

    let mut coords = Vec::with_capacity(7);

    for i in 0..6 {
        let angle_rad = (i as f64 * 60.0).to_radians();
        let x = size_m * angle_rad.cos();
        let y = size_m * angle_rad.sin();
        let (lat, lon) = unproject(x, y, lat_center, lon_center)?;
        coords.push(Coord { x: lon, y: lat });
    }
    coords.push(coords[0]);

    Ok(Polygon::new(LineString::from(coords), vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projection::project;

    #[test]
    fn test_planar_hexagon_ring_shape() {
        let hex = planar_hexagon(100.0, 100.0, 10.0);
        let exterior = hex.exterior();
        assert_eq!(exterior.coords().count(), 7); // 6 vertices + 1 to close
        assert_eq!(exterior.0[0], exterior.0[6]); // First and last are same
    }

    #[test]
    fn test_planar_hexagon_vertices_at_circumradius() {
        let hex = planar_hexagon(50.0, -20.0, 10.0);
        for coord in hex.exterior().coords().take(6) {
            let d = ((coord.x - 50.0).powi(2) + (coord.y + 20.0).powi(2)).sqrt();
            assert!((d - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_planar_hexagon_vertex_zero_east() {
        let hex = planar_hexagon(0.0, 0.0, 10.0);
        let v0 = hex.exterior().0[0];
        assert!((v0.x - 10.0).abs() < 1e-9);
        assert!(v0.y.abs() < 1e-9);
    }

    #[test]
    fn test_geographic_hexagon_ring_shape() -> Result<(), HexGeoError> {
        let hex = geographic_hexagon(0.0, 0.0, 100.0)?;
        let exterior = hex.exterior();
        assert_eq!(exterior.coords().count(), 7);
        assert_eq!(exterior.0[0], exterior.0[6]);
        Ok(())
    }

    #[test]
    fn test_geographic_hexagon_vertices_at_planar_distance() -> Result<(), HexGeoError> {
        let (lat_c, lon_c, size) = (52.52, 13.405, 250.0);
        let hex = geographic_hexagon(lat_c, lon_c, size)?;

        for coord in hex.exterior().coords().take(6) {
            let (x, y) = project(coord.y, coord.x, lat_c, lon_c)?;
            let d = (x * x + y * y).sqrt();
            assert!((d - size).abs() < 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_geographic_hexagon_vertex_zero_is_due_east() -> Result<(), HexGeoError> {
        let hex = geographic_hexagon(0.0, 0.0, 100.0)?;
        let v0 = hex.exterior().0[0];

        // 100 m east of the equatorial origin: longitude grows, latitude
        // stays put
        let (x, y) = project(v0.y, v0.x, 0.0, 0.0)?;
        assert!((x - 100.0).abs() < 1e-6);
        assert!(y.abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_geographic_hexagon_invalid_size() {
        assert!(matches!(
            geographic_hexagon(0.0, 0.0, 0.0),
            Err(HexGeoError::InvalidCellSize(_))
        ));
        assert!(matches!(
            geographic_hexagon(0.0, 0.0, -5.0),
            Err(HexGeoError::InvalidCellSize(_))
        ));
    }

    #[test]
    fn test_geographic_hexagon_polar_center_rejected() {
        assert!(geographic_hexagon(90.0, 0.0, 100.0).is_err());
    }
}
