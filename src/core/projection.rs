use crate::util::error::HexGeoError;

/// Meters per degree of latitude and longitude at the given latitude.
///
/// Four-term cosine series fit to the WGS84 ellipsoid, accurate to well
/// under a meter per degree. The longitude factor scales with `cos(lat)`
/// and vanishes at the poles, so it must be recomputed per reference
/// latitude rather than treated as a global constant.
pub fn meters_per_degree(lat_deg: f64) -> (f64, f64) {
    let lat = lat_deg.to_radians();
    let m_per_deg_lat = 111_132.92 - 559.82 * (2.0 * lat).cos() + 1.175 * (4.0 * lat).cos()
        - 0.0023 * (6.0 * lat).cos();
    let m_per_deg_lon =
        111_412.84 * lat.cos() - 93.5 * (3.0 * lat).cos() + 0.118 * (5.0 * lat).cos();
    (m_per_deg_lat, m_per_deg_lon)
}

/// Projects a geographic point into the planar frame tangent at the origin.
///
/// Returns `(x, y)` offsets in meters, x pointing east and y pointing north.
/// First-order linear: error grows with distance from the origin and the
/// result is only trustworthy within a few tens of kilometers of it.
pub fn project(lat: f64, lon: f64, lat0: f64, lon0: f64) -> Result<(f64, f64), HexGeoError> {
    validate_origin(lat0, lon0)?;
    if !lat.is_finite() || !lon.is_finite() {
        return Err(HexGeoError::NonFiniteCoordinate);
    }

    let (m_per_deg_lat, m_per_deg_lon) = meters_per_degree(lat0);
    let x = (lon - lon0) * m_per_deg_lon;
    let y = (lat - lat0) * m_per_deg_lat;
    Ok((x, y))
}

/// Exact algebraic inverse of [`project`].
pub fn unproject(x: f64, y: f64, lat0: f64, lon0: f64) -> Result<(f64, f64), HexGeoError> {
    validate_origin(lat0, lon0)?;
    if !x.is_finite() || !y.is_finite() {
        return Err(HexGeoError::NonFiniteCoordinate);
    }

    let (m_per_deg_lat, m_per_deg_lon) = meters_per_degree(lat0);
    let lat = lat0 + y / m_per_deg_lat;
    let lon = lon0 + x / m_per_deg_lon;
    Ok((lat, lon))
}

fn validate_origin(lat0: f64, lon0: f64) -> Result<(), HexGeoError> {
    if !lat0.is_finite() || !lon0.is_finite() {
        return Err(HexGeoError::NonFiniteCoordinate);
    }
    if lat0.abs() >= 90.0 {
        return Err(HexGeoError::InvalidReferenceLatitude(lat0));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_per_degree_at_equator() {
        let (m_lat, m_lon) = meters_per_degree(0.0);
        // All cosine terms collapse to their coefficients at the equator
        assert!((m_lat - 110_574.2727).abs() < 0.001);
        assert!((m_lon - 111_319.458).abs() < 0.001);
    }

    #[test]
    fn test_meters_per_degree_mid_latitude() {
        let (m_lat, m_lon) = meters_per_degree(45.0);
        assert!((m_lat - 111_131.745).abs() < 0.01);
        assert!((m_lon - 78_846.8).abs() < 1.0);
    }

    #[test]
    fn test_longitude_scale_shrinks_toward_pole() {
        let (_, m_lon_equator) = meters_per_degree(0.0);
        let (_, m_lon_berlin) = meters_per_degree(52.5);
        let (_, m_lon_arctic) = meters_per_degree(80.0);
        assert!(m_lon_equator > m_lon_berlin);
        assert!(m_lon_berlin > m_lon_arctic);
        assert!(m_lon_arctic > 0.0);
    }

    #[test]
    fn test_project_origin_is_zero() -> Result<(), HexGeoError> {
        let (x, y) = project(52.52, 13.405, 52.52, 13.405)?;
        assert_eq!(x, 0.0);
        assert_eq!(y, 0.0);
        Ok(())
    }

    #[test]
    fn test_project_unproject_round_trip() -> Result<(), HexGeoError> {
        let (lat0, lon0) = (52.52, 13.405);
        let (lat, lon) = (52.53, 13.42);

        let (x, y) = project(lat, lon, lat0, lon0)?;
        let (lat_back, lon_back) = unproject(x, y, lat0, lon0)?;

        assert!((lat - lat_back).abs() < 1e-12);
        assert!((lon - lon_back).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_project_axes_point_east_and_north() -> Result<(), HexGeoError> {
        let (lat0, lon0) = (52.52, 13.405);

        let (x, y) = project(lat0, lon0 + 0.01, lat0, lon0)?;
        assert!(x > 0.0);
        assert!(y.abs() < 1e-9);

        let (x, y) = project(lat0 + 0.01, lon0, lat0, lon0)?;
        assert!(x.abs() < 1e-9);
        assert!(y > 0.0);
        Ok(())
    }

    #[test]
    fn test_known_offset_magnitude() -> Result<(), HexGeoError> {
        // 0.01 degrees of latitude is about 1.11 km anywhere
        let (_, y) = project(52.53, 13.405, 52.52, 13.405)?;
        assert!((y - 1111.0).abs() < 5.0);
        Ok(())
    }

    #[test]
    fn test_polar_origin_rejected() {
        assert_eq!(
            project(89.0, 0.0, 90.0, 0.0),
            Err(HexGeoError::InvalidReferenceLatitude(90.0))
        );
        assert_eq!(
            unproject(10.0, 10.0, -90.0, 0.0),
            Err(HexGeoError::InvalidReferenceLatitude(-90.0))
        );
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert_eq!(
            project(f64::NAN, 13.4, 52.5, 13.4),
            Err(HexGeoError::NonFiniteCoordinate)
        );
        assert_eq!(
            project(52.5, 13.4, 52.5, f64::INFINITY),
            Err(HexGeoError::NonFiniteCoordinate)
        );
        assert_eq!(
            unproject(f64::NAN, 0.0, 52.5, 13.4),
            Err(HexGeoError::NonFiniteCoordinate)
        );
    }
}
