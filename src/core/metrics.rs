use crate::util::error::HexGeoError;

/// Derived measurements of one flat-top hexagonal cell, in meters (area in
/// square meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Center to vertex; the grid's `size_m`.
    pub circumradius: f64,
    /// Center to edge midpoint.
    pub apothem: f64,
    /// Edge length (equals the circumradius for a regular hexagon).
    pub edge: f64,
    /// Horizontal extent, across corners.
    pub width: f64,
    /// Vertical extent, across flats.
    pub height: f64,
    /// Distance between the centers of two adjacent cells.
    pub spacing: f64,
    pub perimeter: f64,
    pub area: f64,
}

/// Computes cell metrics from the circumradius (the grid's cell size).
pub fn from_circumradius(r: f64) -> Result<CellMetrics, HexGeoError> {
    if !r.is_finite() || r <= 0.0 {
        return Err(HexGeoError::InvalidMetric(
            "Circumradius must be positive".to_string(),
        ));
    }

    let sqrt3 = 3.0_f64.sqrt();
    Ok(CellMetrics {
        circumradius: r,
        apothem: (sqrt3 / 2.0) * r,
        edge: r,
        width: 2.0 * r,
        height: sqrt3 * r,
        spacing: sqrt3 * r,
        perimeter: 6.0 * r,
        area: (3.0 * sqrt3 / 2.0) * r * r,
    })
}

/// Computes cell metrics from the apothem (center to edge midpoint).
pub fn from_apothem(a: f64) -> Result<CellMetrics, HexGeoError> {
    if !a.is_finite() || a <= 0.0 {
        return Err(HexGeoError::InvalidMetric(
            "Apothem must be positive".to_string(),
        ));
    }

    let sqrt3 = 3.0_f64.sqrt();
    from_circumradius(2.0 * a / sqrt3)
}

/// Computes cell metrics from the center-to-center spacing of adjacent
/// cells, the quantity a designer usually reasons about when laying out a
/// world grid.
pub fn from_spacing(d: f64) -> Result<CellMetrics, HexGeoError> {
    if !d.is_finite() || d <= 0.0 {
        return Err(HexGeoError::InvalidMetric(
            "Spacing must be positive".to_string(),
        ));
    }

    let sqrt3 = 3.0_f64.sqrt();
    from_circumradius(d / sqrt3)
}

/// Computes cell metrics from the across-corners width.
pub fn from_width(w: f64) -> Result<CellMetrics, HexGeoError> {
    if !w.is_finite() || w <= 0.0 {
        return Err(HexGeoError::InvalidMetric(
            "Width must be positive".to_string(),
        ));
    }

    from_circumradius(w / 2.0)
}

/// Computes cell metrics from the cell area.
pub fn from_area(area: f64) -> Result<CellMetrics, HexGeoError> {
    if !area.is_finite() || area <= 0.0 {
        return Err(HexGeoError::InvalidMetric(
            "Area must be positive".to_string(),
        ));
    }

    let sqrt3 = 3.0_f64.sqrt();
    from_circumradius(((2.0 * area) / (3.0 * sqrt3)).sqrt())
}
