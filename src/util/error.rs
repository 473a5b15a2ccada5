/// Error type for hexgeo-rs operations.
#[derive(Debug, PartialEq)]
pub enum HexGeoError {
    /// A coordinate or planar offset input was NaN or infinite.
    NonFiniteCoordinate,
    /// The cell size is not a strictly positive, finite number of meters.
    InvalidCellSize(f64),
    /// The reference latitude is at or beyond ±90°, where the longitude
    /// scale factor collapses to zero.
    InvalidReferenceLatitude(f64),
    /// A hexagon metric value is invalid (e.g., negative).
    InvalidMetric(String),
    /// The cell identifier belongs to a different grid configuration.
    GridMismatch(String),
    /// The cell identifier has an invalid length.
    InvalidIdentifierLength,
    /// The cell identifier checksum validation failed.
    InvalidChecksum,
    /// The identifier version is not supported.
    UnsupportedVersion(u8),
    /// Failed to decode Base64 identifier.
    Base64DecodeError,
}

impl std::fmt::Display for HexGeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexGeoError::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
            HexGeoError::InvalidCellSize(s) => write!(f, "Invalid cell size: {}", s),
            HexGeoError::InvalidReferenceLatitude(lat) => {
                write!(f, "Invalid reference latitude: {}", lat)
            }
            HexGeoError::InvalidMetric(msg) => write!(f, "Invalid metric: {}", msg),
            HexGeoError::GridMismatch(msg) => write!(f, "Grid mismatch: {}", msg),
            HexGeoError::InvalidIdentifierLength => write!(f, "Invalid identifier length"),
            HexGeoError::InvalidChecksum => write!(f, "Invalid checksum"),
            HexGeoError::UnsupportedVersion(v) => write!(f, "Unsupported version: {}", v),
            HexGeoError::Base64DecodeError => write!(f, "Base64 decode error"),
        }
    }
}

impl std::error::Error for HexGeoError {}
