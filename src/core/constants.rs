/// Identifier version for encoding/decoding
pub const IDENTIFIER_VERSION: u8 = 1;

/// Scale factor to preserve three decimal places of the cell size
pub(crate) const SCALE_FACTOR: u64 = 1000;

/// Default advisory radius around the grid origin, in meters.
///
/// The local tangent-plane projection is first-order linear; past a few tens
/// of kilometers from the origin its error becomes noticeable at cell scale.
pub const DEFAULT_ACCURACY_RADIUS_M: f64 = 50_000.0;
