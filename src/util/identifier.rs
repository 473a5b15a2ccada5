use crate::core::constants::{IDENTIFIER_VERSION, SCALE_FACTOR};
use crate::util::error::HexGeoError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Encodes a cell's axial coordinates and cell size into a URL-safe string.
///
/// Layout: version (1 byte), q (8 bytes BE), r (8 bytes BE), size in
/// millimeters (8 bytes BE), additive checksum (1 byte). Identifiers do not
/// encode the grid origin, so they are only comparable between grids that
/// share one.
pub fn generate_identifier(q: i64, r: i64, size_m: f64) -> String {
    let size_mm = (size_m * SCALE_FACTOR as f64).round() as u64;

    let mut binary_data = Vec::with_capacity(26);
    binary_data.push(IDENTIFIER_VERSION);
    binary_data.extend_from_slice(&q.to_be_bytes());
    binary_data.extend_from_slice(&r.to_be_bytes());
    binary_data.extend_from_slice(&size_mm.to_be_bytes());

    let checksum: u8 = binary_data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    binary_data.push(checksum);

    URL_SAFE_NO_PAD.encode(&binary_data)
}

/// Decodes an identifier back to `(version, q, r, size_m)`.
pub fn decode_identifier(identifier: &str) -> Result<(u8, i64, i64, f64), HexGeoError> {
    let binary_data = URL_SAFE_NO_PAD
        .decode(identifier)
        .map_err(|_| HexGeoError::Base64DecodeError)?;

    if binary_data.len() != 26 {
        return Err(HexGeoError::InvalidIdentifierLength);
    }

    let (data, checksum_bytes) = binary_data.split_at(25);
    let checksum = checksum_bytes[0];

    let calculated_checksum: u8 = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    if calculated_checksum != checksum {
        return Err(HexGeoError::InvalidChecksum);
    }

    let version = data[0];
    if version != IDENTIFIER_VERSION {
        return Err(HexGeoError::UnsupportedVersion(version));
    }

    let q_bytes: [u8; 8] = data[1..9]
        .try_into()
        .map_err(|_| HexGeoError::InvalidIdentifierLength)?;
    let r_bytes: [u8; 8] = data[9..17]
        .try_into()
        .map_err(|_| HexGeoError::InvalidIdentifierLength)?;
    let size_bytes: [u8; 8] = data[17..25]
        .try_into()
        .map_err(|_| HexGeoError::InvalidIdentifierLength)?;

    let q = i64::from_be_bytes(q_bytes);
    let r = i64::from_be_bytes(r_bytes);
    let size_m = u64::from_be_bytes(size_bytes) as f64 / SCALE_FACTOR as f64;

    Ok((version, q, r, size_m))
}
