/// Fractional axial coordinates of the planar point `(x, y)` on a flat-top
/// hex grid with circumradius `s`.
///
/// Closed-form inverse of [`xy_from_axial`]; the two are mutual inverses for
/// all real `q, r`, not just integer cells.
pub fn axial_from_xy(x: f64, y: f64, s: f64) -> (f64, f64) {
    let sqrt3 = 3.0_f64.sqrt();
    let q = (2.0 / 3.0) * x / s;
    let r = (-1.0 / 3.0) * x / s + (sqrt3 / 3.0) * y / s;
    (q, r)
}

/// Planar center of the axial coordinate `(q, r)` on a flat-top hex grid
/// with circumradius `s`.
pub fn xy_from_axial(q: f64, r: f64, s: f64) -> (f64, f64) {
    let sqrt3 = 3.0_f64.sqrt();
    let x = s * (3.0 / 2.0) * q;
    let y = s * sqrt3 * (r + q / 2.0);
    (x, y)
}

/// Rounds real cube coordinates (`x + y + z ≈ 0`) to the nearest integer
/// cell.
///
/// Each axis is rounded independently with `f64::round` (halves round away
/// from zero), then the axis with the strictly largest rounding error is
/// recomputed from the other two. The result therefore sums to exactly zero.
/// Ties resolve in x, y, z precedence order.
pub fn cube_round(x: f64, y: f64, z: f64) -> (i64, i64, i64) {
    let mut rx = x.round();
    let mut ry = y.round();
    let mut rz = z.round();

    let x_diff = (rx - x).abs();
    let y_diff = (ry - y).abs();
    let z_diff = (rz - z).abs();

    if x_diff > y_diff && x_diff > z_diff {
        rx = -ry - rz;
    } else if y_diff > z_diff {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    (rx as i64, ry as i64, rz as i64)
}

/// Rounds fractional axial coordinates to the containing cell.
///
/// Lifts `(q, r)` to cube coordinates (`x = q`, `z = r`, `y = -q - r`),
/// applies [`cube_round`], and projects back to axial.
pub fn axial_round(q: f64, r: f64) -> (i64, i64) {
    let (rx, _, rz) = cube_round(q, -q - r, r);
    (rx, rz)
}
