use crate::Location;

/// Initial bearing in degrees, clockwise from north and normalized to
/// `[0, 360)`, of the great circle leading from `from` to `to`.
///
/// The bearing from a position to itself is undefined; `0.` is returned in
/// that case.
pub fn azimuth(from: &dyn Location, to: &dyn Location) -> f64 {
    let phi1 = from.latitude().to_radians();
    let phi2 = to.latitude().to_radians();
    let delta_lambda = (to.longitude() - from.longitude()).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    if y == 0. && x == 0. {
        return 0.;
    }

    (y.atan2(x).to_degrees() + 360.) % 360.
}
