use failure::Fail;

/// Returned by the validating constructors of [`Point`](crate::Point)
/// when a coordinate lies outside its range. NaN is never in range.
#[derive(Debug, Clone, Copy, PartialEq, Fail)]
pub enum InvalidCoordinate {
    #[fail(display = "latitude {} is outside of [-90, 90]", _0)]
    Latitude(f64),
    #[fail(display = "longitude {} is outside of [-180, 180]", _0)]
    Longitude(f64),
}

pub fn check_latitude(latitude: f64) -> Result<f64, InvalidCoordinate> {
    if (-90. ..=90.).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(InvalidCoordinate::Latitude(latitude))
    }
}

pub fn check_longitude(longitude: f64) -> Result<f64, InvalidCoordinate> {
    if (-180. ..=180.).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(InvalidCoordinate::Longitude(longitude))
    }
}
