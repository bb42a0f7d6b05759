use std::fmt;

use log::debug;

use crate::azimuth::azimuth;
use crate::error::{check_latitude, check_longitude, InvalidCoordinate};
use crate::haversine::haversine_distance;
use crate::Location;

/// A named geographic position.
///
/// `Point` is a plain mutable record: [`Point::new`] and the setters accept
/// any value. Use [`Point::checked`] or [`Point::validate`] where coordinates
/// come from an untrusted source.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    name: String,
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl Point {
    pub fn new<S: Into<String>>(name: S, latitude: f64, longitude: f64, altitude: f64) -> Point {
        Point { name: name.into(), latitude, longitude, altitude }
    }

    /// Copies the position of a location reading. A reading without
    /// altitude results in an altitude of `0.`.
    pub fn from_location<S: Into<String>>(name: S, location: &dyn Location) -> Point {
        Point::new(
            name,
            location.latitude(),
            location.longitude(),
            location.altitude().unwrap_or(0.),
        )
    }

    pub fn checked<S: Into<String>>(
        name: S,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<Point, InvalidCoordinate> {
        let point = Point::new(name, latitude, longitude, altitude);
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<(), InvalidCoordinate> {
        check_latitude(self.latitude)
            .and_then(|_| check_longitude(self.longitude))
            .map(|_| ())
            .map_err(|err| {
                debug!("Rejecting {}: {}", self, err);
                err
            })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn set_latitude(&mut self, latitude: f64) {
        self.latitude = latitude;
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn set_longitude(&mut self, longitude: f64) {
        self.longitude = longitude;
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn set_altitude(&mut self, altitude: f64) {
        self.altitude = altitude;
    }

    /// Great-circle distance in meters, see [`haversine_distance`]
    pub fn distance_to(&self, other: &dyn Location) -> f64 {
        haversine_distance(self, other)
    }

    /// Initial bearing in degrees, see [`azimuth`]
    pub fn azimuth_to(&self, other: &dyn Location) -> f64 {
        azimuth(self, other)
    }
}

impl Location for Point {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
    fn altitude(&self) -> Option<f64> {
        Some(self.altitude)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat, ns) = if self.latitude < 0. { (-self.latitude, 'S') } else { (self.latitude, 'N') };
        let (lon, ew) = if self.longitude < 0. { (-self.longitude, 'W') } else { (self.longitude, 'E') };
        write!(f, "{} ({:.5}°{}, {:.5}°{}, {:.0}m)", self.name, lat, ns, lon, ew, self.altitude)
    }
}
