#[macro_use] extern crate cfg_if;

extern crate failure;
extern crate flat_projection;
extern crate ord_subset;

#[cfg(feature = "rayon")]
extern crate rayon;

pub mod azimuth;
pub mod error;
pub mod flat;
pub mod haversine;
pub mod landmarks;
mod location;
mod parallel;
mod point;
pub mod survey;

pub use crate::azimuth::azimuth;
pub use crate::error::InvalidCoordinate;
pub use crate::haversine::haversine_distance;
pub use crate::location::Location;
pub use crate::point::Point;

/// Mean Earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.;
