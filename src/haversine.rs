use crate::{Location, EARTH_RADIUS};

/// Great-circle distance in meters between two positions on a sphere of
/// radius [`EARTH_RADIUS`]. Altitudes are ignored.
///
/// The result is symmetric in its arguments: swapping `a` and `b` yields the
/// bit-identical value.
pub fn haversine_distance(a: &dyn Location, b: &dyn Location) -> f64 {
    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let delta_phi = (b.latitude() - a.latitude()).to_radians();
    let delta_lambda = (b.longitude() - a.longitude()).to_radians();

    let hav = (delta_phi / 2.).sin().powi(2) +
        phi1.cos() * phi2.cos() * (delta_lambda / 2.).sin().powi(2);

    // rounding can push near-antipodal pairs just past 1; NaN passes through
    let hav = if hav > 1. { 1. } else if hav < 0. { 0. } else { hav };

    let c = 2. * hav.sqrt().atan2((1. - hav).sqrt());

    EARTH_RADIUS * c
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::Point;

    #[test]
    fn identical_points() {
        let p = Point::new("a", 45.1916626, 5.7385538, 220.);
        assert_eq!(haversine_distance(&p, &p), 0.);
    }

    #[test]
    fn quarter_circumference() {
        let equator = Point::new("equator", 0., 0., 0.);
        let pole = Point::new("pole", 90., 0., 0.);
        assert_approx_eq!(haversine_distance(&equator, &pole), PI * EARTH_RADIUS / 2., 1e-6);
    }

    #[test]
    fn antipodes() {
        let a = Point::new("a", 0., 0., 0.);
        let b = Point::new("b", 0., 180., 0.);
        assert_approx_eq!(haversine_distance(&a, &b), PI * EARTH_RADIUS, 1e-6);

        let a = Point::new("a", 45.1916626, 5.7385538, 0.);
        let b = Point::new("b", -45.1916626, -174.2614462, 0.);
        let distance = haversine_distance(&a, &b);
        assert!(!distance.is_nan());
        assert_approx_eq!(distance, PI * EARTH_RADIUS, 1.);
    }

    #[test]
    fn altitude_is_ignored() {
        let low = Point::new("low", 45.1916626, 5.7385538, -200.);
        let high = Point::new("high", 45.1916626, 5.7385538, 4808.);
        let other = Point::new("other", 45.8326, 6.8652, 0.);
        assert_eq!(haversine_distance(&low, &other), haversine_distance(&high, &other));
    }

    #[test]
    fn nan_coordinate_gives_nan() {
        let p = Point::new("p", 45.1916626, 5.7385538, 0.);
        let broken = Point::new("broken", std::f64::NAN, 0., 0.);
        assert!(haversine_distance(&p, &broken).is_nan());
        assert!(haversine_distance(&broken, &p).is_nan());
    }

    #[test]
    fn symmetric() {
        let a = Point::new("a", 19.0225, -98.6278, 5426.);
        let b = Point::new("b", -33.8688, 151.2093, 0.);
        assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
    }
}
