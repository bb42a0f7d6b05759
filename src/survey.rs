use log::debug;
use ord_subset::OrdSubsetIterExt;

use crate::Location;
use crate::azimuth::azimuth;
use crate::haversine::haversine_distance;
use crate::parallel::*;

/// Distance and azimuth of one waypoint as seen from an observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    /// Index of the waypoint in the surveyed slice
    pub index: usize,
    /// Great-circle distance in meters
    pub distance: f64,
    /// Initial bearing in degrees, `[0, 360)`
    pub azimuth: f64,
}

/// Computes a [`Sighting`] from `observer` for every waypoint, in input order.
pub fn survey<T: Location>(observer: &dyn Location, waypoints: &[T]) -> Vec<Sighting> {
    debug!("Surveying {} waypoints", waypoints.len());

    opt_map_indexed(waypoints, |index, waypoint| Sighting {
        index,
        distance: haversine_distance(observer, waypoint),
        azimuth: azimuth(observer, waypoint),
    })
}

pub fn nearest<T: Location>(observer: &dyn Location, waypoints: &[T]) -> Option<Sighting> {
    survey(observer, waypoints)
        .into_iter()
        .ord_subset_min_by_key(|s| s.distance)
}

pub fn farthest<T: Location>(observer: &dyn Location, waypoints: &[T]) -> Option<Sighting> {
    survey(observer, waypoints)
        .into_iter()
        .ord_subset_max_by_key(|s| s.distance)
}

/// Sightings of the waypoints no farther than `radius` meters, in input order
pub fn within<T: Location>(observer: &dyn Location, waypoints: &[T], radius: f64) -> Vec<Sighting> {
    let sightings: Vec<_> = survey(observer, waypoints)
        .into_iter()
        .filter(|s| s.distance <= radius)
        .collect();

    debug!("{} of {} waypoints within {} m", sightings.len(), waypoints.len(), radius);

    sightings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{landmarks, Point};

    #[test]
    fn keeps_order_and_matches_pairwise() {
        let home = landmarks::developers_home();
        let waypoints = landmarks::all();

        let sightings = survey(&home, &waypoints);
        assert_eq!(sightings.len(), waypoints.len());

        for (i, (sighting, waypoint)) in sightings.iter().zip(&waypoints).enumerate() {
            assert_eq!(sighting.index, i);
            assert_eq!(sighting.distance, home.distance_to(waypoint));
            assert_eq!(sighting.azimuth, home.azimuth_to(waypoint));
        }
    }

    #[test]
    fn nearest_and_farthest() {
        let rachais = landmarks::mont_rachais();
        let waypoints = vec![
            landmarks::mont_blanc(),
            landmarks::developers_home(),
            landmarks::developers_home_antipode(),
            landmarks::north_pole(),
        ];

        assert_eq!(nearest(&rachais, &waypoints).map(|s| s.index), Some(1));
        assert_eq!(farthest(&rachais, &waypoints).map(|s| s.index), Some(2));
    }

    #[test]
    fn empty() {
        let home = landmarks::developers_home();
        assert!(survey::<Point>(&home, &[]).is_empty());
        assert_eq!(nearest::<Point>(&home, &[]), None);
        assert_eq!(farthest::<Point>(&home, &[]), None);
    }

    #[test]
    fn nan_is_ignored() {
        let home = landmarks::developers_home();
        let waypoints = vec![
            Point::new("broken", std::f64::NAN, 0., 0.),
            landmarks::mont_blanc(),
        ];
        assert_eq!(nearest(&home, &waypoints).map(|s| s.index), Some(1));
    }

    #[test]
    fn within_skips_nan() {
        let home = landmarks::developers_home();
        let waypoints = vec![
            Point::new("broken", 0., std::f64::NAN, 0.),
            landmarks::mont_rachais(),
        ];

        let indices = within(&home, &waypoints, std::f64::INFINITY)
            .iter()
            .map(|s| s.index)
            .collect::<Vec<_>>();

        assert_eq!(indices, vec![1]);
    }

    #[test]
    fn within_radius() {
        let home = landmarks::developers_home();
        let waypoints = landmarks::all();

        let names = within(&home, &waypoints, 150_000.)
            .iter()
            .map(|s| waypoints[s.index].name())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["Developer's home", "Mont Rachais", "Mont Blanc"]);
    }
}
