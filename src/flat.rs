use flat_projection::{FlatPoint, FlatProjection};
use log::trace;
use ord_subset::OrdSubsetIterExt;

use crate::Location;
use crate::parallel::*;

/// Approximate distances in meters from `observer` to each of `waypoints`,
/// in input order.
///
/// The waypoints are projected onto a flat surface centered on the observer,
/// which is much cheaper than [`haversine_distance`](crate::haversine_distance)
/// and stays within a fraction of a percent of it for waypoints up to a few
/// hundred kilometers away. Do not use it for global distances.
pub fn flat_distances<T: Location>(observer: &dyn Location, waypoints: &[T]) -> Vec<f64> {
    let proj = FlatProjection::new(observer.longitude(), observer.latitude());
    let origin = proj.project(observer.longitude(), observer.latitude());

    trace!("Projecting {} waypoints around {}, {}", waypoints.len(), observer.latitude(), observer.longitude());

    opt_map_indexed(waypoints, |_, waypoint| {
        let p = proj.project(waypoint.longitude(), waypoint.latitude());
        origin.distance(&p) * 1000.
    })
}

/// Projects all points onto a flat surface scaled for the center of their
/// bounding box. Returns `None` if `points` is empty.
pub fn to_flat_points<T: Location>(points: &[T]) -> Option<Vec<FlatPoint<f64>>> {
    let (center_lat, center_lon) = bounding_box_center(points)?;
    let proj = FlatProjection::new(center_lon, center_lat);

    Some(opt_map_indexed(points, |_, point| proj.project(point.longitude(), point.latitude())))
}

/// `(latitude, longitude)` halfway between the extremes, ignoring NaN
fn bounding_box_center<T: Location>(points: &[T]) -> Option<(f64, f64)> {
    let lat_min = points.iter().map(|p| p.latitude()).ord_subset_min()?;
    let lat_max = points.iter().map(|p| p.latitude()).ord_subset_max()?;
    let lon_min = points.iter().map(|p| p.longitude()).ord_subset_min()?;
    let lon_max = points.iter().map(|p| p.longitude()).ord_subset_max()?;

    Some(((lat_min + lat_max) / 2., (lon_min + lon_max) / 2.))
}
