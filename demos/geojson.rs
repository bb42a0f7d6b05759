#[macro_use]
extern crate serde_json;

extern crate geopoint;

use std::env;

use geopoint::survey::survey;
use geopoint::{landmarks, Point};

#[allow(dead_code)]
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let observer = match (args.get(1), args.get(2)) {
        (Some(lat), Some(lon)) => match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => match Point::checked("Observer", lat, lon, 0.) {
                Ok(point) => point,
                Err(err) => {
                    eprintln!("{}", err);
                    return help();
                }
            },
            _ => return help(),
        },
        (None, None) => landmarks::developers_home(),
        _ => return help(),
    };

    let points = landmarks::all();

    let features = survey(&observer, &points)
        .iter()
        .map(|s| {
            let p = &points[s.index];
            json!({
              "id": p.name(),
              "type": "Feature",
              "properties": {
                "name": p.name(),
                "altitude": p.altitude(),
                "distance": s.distance,
                "azimuth": s.azimuth,
              },
              "geometry": {
                "type": "Point",
                "coordinates": (p.longitude(), p.latitude()),
              },
            })
        })
        .collect::<Vec<_>>();

    let json = json!({
      "type": "FeatureCollection",
      "features": features,
    });

    println!("{}", json.to_string());
}

fn help() {
    println!("usage: geojson [<latitude> <longitude>]");
}
