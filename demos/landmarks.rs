extern crate geopoint;

use std::env;

use geopoint::landmarks;
use geopoint::survey::survey;

#[allow(dead_code)]
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        return help();
    }

    let points = landmarks::all();
    let observer = match args.get(1) {
        None => landmarks::developers_home(),
        Some(name) => match points.iter().find(|p| p.name().eq_ignore_ascii_case(name)) {
            Some(point) => point.clone(),
            None => return help(),
        },
    };

    println!("--- {}", observer);
    println!();

    for sighting in survey(&observer, &points) {
        println!(
            "{:28}  {:>12.3} km  {:>7.2}°",
            points[sighting.index].name(),
            sighting.distance / 1000.,
            sighting.azimuth,
        );
    }
}

fn help() {
    println!("usage: landmarks [<landmark name>]");
    println!();
    for point in landmarks::all() {
        println!("  {}", point.name());
    }
}
