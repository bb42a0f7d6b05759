//! Well-known reference points, handy for examples and tests.

use crate::Point;

pub fn zero() -> Point {
    Point::new("Zero", 0., 0., 0.)
}

pub fn north_pole() -> Point {
    Point::new("North Pole", 90., 0., 0.)
}

pub fn south_pole() -> Point {
    Point::new("South Pole", -90., 0., 0.)
}

pub fn zero_antipode() -> Point {
    Point::new("Zero antipode", 0., 180., 0.)
}

pub fn developers_home() -> Point {
    Point::new("Developer's home", 45.1916626, 5.7385538, 220.)
}

pub fn developers_home_antipode() -> Point {
    Point::new("Developer's home antipode", -45.1916626, -174.2614462, 0.)
}

pub fn mont_rachais() -> Point {
    Point::new("Mont Rachais", 45.2417, 5.7436, 1046.)
}

pub fn mont_blanc() -> Point {
    Point::new("Mont Blanc", 45.8326, 6.8652, 4808.)
}

pub fn popocatepetl() -> Point {
    Point::new("Popocatépetl", 19.0225, -98.6278, 5426.)
}

pub fn all() -> Vec<Point> {
    vec![
        zero(),
        north_pole(),
        south_pole(),
        zero_antipode(),
        developers_home(),
        developers_home_antipode(),
        mont_rachais(),
        mont_blanc(),
        popocatepetl(),
    ]
}
