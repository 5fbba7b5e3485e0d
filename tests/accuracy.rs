use std::fs;

use geodms::{ellipsoid, utm, AngleElement, Coordinate, Latitude, Longitude, Utm};

fn reference_points() -> Vec<(Coordinate, String)> {
    let points = fs::read_to_string("./tests/utm_points.txt")
        .unwrap();

    points
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (lat, rest) = line.split_once(' ').unwrap();
            let (lon, reference) = rest.split_once(' ').unwrap();
            let coord = Coordinate::new(
                Latitude::from_decimal(lat.parse().unwrap()).unwrap(),
                Longitude::from_decimal(lon.parse().unwrap()).unwrap(),
            );
            (coord, reference.trim().to_string())
        })
        .collect()
}

#[test]
fn projection_matches_references() {
    for (coord, reference) in reference_points() {
        assert_eq!(coord.format_utm(ellipsoid::WGS_84).unwrap(), reference, "{coord}");
    }
}

#[test]
fn round_trip_accuracy() {
    let errors: Vec<f64> = reference_points()
        .iter()
        .map(|(coord, reference)| {
            let back = utm::parse_utm_to_ll(ellipsoid::WGS_84, reference).unwrap();
            coord.distance_spherical(&back)
        })
        .collect();

    // Rounding to whole meters must not move a point by more than a meter
    let significant_errors = errors
        .iter()
        .filter(|dist| **dist > 1e-3);

    let sum: f64 = errors.iter().sum();
    println!("Average error: {} km", sum / errors.len() as f64);

    assert_eq!(significant_errors.count(), 0);
}

#[test]
fn references_survive_reparsing() {
    for (_, reference) in reference_points() {
        let utm: Utm = reference.parse().unwrap();
        assert_eq!(utm.to_string(), reference);

        let zone = utm.zone_string();
        let coord = utm::utm_to_ll(ellipsoid::WGS_84, utm.northing(), utm.easting(), &zone).unwrap();
        let again = coord.format_utm(ellipsoid::WGS_84).unwrap();
        let again: Utm = again.parse().unwrap();

        assert_eq!(again.zone_string(), zone);
        assert!((again.easting() - utm.easting()).abs() <= 1, "{reference}");
        assert!((again.northing() - utm.northing()).abs() <= 1, "{reference}");
    }
}

#[test]
fn decimals_are_kept_through_conversion() {
    let coord = utm::utm_to_ll(ellipsoid::WGS_84, 4511315, 585664, "18T").unwrap();
    let lat = coord.latitude().unwrap();

    assert_eq!(lat.format_decimal(5), 40.74833);
    assert!((lat.decimal() - 40.748329).abs() < 1e-6);
    assert!(lat.seconds() < 60.0);
}
