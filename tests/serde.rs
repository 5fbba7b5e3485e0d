#![cfg(feature = "serde")]

use geodms::{AngleElement, Latitude, Longitude, Utm};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Place {
    lat: Latitude,
    lon: Longitude,
    utm: Utm,
}

#[test]
fn values_round_trip() {
    let place = Place {
        lat: Latitude::new("N", 40, 26, 46.302).unwrap(),
        lon: Longitude::new("W", 79, 56, 55.903).unwrap(),
        utm: "17T E 589139 N 4477813".parse().unwrap(),
    };

    let text = toml::to_string(&place).unwrap();
    let again: Place = toml::from_str(&text).unwrap();

    assert_eq!(again.lat.to_string(), place.lat.to_string());
    assert_eq!(again.lon.to_string(), place.lon.to_string());
    assert_eq!(again.lat.decimal(), place.lat.decimal());
    assert_eq!(again.utm, place.utm);
}

#[test]
fn elements_are_plain_decimals() {
    let place: Place = toml::from_str(
        r#"
        lat = -33.8688
        lon = 151.2093

        [utm]
        zone = 56
        letter = "H"
        easting = 334369
        northing = 6250948
        "#,
    )
    .unwrap();

    assert_eq!(place.lat.to_string(), "S 33° 52' 7.68\"");
    assert_eq!(place.lon.decimal(), 151.2093);
    assert_eq!(place.utm.to_string(), "56H E 334369 N 6250948");
}

#[test]
fn invalid_values_are_rejected() {
    let utm = r#"
        [utm]
        zone = 17
        letter = "T"
        easting = 589139
        northing = 4477813
    "#;

    assert!(toml::from_str::<Place>(&format!("lat = 500.0\nlon = 0.0\n{utm}")).is_err());
    assert!(toml::from_str::<Place>(&format!("lat = 0.0\nlon = -180.5\n{utm}")).is_err());

    for (zone, letter, easting) in [(0, "T", 589139), (61, "T", 589139), (17, "I", 589139), (17, "T", -1)] {
        let text = format!(
            "lat = 0.0\nlon = 0.0\n[utm]\nzone = {zone}\nletter = \"{letter}\"\neasting = {easting}\nnorthing = 4477813\n"
        );
        assert!(toml::from_str::<Place>(&text).is_err(), "{text}");
    }
}
