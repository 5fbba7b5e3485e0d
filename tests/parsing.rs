use geodms::{AngleElement, Coordinate, DmsFormat, Error, Latitude, Longitude, ParseValue};

#[test]
fn every_notation_names_the_same_point() {
    let expected = Coordinate::try_parse_str("40.446195, -79.948862").unwrap();

    for input in [
        "N 40° 26' 46.302\" W 79° 56' 55.903\"",
        "40° 26' 46.302\" N 79° 56' 55.903\" W",
        "N 40 26 46.302 W 79 56 55.903",
        "N40:26:46.302 W79:56:55.903",
        "N 40° 26.7717', W 79° 56.93172'",
        "40° 26.7717 -79° 56.93172",
        "40.446195 -79.948862",
        "40 deg 26' 46.302\" N, 79 deg 56' 55.903\" W",
    ] {
        let coord = Coordinate::try_parse_str(input).unwrap_or_else(|| panic!("{input}"));
        assert_eq!(coord.to_string(), expected.to_string(), "{input}");
    }
}

#[test]
fn formatted_output_parses_back() {
    let coord = Coordinate::try_parse_str("-33.8688, 151.2093").unwrap();

    let notations = [
        coord.to_string(),
        coord.format_dms(DmsFormat { direction_last: true, ..Default::default() }, ""),
        coord.format_dcmcs(true, 3, ""),
        coord.format_exif_like(""),
        coord.format_decimal(6, ""),
    ];

    for notation in notations {
        let again = Coordinate::try_parse_str(&notation).unwrap_or_else(|| panic!("{notation}"));
        assert_eq!(again.to_string(), coord.to_string(), "{notation}");
    }
}

#[test]
fn german_east() {
    let lon = Longitude::try_parse_str("O 13° 22' 39.72\"").unwrap();
    assert_eq!(lon.format_decimal(4), 13.3777);

    let coord = Coordinate::try_parse_str("N 52° 30' 59.04\" O 13° 22' 39.72\"").unwrap();
    assert_eq!(coord.format_decimal(4, ""), "52.5164, 13.3777");
}

#[test]
fn generic_from_str() {
    let lat: Latitude = geodms::from_str("S 33 52 7.68").unwrap();
    assert_eq!(lat.decimal(), -33.8688);

    let lon = geodms::from_str::<_, Longitude>("north");
    assert!(matches!(lon, Err(Error::Unparsable { kind: "longitude", .. })));

    let coord: Coordinate = "17T E 589139 N 4477813".parse().unwrap();
    assert!(coord.is_valid());
}

#[test]
fn conversions_between_values() {
    let coord = Coordinate::try_parse_str("1.5, 2.5").unwrap();

    assert_eq!(Latitude::try_parse(coord).unwrap().decimal(), 1.5);
    assert_eq!(Longitude::try_parse(&coord).unwrap().decimal(), 2.5);
    assert_eq!(Latitude::try_parse(ParseValue::Unsupported), None);
    assert_eq!(Latitude::try_parse(Some("N 1° 30' 0\"")).unwrap().decimal(), 1.5);
}

#[test]
fn element_error_message() {
    let err = Latitude::new("N", 40, "x", 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid or unknown value for a geo coordinate \"minutes\" element/part! 'x' is not of required decimal number format."
    );

    let err = geodms::Error::from(Longitude::new("Q", 1, 0, 0).unwrap_err());
    assert!(err.to_string().contains("\"direction\""));
}
