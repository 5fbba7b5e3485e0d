use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    constants::{DISTANCE_DEG2RAD, DISTANCE_EQUATORIAL_RADIUS_KM, DISTANCE_FLATTENING, DISTANCE_MEAN_RADIUS_KM},
    ellipsoid,
    element::{AngleElement, Component, DmFormat, DmsFormat},
    utility::{is_decimal, parse_decimal, round_to},
    utm,
    value::ParseValue,
    Error, Latitude, Longitude, ParseCoord,
};

lazy_static! {
    static ref LAT_MARKED: Regex = Regex::new(r"(?i)^(?:[NS].+|.+[NS])$").unwrap();
    static ref LON_MARKED: Regex = Regex::new(r"(?i)^(?:[EWO].+|.+[EWO])$").unwrap();
    static ref NOT_DEGREES: Regex = Regex::new(r"[^\d-]").unwrap();
    static ref NOT_MINUTES: Regex = Regex::new(r"[^\d.]").unwrap();
}

/// A pair of a latitude and a longitude.
///
/// Either element may be missing. Such a coordinate is not
/// [valid](Coordinate::is_valid): it formats to empty strings and measures no
/// distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    latitude: Option<Latitude>,
    longitude: Option<Longitude>,
}

impl Coordinate {
    pub fn new(latitude: Latitude, longitude: Longitude) -> Coordinate {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn from_parts(latitude: Option<Latitude>, longitude: Option<Longitude>) -> Coordinate {
        Self { latitude, longitude }
    }

    /// Builds a coordinate from two loosely typed values. A value that does
    /// not convert leaves its element empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedElement`] if a longitude is passed as the
    /// latitude or the other way around.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::Coordinate;
    ///
    /// let coord = Coordinate::from_values("N 51° 0' 31.27\"", 13.3777).unwrap();
    /// assert!(coord.is_valid());
    ///
    /// let partial = Coordinate::from_values("N 51° 0' 31.27\"", "nowhere").unwrap();
    /// assert!(!partial.is_valid());
    /// ```
    pub fn from_values<'a, 'b>(
        latitude: impl Into<ParseValue<'a>>,
        longitude: impl Into<ParseValue<'b>>,
    ) -> Result<Coordinate, Error> {
        let latitude = match latitude.into() {
            ParseValue::Longitude(_) => {
                return Err(Error::MismatchedElement { expected: Latitude::NAME, found: Longitude::NAME })
            }
            value => Latitude::try_parse(value),
        };
        let longitude = match longitude.into() {
            ParseValue::Latitude(_) => {
                return Err(Error::MismatchedElement { expected: Longitude::NAME, found: Latitude::NAME })
            }
            value => Longitude::try_parse(value),
        };

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> Option<Latitude> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<Longitude> {
        self.longitude
    }

    pub fn set_latitude(&mut self, latitude: Option<Latitude>) {
        self.latitude = latitude;
    }

    pub fn set_longitude(&mut self, longitude: Option<Longitude>) {
        self.longitude = longitude;
    }

    /// Both elements are present.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    fn elements(&self) -> Option<(Latitude, Longitude)> {
        self.latitude.zip(self.longitude)
    }

    /// Parses a coordinate from a string holding both elements.
    ///
    /// Recognized are a UTM reference (`17T E 589139 N 4477813`), two elements
    /// separated by `", "` or a single space, elements that are themselves
    /// written with spaces as long as they carry direction letters, and the
    /// four token form `40° 26.7717 -79° 56.93172`.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{AngleElement, Coordinate};
    ///
    /// let coord = Coordinate::try_parse_str("40.446195, -79.948862").unwrap();
    /// assert_eq!(coord.longitude().unwrap().decimal(), -79.948862);
    ///
    /// let coord = Coordinate::try_parse_str("N 40 26 46.302 W 79 56 55.903").unwrap();
    /// assert_eq!(coord.latitude().unwrap().format_decimal(6), 40.446195);
    /// ```
    pub fn try_parse_str(value: &str) -> Option<Coordinate> {
        if let Ok(coordinate) = utm::parse_utm_to_ll(ellipsoid::WGS_84, value) {
            tracing::trace!(value, "coordinate given as UTM reference");
            return Some(coordinate);
        }

        let pair: Vec<&str> = value.split(", ").collect();
        if let [first, second] = pair[..] {
            if let Some((latitude, longitude)) = split_pair(first, second) {
                tracing::trace!(value, "coordinate given as comma separated pair");
                return Self::from_texts(&latitude, &longitude);
            }
        }

        let tokens: Vec<&str> = value.split_whitespace().collect();
        if let [first, second] = tokens[..] {
            let (latitude, longitude) = split_pair(first, second)?;
            tracing::trace!(value, "coordinate given as space separated pair");
            return Self::from_texts(&latitude, &longitude);
        }

        if tokens.len() >= 3 {
            if let Some((latitude, longitude)) = split_on_letters(&tokens) {
                tracing::trace!(value, "coordinate split on direction letters");
                return Self::from_texts(&latitude, &longitude);
            }
        }

        if tokens.len() == 4 {
            tracing::trace!(value, "coordinate given as degrees and minutes");
            return from_degree_minute_tokens(&tokens);
        }

        tracing::debug!(value, "no coordinate notation matches");
        None
    }

    /// Converts anything that can stand for a coordinate.
    pub fn try_parse<'a>(value: impl Into<ParseValue<'a>>) -> Option<Coordinate> {
        match value.into() {
            ParseValue::Coordinate(coordinate) => coordinate.is_valid().then_some(coordinate),
            ParseValue::Text(text) => Self::try_parse_str(&text),
            ParseValue::Latitude(latitude) => Self::try_parse_str(&latitude.to_string()),
            ParseValue::Longitude(longitude) => Self::try_parse_str(&longitude.to_string()),
            ParseValue::Decimal(value) => Self::try_parse_str(&value.to_string()),
            ParseValue::Unsupported => None,
        }
    }

    fn from_texts(latitude: &str, longitude: &str) -> Option<Coordinate> {
        let coordinate = Self::from_parts(Latitude::try_parse_str(latitude), Longitude::try_parse_str(longitude));
        coordinate.is_valid().then_some(coordinate)
    }

    /// Both elements as DMS, e.g. `N 40° 26' 46.302" W 79° 56' 55.903"`.
    /// An empty separator means a single space.
    pub fn format_dms(&self, format: DmsFormat, separator: &str) -> String {
        self.join(separator, " ", |lat, lon| (lat.format_dms(format), lon.format_dms(format)))
    }

    /// Both elements in colon notation, e.g. `N 40:26:46.302 W 79:56:55.903`.
    pub fn format_dcmcs(&self, compact: bool, seconds_precision: u32, separator: &str) -> String {
        self.join(separator, " ", |lat, lon| {
            (
                lat.format_dcmcs(compact, seconds_precision),
                lon.format_dcmcs(compact, seconds_precision),
            )
        })
    }

    /// Both elements with decimal minutes, e.g. `N 40° 26.7717' W 79° 56.93172'`.
    pub fn format_dm(&self, format: DmFormat, separator: &str) -> String {
        self.join(separator, " ", |lat, lon| (lat.format_dm(format), lon.format_dm(format)))
    }

    /// Both elements with decimal minutes and signs, e.g.
    /// `40° 26.7717, -79° 56.93172`. An empty separator means `", "`.
    pub fn format_without_direction(&self, format: DmFormat, separator: &str) -> String {
        self.join(separator, ", ", |lat, lon| {
            (lat.format_without_direction(format), lon.format_without_direction(format))
        })
    }

    /// Both elements as rounded decimal values, e.g. `40.446195, -79.948862`.
    pub fn format_decimal(&self, precision: u32, separator: &str) -> String {
        self.join(separator, ", ", |lat, lon| {
            (
                lat.format_decimal(precision).to_string(),
                lon.format_decimal(precision).to_string(),
            )
        })
    }

    /// Both elements in EXIF style, e.g. `40 deg 26' 46.302" N, 79 deg 56' 55.903" W`.
    pub fn format_exif_like(&self, separator: &str) -> String {
        self.join(separator, ", ", |lat, lon| (lat.format_exif_like(), lon.format_exif_like()))
    }

    /// The UTM reference of this coordinate, e.g. `17T E 589139 N 4477813`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteCoordinate`] if an element is missing and
    /// [`Error::UnknownEllipsoid`] for an ellipsoid name not in the catalogue.
    pub fn format_utm(&self, ellipsoid: &str) -> Result<String, Error> {
        let (latitude, longitude) = self.elements().ok_or(Error::IncompleteCoordinate)?;
        utm::ll_to_utm(ellipsoid, latitude.decimal(), longitude.decimal())
    }

    fn join<F>(&self, separator: &str, default_separator: &str, render: F) -> String
    where
        F: Fn(&Latitude, &Longitude) -> (String, String),
    {
        let Some((latitude, longitude)) = self.elements() else {
            return String::new();
        };
        let separator = if separator.is_empty() { default_separator } else { separator };
        let (latitude, longitude) = render(&latitude, &longitude);
        format!("{latitude}{separator}{longitude}")
    }

    /// Distance in km on the WGS-84 ellipsoid (Andoyer-Lambert), rounded to
    /// meters. `0` if either coordinate is incomplete or both are equal.
    /// Antipodal points are half the equatorial circumference apart.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::Coordinate;
    ///
    /// let berlin = Coordinate::try_parse_str("52.5164, 13.3777").unwrap();
    /// let paris = Coordinate::try_parse_str("48.8583, 2.2945").unwrap();
    /// assert_eq!(berlin.distance_wgs84(&paris), 881.34);
    /// ```
    pub fn distance_wgs84(&self, other: &Coordinate) -> f64 {
        let (Some((lat1, lon1)), Some((lat2, lon2))) = (self.elements(), other.elements()) else {
            return 0.0;
        };
        let (lat1, lon1, lat2, lon2) = (lat1.decimal(), lon1.decimal(), lat2.decimal(), lon2.decimal());

        let f = round_to((lat1 + lat2) / 2.0, 8) * DISTANCE_DEG2RAD;
        let g = round_to((lat1 - lat2) / 2.0, 9) * DISTANCE_DEG2RAD;
        let l = round_to((lon1 - lon2) / 2.0, 8) * DISTANCE_DEG2RAD;

        let s = round_to(
            g.sin().powi(2) * l.cos().powi(2) + f.cos().powi(2) * l.sin().powi(2),
            9,
        );
        let c = round_to(
            g.cos().powi(2) * l.cos().powi(2) + f.sin().powi(2) * l.sin().powi(2),
            9,
        );
        if c == 0.0 {
            // Antipodal points: half the equatorial circumference
            return round_to(std::f64::consts::PI * DISTANCE_EQUATORIAL_RADIUS_KM, 3);
        }

        let w = round_to((s / c).sqrt().atan(), 12);
        if w == 0.0 {
            return 0.0;
        }

        let d = round_to(2.0 * w * DISTANCE_EQUATORIAL_RADIUS_KM, 9);
        let r = round_to((s * c).sqrt() / w, 8);
        let h1 = round_to((3.0 * r - 1.0) / (2.0 * c), 9);
        let h2 = round_to((3.0 * r + 1.0) / (2.0 * s), 9);

        round_to(
            d * (1.0 + DISTANCE_FLATTENING * h1 * f.sin().powi(2) * g.cos().powi(2)
                - DISTANCE_FLATTENING * h2 * f.cos().powi(2) * g.sin().powi(2)),
            3,
        )
    }

    /// Great-circle distance in km on a sphere of radius 6370 km, rounded to
    /// meters. `0` if either coordinate is incomplete.
    pub fn distance_spherical(&self, other: &Coordinate) -> f64 {
        let (Some((lat1, lon1)), Some((lat2, lon2))) = (self.elements(), other.elements()) else {
            return 0.0;
        };
        let lat1 = lat1.decimal() * DISTANCE_DEG2RAD;
        let lat2 = lat2.decimal() * DISTANCE_DEG2RAD;
        let delta_lon = (lon2.decimal() - lon1.decimal()) * DISTANCE_DEG2RAD;

        let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();
        round_to(cos_angle.clamp(-1.0, 1.0).acos() * DISTANCE_MEAN_RADIUS_KM, 3)
    }
}

/// Decides which of two tokens is the latitude: the one carrying N/S, the
/// other one of a token carrying E/W/O, or the first if the second is a plain
/// number.
fn split_pair(first: &str, second: &str) -> Option<(String, String)> {
    if LAT_MARKED.is_match(first) {
        Some((first.to_string(), second.to_string()))
    } else if LON_MARKED.is_match(first) {
        Some((second.to_string(), first.to_string()))
    } else if is_decimal(second, true) {
        Some((first.trim_end_matches(|c: char| c == ' ' || c == ',').to_string(), second.to_string()))
    } else {
        None
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Marker {
    Latitude,
    Longitude,
}

fn marker(token: &str) -> Option<Marker> {
    match token {
        "N" | "S" | "n" | "s" => Some(Marker::Latitude),
        "E" | "W" | "O" | "e" | "w" | "o" => Some(Marker::Longitude),
        _ => None,
    }
}

/// Splits tokens like `N 40 26 46 W 79 56 55` or `40 26 46 N 79 56 55 W`
/// where each element is marked by a lone direction letter.
fn split_on_letters(tokens: &[&str]) -> Option<(String, String)> {
    let last = tokens.len() - 1;

    let (near, far, near_kind) = if let Some(kind) = marker(tokens[0]) {
        let split = (1..tokens.len()).find(|&idx| marker(tokens[idx]).is_some_and(|other| other != kind))?;
        if split == last {
            return None;
        }
        (&tokens[..split], &tokens[split..], kind)
    } else if let Some(kind) = marker(tokens[last]) {
        let split = (0..last).rev().find(|&idx| marker(tokens[idx]).is_some_and(|other| other != kind))?;
        if split == 0 {
            return None;
        }
        (&tokens[split + 1..], &tokens[..=split], kind)
    } else {
        return None;
    };

    let (near, far) = (near.join(" "), far.join(" "));
    Some(match near_kind {
        Marker::Latitude => (near, far),
        Marker::Longitude => (far, near),
    })
}

/// `40° 26.7717 -79° 56.93172`: degrees and decimal minutes for each element,
/// a leading `-` for south and west.
fn from_degree_minute_tokens(tokens: &[&str]) -> Option<Coordinate> {
    let degrees = |token: &str| {
        let digits = NOT_DEGREES.replace_all(token, "").into_owned();
        match digits.strip_prefix('-') {
            Some(magnitude) => Some((false, magnitude.to_string())),
            None if digits.is_empty() => None,
            None => Some((true, digits)),
        }
    };
    let minutes = |token: &str| {
        let digits = NOT_MINUTES.replace_all(token, "");
        if digits.is_empty() { Some(0.0) } else { parse_decimal(&digits) }
    };

    let (north, lat_degrees) = degrees(tokens[0])?;
    let lat_minutes = minutes(tokens[1])?;
    let (east, lon_degrees) = degrees(tokens[2])?;
    let lon_minutes = minutes(tokens[3])?;

    let latitude = Latitude::from_dm(
        if north { "N" } else { "S" },
        Component::Text(lat_degrees),
        Component::Decimal(lat_minutes),
    );
    let longitude = Longitude::from_dm(
        if east { "E" } else { "W" },
        Component::Text(lon_degrees),
        Component::Decimal(lon_minutes),
    );

    match (latitude, longitude) {
        (Ok(latitude), Ok(longitude)) => Some(Coordinate::new(latitude, longitude)),
        (Err(error), _) | (_, Err(error)) => {
            tracing::debug!(%error, "rejecting degree/minute coordinate");
            None
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_dms(DmsFormat::default(), " "))
    }
}

impl ParseCoord for Coordinate {
    fn parse_coord(value: &str) -> Result<Coordinate, Error> {
        Self::try_parse_str(value).ok_or_else(|| Error::Unparsable {
            kind: "coordinate",
            input: value.to_string(),
        })
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}
