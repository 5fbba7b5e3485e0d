use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use num::ToPrimitive;
use regex::Regex;

use crate::{
    constants::{UTM_FALSE_EASTING, UTM_FALSE_NORTHING},
    ellipsoid::Ellipsoid,
    projections::transverse_mercator::TransverseMercator,
    Coordinate, Error, Latitude, Longitude, ParseCoord, ThisOrThat,
};

pub mod zonespec {
    pub const MINUTMZONE: u8 = 1;
    pub const MAXUTMZONE: u8 = 60;
}

/// Latitude band letters from 80° S upwards, 8° each (`X` spans 12°).
const LATITUDE_BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";
/// Band letter used outside the UTM latitude limits.
pub const OUT_OF_LIMITS: char = 'Z';

lazy_static! {
    static ref UTM_REFERENCE: Regex = Regex::new(r"^(\d+)([A-Z])\s+E\s+(\d+)\s+N\s+(\d+)$").unwrap();
}

/// A UTM reference: zone number, latitude band letter and easting/northing
/// in whole meters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UtmParts"))]
pub struct Utm {
    zone: u8,
    letter: char,
    easting: i64,
    northing: i64,
}

/// Unchecked fields of a deserialized [`Utm`], validated by [`Utm::create`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UtmParts {
    zone: u8,
    letter: char,
    easting: i64,
    northing: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<UtmParts> for Utm {
    type Error = Error;

    fn try_from(parts: UtmParts) -> Result<Utm, Error> {
        Utm::create(parts.zone, parts.letter, parts.easting, parts.northing)
    }
}

impl Utm {
    /// Creates a UTM reference, checking the zone, the band letter and that
    /// easting and northing are not negative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtmCoords`] if any part is out of range.
    pub fn create(zone: u8, letter: char, easting: i64, northing: i64) -> Result<Utm, Error> {
        if !(zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone) {
            return Err(Error::InvalidUtmCoords(format!(
                "Zone {zone} not in range [{}, {}]",
                zonespec::MINUTMZONE,
                zonespec::MAXUTMZONE
            )));
        }

        let letter = letter.to_ascii_uppercase();
        if letter != OUT_OF_LIMITS && !LATITUDE_BANDS.contains(letter) {
            return Err(Error::InvalidUtmCoords(format!("'{letter}' is not a latitude band letter")));
        }

        if easting < 0 || northing < 0 {
            return Err(Error::InvalidUtmCoords(format!(
                "Easting {easting} and northing {northing} must not be negative"
            )));
        }

        Ok(Self { zone, letter, easting, northing })
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn easting(&self) -> i64 {
        self.easting
    }

    pub fn northing(&self) -> i64 {
        self.northing
    }

    /// Zone number and band letter, e.g. `17T`.
    pub fn zone_string(&self) -> String {
        format!("{}{}", self.zone, self.letter)
    }

    /// Bands `N` and above lie on the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.letter >= 'N'
    }

    /// Projects a decimal latitude/longitude pair on the named ellipsoid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEllipsoid`] for an ellipsoid name not in the
    /// catalogue and [`Error::InvalidUtmCoords`] for values outside
    /// `[-90, 90]`/`[-180, 180]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{ellipsoid, Utm};
    ///
    /// let utm = Utm::from_latlon(ellipsoid::WGS_84, 40.748333, -73.985278).unwrap();
    /// assert_eq!(utm.zone_string(), "18T");
    /// assert_eq!((utm.easting(), utm.northing()), (585664, 4511315));
    /// ```
    pub fn from_latlon(ellipsoid: &str, lat: f64, lon: f64) -> Result<Utm, Error> {
        let ellipsoid = named_ellipsoid(ellipsoid)?;
        Self::from_latlon_on(&ellipsoid, lat, lon)
    }

    /// Like [`Utm::from_latlon`] with an ellipsoid at hand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtmCoords`] for values outside
    /// `[-90, 90]`/`[-180, 180]`.
    pub fn from_latlon_on(ellipsoid: &Ellipsoid, lat: f64, lon: f64) -> Result<Utm, Error> {
        if !(-90_f64..=90_f64).contains(&lat) || !(-180_f64..=180_f64).contains(&lon) {
            return Err(Error::InvalidUtmCoords(format!(
                "Latitude {lat}/longitude {lon} outside of valid range"
            )));
        }

        let lon = normalize_longitude(lon);
        let zone = standard_zone(lat, lon);
        let (x, y) = TransverseMercator::utm(ellipsoid).from_latlon(central_meridian(zone), lat, lon);

        let easting = x + UTM_FALSE_EASTING;
        let northing = (lat < 0.).ternary(y + UTM_FALSE_NORTHING, y);

        let utm = Self {
            zone,
            letter: latitude_band_letter(lat),
            easting: to_meters(easting)?,
            northing: to_meters(northing)?,
        };
        tracing::trace!(lat, lon, %utm, ellipsoid = ellipsoid.name(), "projected to UTM");

        Ok(utm)
    }

    /// Converts back to a coordinate on the named ellipsoid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEllipsoid`] for an ellipsoid name not in the
    /// catalogue and [`Error::Element`] if the result is not a valid
    /// latitude/longitude.
    pub fn to_coordinate(&self, ellipsoid: &str) -> Result<Coordinate, Error> {
        let ellipsoid = named_ellipsoid(ellipsoid)?;
        self.to_coordinate_on(&ellipsoid)
    }

    /// Like [`Utm::to_coordinate`] with an ellipsoid at hand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Element`] if the result is not a valid
    /// latitude/longitude.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_coordinate_on(&self, ellipsoid: &Ellipsoid) -> Result<Coordinate, Error> {
        let x = self.easting as f64 - UTM_FALSE_EASTING;
        let y = self.northing as f64;
        let y = self.is_north().ternary(y, y - UTM_FALSE_NORTHING);

        let (lat, lon) = TransverseMercator::utm(ellipsoid).to_latlon(central_meridian(self.zone), x, y);
        tracing::trace!(utm = %self, lat, lon, ellipsoid = ellipsoid.name(), "unprojected from UTM");

        Ok(Coordinate::new(Latitude::from_decimal(lat)?, Longitude::from_decimal(lon)?))
    }
}

impl Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} E {} N {}", self.zone, self.letter, self.easting, self.northing)
    }
}

impl ParseCoord for Utm {
    /// Parses the `17T E 589139 N 4477813` notation. The band letter and the
    /// `E`/`N` markers must be uppercase.
    fn parse_coord(value: &str) -> Result<Utm, Error> {
        let unparsable = || Error::Unparsable {
            kind: "UTM reference",
            input: value.to_string(),
        };

        let caps = UTM_REFERENCE.captures(value.trim()).ok_or_else(unparsable)?;
        let zone = caps[1].parse().map_err(|_| unparsable())?;
        let letter = caps[2].chars().next().ok_or_else(unparsable)?;
        let easting = caps[3].parse().map_err(|_| unparsable())?;
        let northing = caps[4].parse().map_err(|_| unparsable())?;

        Utm::create(zone, letter, easting, northing)
    }
}

impl FromStr for Utm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}

/// Projects a latitude/longitude pair and renders the reference, e.g.
/// `17T E 589139 N 4477813`.
///
/// # Errors
///
/// See [`Utm::from_latlon`].
pub fn ll_to_utm(ellipsoid: &str, lat: f64, lon: f64) -> Result<String, Error> {
    Utm::from_latlon(ellipsoid, lat, lon).map(|utm| utm.to_string())
}

/// Converts a northing, an easting and a zone like `17T` (any case) back to a
/// coordinate.
///
/// # Errors
///
/// Returns [`Error::InvalidUtmCoords`] for a malformed zone,
/// [`Error::UnknownEllipsoid`] for an ellipsoid name not in the catalogue and
/// [`Error::Element`] if the result is not a valid latitude/longitude.
///
/// # Usage
///
/// ```
/// use geodms::{ellipsoid, utm, AngleElement};
///
/// let coord = utm::utm_to_ll(ellipsoid::WGS_84, 6250948, 334369, "56h").unwrap();
/// assert_eq!(coord.latitude().unwrap().format_decimal(4), -33.8688);
/// assert_eq!(coord.longitude().unwrap().format_decimal(4), 151.2093);
/// ```
pub fn utm_to_ll(ellipsoid: &str, northing: i64, easting: i64, zone: &str) -> Result<Coordinate, Error> {
    let ellipsoid = named_ellipsoid(ellipsoid)?;

    let zone = zone.trim();
    let bad_zone = || Error::InvalidUtmCoords(format!("'{zone}' is not a zone like '17T'"));
    let letter = zone.chars().last().ok_or_else(bad_zone)?;
    let number = zone[..zone.len() - letter.len_utf8()].parse().map_err(|_| bad_zone())?;

    Utm::create(number, letter, easting, northing)?.to_coordinate_on(&ellipsoid)
}

/// Parses a UTM reference like `17T E 589139 N 4477813` and converts it to a
/// coordinate.
///
/// # Errors
///
/// Returns [`Error::Unparsable`] if the text is not a UTM reference, otherwise
/// see [`utm_to_ll`].
pub fn parse_utm_to_ll(ellipsoid: &str, value: &str) -> Result<Coordinate, Error> {
    let ellipsoid = named_ellipsoid(ellipsoid)?;
    Utm::parse_coord(value)?.to_coordinate_on(&ellipsoid)
}

fn named_ellipsoid(name: &str) -> Result<Ellipsoid, Error> {
    Ellipsoid::named(name).ok_or_else(|| Error::UnknownEllipsoid(name.to_string()))
}

fn to_meters(value: f64) -> Result<i64, Error> {
    value
        .round()
        .to_i64()
        .ok_or_else(|| Error::InvalidUtmCoords(format!("{value} is not a representable distance")))
}

pub(crate) fn central_meridian(zone: u8) -> f64 {
    6.0 * f64::from(zone) - 183.
}

/// Folds 180° onto -180° so every longitude falls into a zone.
fn normalize_longitude(lon: f64) -> f64 {
    (lon + 180.) - ((lon + 180.) / 360.).trunc() * 360. - 180.
}

/// Zone of a position, including the Norway and Svalbard exceptions.
fn standard_zone(lat: f64, lon: f64) -> u8 {
    // The Norway exception
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }

    // The Svalbard exception
    if (72.0..84.0).contains(&lat) {
        match lon {
            lon if (0.0..9.0).contains(&lon) => return 31,
            lon if (9.0..22.0).contains(&lon) => return 33,
            lon if (22.0..33.0).contains(&lon) => return 35,
            lon if (33.0..42.0).contains(&lon) => return 37,
            _ => {}
        }
    }

    ((lon + 180.) / 6.)
        .trunc()
        .to_u8()
        .map_or(zonespec::MINUTMZONE, |zone| zone + 1)
        .clamp(zonespec::MINUTMZONE, zonespec::MAXUTMZONE)
}

/// Band letter of a latitude, or [`OUT_OF_LIMITS`] outside 80° S to 84° N.
pub fn latitude_band_letter(lat: f64) -> char {
    if !(-80_f64..=84_f64).contains(&lat) {
        return OUT_OF_LIMITS;
    }

    let index = ((lat + 80.) / 8.).floor().to_usize().unwrap_or(0).min(LATITUDE_BANDS.len() - 1);
    LATITUDE_BANDS.chars().nth(index).unwrap_or(OUT_OF_LIMITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ellipsoid, AngleElement};

    fn utm(lat: f64, lon: f64) -> String {
        ll_to_utm(ellipsoid::WGS_84, lat, lon).unwrap()
    }

    #[test]
    fn known_references() {
        assert_eq!(utm(40.446195, -79.948862), "17T E 589139 N 4477813");
        assert_eq!(utm(-33.8688, 151.2093), "56H E 334369 N 6250948");
        assert_eq!(utm(51.0, 13.0), "33U E 359667 N 5651729");
        assert_eq!(utm(0.0, 0.0), "31N E 166021 N 0");
        assert_eq!(utm(-0.5, -0.5), "30M E 778266 N 9944682");
    }

    #[test]
    fn zone_exceptions() {
        assert_eq!(utm(60.0, 5.0), "32V E 276980 N 6658157");
        assert_eq!(utm(78.0, 15.0), "33X E 500000 N 8658370");
        assert_eq!(standard_zone(78.0, 8.0), 31);
        assert_eq!(standard_zone(78.0, 40.0), 37);
        assert_eq!(standard_zone(78.0, 9.0), 33);
        assert_eq!(standard_zone(78.0, 21.5), 33);
        assert_eq!(standard_zone(78.0, 22.0), 35);
        assert_eq!(standard_zone(50.0, 5.0), 31);
        assert_eq!(standard_zone(0.0, 180.0 - 1e-9), 60);
        assert_eq!(standard_zone(0.0, normalize_longitude(180.0)), 1);
    }

    #[test]
    fn band_letters() {
        assert_eq!(latitude_band_letter(-80.0), 'C');
        assert_eq!(latitude_band_letter(0.0), 'N');
        assert_eq!(latitude_band_letter(-0.1), 'M');
        assert_eq!(latitude_band_letter(83.9), 'X');
        assert_eq!(latitude_band_letter(84.0), 'X');
        assert_eq!(latitude_band_letter(85.0), 'Z');
        assert_eq!(latitude_band_letter(-81.0), 'Z');
    }

    #[test]
    fn other_ellipsoid() {
        assert_eq!(
            ll_to_utm(ellipsoid::CLARKE_1866, 40.446195, -79.948862).unwrap(),
            "17T E 589141 N 4477602"
        );
    }

    #[test]
    fn unknown_ellipsoid() {
        assert!(matches!(
            ll_to_utm("Flat Earth", 0.0, 0.0),
            Err(Error::UnknownEllipsoid(name)) if name == "Flat Earth"
        ));
        assert!(matches!(
            parse_utm_to_ll("Flat Earth", "17T E 589139 N 4477813"),
            Err(Error::UnknownEllipsoid(_))
        ));
    }

    #[test]
    fn inverse() {
        let coord = utm_to_ll(ellipsoid::WGS_84, 4477813, 589139, "17t").unwrap();
        assert!((coord.latitude().unwrap().decimal() - 40.446196).abs() < 1e-5);
        assert!((coord.longitude().unwrap().decimal() + 79.948861).abs() < 1e-5);

        let south = utm_to_ll(ellipsoid::WGS_84, 9944682, 778266, "30M").unwrap();
        assert!((south.latitude().unwrap().decimal() + 0.5).abs() < 1e-5);
        assert!((south.longitude().unwrap().decimal() + 0.5).abs() < 1e-5);
    }

    #[test]
    fn equator_band_is_north() {
        let coord = parse_utm_to_ll(ellipsoid::WGS_84, "31N E 166021 N 0").unwrap();
        assert!(coord.latitude().unwrap().decimal().abs() < 1e-6);
        assert!(coord.longitude().unwrap().decimal().abs() < 1e-4);
    }

    #[test]
    fn bad_zones() {
        assert!(matches!(utm_to_ll(ellipsoid::WGS_84, 0, 500000, "T"), Err(Error::InvalidUtmCoords(_))));
        assert!(matches!(utm_to_ll(ellipsoid::WGS_84, 0, 500000, ""), Err(Error::InvalidUtmCoords(_))));
        assert!(matches!(utm_to_ll(ellipsoid::WGS_84, 0, 500000, "61N"), Err(Error::InvalidUtmCoords(_))));
        assert!(matches!(utm_to_ll(ellipsoid::WGS_84, 0, 500000, "17I"), Err(Error::InvalidUtmCoords(_))));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        let parsed: Utm = "17T E 589139 N 4477813".parse().unwrap();
        assert_eq!(parsed.zone(), 17);
        assert_eq!(parsed.letter(), 'T');
        assert_eq!(parsed.to_string(), "17T E 589139 N 4477813");

        assert!("17t E 589139 N 4477813".parse::<Utm>().is_err());
        assert!("17T e 589139 n 4477813".parse::<Utm>().is_err());
        assert!("17T E 589139".parse::<Utm>().is_err());
    }

    #[test]
    fn out_of_range_input() {
        assert!(matches!(ll_to_utm(ellipsoid::WGS_84, 91.0, 0.0), Err(Error::InvalidUtmCoords(_))));
        assert!(matches!(ll_to_utm(ellipsoid::WGS_84, 0.0, f64::NAN), Err(Error::InvalidUtmCoords(_))));
    }
}
