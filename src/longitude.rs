use std::{fmt::Display, str::FromStr};

use crate::{
    element::{self, sealed::{Dms, Sealed}, AngleElement, Component, Direction, DmsFormat, ElementError},
    parser,
    value::ParseValue,
    Error, ParseCoord,
};

/// A longitude between 180° W (`-180`) and 180° E (`180`).
///
/// Serialized as its signed decimal value; deserializing goes through
/// [`Longitude::from_decimal`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "f64", try_from = "f64")
)]
pub struct Longitude(Dms);

impl Sealed for Longitude {
    fn from_dms(dms: Dms) -> Self {
        Self(dms)
    }

    fn dms(&self) -> &Dms {
        &self.0
    }
}

impl AngleElement for Longitude {
    const NAME: &'static str = "longitude";
    const MAX_DEGREES: u16 = 180;
    const POSITIVE: Direction = Direction::East;
    const NEGATIVE: Direction = Direction::West;
    const IS_LONGITUDE: bool = true;
}

impl Longitude {
    /// Creates a longitude from its direction (`E`, `W` or the German `O`)
    /// and its degrees, minutes and seconds.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] naming the part that is out of range or
    /// malformed.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{AngleElement, Direction, Longitude};
    ///
    /// let lon = Longitude::new("O", 13, 22, 39.72).unwrap();
    /// assert_eq!(lon.direction(), Direction::East);
    /// assert_eq!(lon.format_decimal(4), 13.3777);
    /// ```
    pub fn new(
        direction: &str,
        degrees: impl Into<Component>,
        minutes: impl Into<Component>,
        seconds: impl Into<Component>,
    ) -> Result<Longitude, ElementError> {
        element::construct(direction, &degrees.into(), &minutes.into(), Some(&seconds.into()))
    }

    /// Creates a longitude from degrees and (possibly fractional) minutes.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] naming the part that is out of range or
    /// malformed.
    pub fn from_dm(
        direction: &str,
        degrees: impl Into<Component>,
        minutes: impl Into<Component>,
    ) -> Result<Longitude, ElementError> {
        element::construct(direction, &degrees.into(), &minutes.into(), None)
    }

    /// Creates a longitude from a signed decimal value. Negative values are west.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if the value is not finite or outside `[-180, 180]`.
    pub fn from_decimal(value: f64) -> Result<Longitude, ElementError> {
        element::from_decimal(value)
    }

    /// Replaces the value with a signed decimal value and recomputes all parts.
    /// The longitude is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if the value is not finite or outside `[-180, 180]`.
    pub fn set_decimal(&mut self, value: f64) -> Result<(), ElementError> {
        *self = Self::from_decimal(value)?;
        Ok(())
    }

    /// Parses a longitude from the same notations as
    /// [`Latitude::try_parse_str`](crate::Latitude::try_parse_str), using
    /// `E`, `W` or `O` as direction letters.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{AngleElement, Longitude};
    ///
    /// let lon = Longitude::try_parse_str("W 79° 56.93172'").unwrap();
    /// assert_eq!(lon.format_decimal(6), -79.948862);
    /// ```
    pub fn try_parse_str(value: &str) -> Option<Longitude> {
        parser::parse_element(value)
    }

    /// Converts anything that can stand for a longitude: another longitude,
    /// the longitude of a coordinate, a number or a string.
    pub fn try_parse<'a>(value: impl Into<ParseValue<'a>>) -> Option<Longitude> {
        match value.into() {
            ParseValue::Longitude(longitude) => Some(longitude),
            ParseValue::Coordinate(coordinate) => coordinate.longitude(),
            ParseValue::Decimal(value) => Self::from_decimal(value).ok(),
            ParseValue::Text(text) => Self::try_parse_str(&text),
            ParseValue::Latitude(latitude) => Self::try_parse_str(&latitude.to_string()),
            ParseValue::Unsupported => None,
        }
    }

    /// Whether `value` converts to a longitude with the same DMS rendering.
    pub fn equals<'a>(&self, value: impl Into<ParseValue<'a>>) -> bool {
        Self::try_parse(value).is_some_and(|other| other.to_string() == self.to_string())
    }
}

impl Display for Longitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_dms(DmsFormat::default()))
    }
}

impl ParseCoord for Longitude {
    fn parse_coord(value: &str) -> Result<Longitude, Error> {
        Self::try_parse_str(value).ok_or_else(|| Error::Unparsable {
            kind: Self::NAME,
            input: value.to_string(),
        })
    }
}

impl From<Longitude> for f64 {
    fn from(value: Longitude) -> f64 {
        value.decimal()
    }
}

impl TryFrom<f64> for Longitude {
    type Error = ElementError;

    fn try_from(value: f64) -> Result<Longitude, ElementError> {
        Self::from_decimal(value)
    }
}

impl FromStr for Longitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DmFormat, ErrorKind, Latitude};

    #[test]
    fn dms_parts() {
        let lon = Longitude::new("W", 79, 56, 55.903).unwrap();
        assert_eq!(lon.direction(), Direction::West);
        assert_eq!((lon.degrees(), lon.minutes(), lon.seconds()), (79, 56, 55.903));
        assert_eq!(lon.format_decimal(6), -79.948862);
    }

    #[test]
    fn bounds() {
        assert!(Longitude::new("E", 180, 0, 0).is_ok());
        assert_eq!(Longitude::new("E", 180, 0, 1).unwrap_err().kind(), ErrorKind::Degrees);
        assert_eq!(Longitude::new("N", 10, 0, 0).unwrap_err().kind(), ErrorKind::Direction);
        assert!(Longitude::from_decimal(-180.0).is_ok());
        assert!(Longitude::from_decimal(-180.5).is_err());
    }

    #[test]
    fn fractional_minutes() {
        let lon = Longitude::from_dm("W", 79, "56.93172").unwrap();
        assert_eq!((lon.minutes(), lon.seconds()), (56, 55.9032));
        assert_eq!(lon.format_dm(DmFormat::default()), "W 79° 56.93172'");
        assert_eq!(
            lon.format_without_direction(DmFormat::default()),
            "-79° 56.93172'"
        );
    }

    #[test]
    fn latitude_is_not_a_longitude() {
        let lat = Latitude::from_decimal(10.0).unwrap();
        assert!(Longitude::try_parse(lat).is_none());
    }

    #[test]
    fn parse_from_number_and_text() {
        assert_eq!(Longitude::try_parse(151.2093).unwrap().decimal(), 151.2093);
        assert_eq!(Longitude::try_parse(String::from("E 10:30:00")).unwrap().decimal(), 10.5);
        assert!(Longitude::try_parse(181).is_none());
    }

    #[test]
    fn exif_like() {
        let lon = Longitude::from_decimal(-0.5).unwrap();
        assert_eq!(lon.format_exif_like(), "0 deg 30' 0\" W");
    }
}
