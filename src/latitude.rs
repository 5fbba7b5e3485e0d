use std::{fmt::Display, str::FromStr};

use crate::{
    element::{self, sealed::{Dms, Sealed}, AngleElement, Component, Direction, DmsFormat, ElementError},
    parser,
    value::ParseValue,
    Error, ParseCoord,
};

/// A latitude between 90° S (`-90`) and 90° N (`90`).
///
/// Serialized as its signed decimal value; deserializing goes through
/// [`Latitude::from_decimal`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "f64", try_from = "f64")
)]
pub struct Latitude(Dms);

impl Sealed for Latitude {
    fn from_dms(dms: Dms) -> Self {
        Self(dms)
    }

    fn dms(&self) -> &Dms {
        &self.0
    }
}

impl AngleElement for Latitude {
    const NAME: &'static str = "latitude";
    const MAX_DEGREES: u16 = 90;
    const POSITIVE: Direction = Direction::North;
    const NEGATIVE: Direction = Direction::South;
    const IS_LONGITUDE: bool = false;
}

impl Latitude {
    /// Creates a latitude from its direction (`N` or `S`, any case) and its
    /// degrees, minutes and seconds.
    ///
    /// Seconds below `1` are dropped and the minutes are read as fractional
    /// minutes instead (see [`Latitude::from_dm`]).
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] naming the part that is out of range or
    /// malformed.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{AngleElement, Latitude};
    ///
    /// let lat = Latitude::new("N", 40, 26, 46.302).unwrap();
    /// assert_eq!(lat.format_decimal(6), 40.446195);
    ///
    /// assert!(Latitude::new("E", 40, 26, 46.302).is_err());
    /// assert!(Latitude::new("S", 91, 0, 0).is_err());
    /// ```
    pub fn new(
        direction: &str,
        degrees: impl Into<Component>,
        minutes: impl Into<Component>,
        seconds: impl Into<Component>,
    ) -> Result<Latitude, ElementError> {
        element::construct(direction, &degrees.into(), &minutes.into(), Some(&seconds.into()))
    }

    /// Creates a latitude from degrees and (possibly fractional) minutes.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] naming the part that is out of range or
    /// malformed.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{AngleElement, Latitude};
    ///
    /// let lat = Latitude::from_dm("S", 33, 52.128).unwrap();
    /// assert_eq!((lat.minutes(), lat.seconds()), (52, 7.68));
    /// assert_eq!(lat.decimal(), -33.8688);
    /// ```
    pub fn from_dm(
        direction: &str,
        degrees: impl Into<Component>,
        minutes: impl Into<Component>,
    ) -> Result<Latitude, ElementError> {
        element::construct(direction, &degrees.into(), &minutes.into(), None)
    }

    /// Creates a latitude from a signed decimal value. Negative values are south.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if the value is not finite or outside `[-90, 90]`.
    pub fn from_decimal(value: f64) -> Result<Latitude, ElementError> {
        element::from_decimal(value)
    }

    /// Replaces the value with a signed decimal value and recomputes all parts.
    /// The latitude is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if the value is not finite or outside `[-90, 90]`.
    pub fn set_decimal(&mut self, value: f64) -> Result<(), ElementError> {
        *self = Self::from_decimal(value)?;
        Ok(())
    }

    /// Parses a latitude from any of the supported notations:
    ///
    /// * decimal values like `-33.8688` or `40,446195`
    /// * `N 40° 26' 46.302"`, `40:26:46.302 N`, `N40d26'46"`, `-40° 26' 46"`
    /// * degrees with decimal minutes like `N 40° 26.7717'`
    /// * `40 deg 26' 46.302" N`
    ///
    /// Returns `None` if no notation matches or the values are out of range.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{AngleElement, Latitude};
    ///
    /// let lat = Latitude::try_parse_str("40° 26' 46.302\" S").unwrap();
    /// assert_eq!(lat.format_decimal(6), -40.446195);
    ///
    /// assert!(Latitude::try_parse_str("E 40° 26' 46.302\"").is_none());
    /// ```
    pub fn try_parse_str(value: &str) -> Option<Latitude> {
        parser::parse_element(value)
    }

    /// Converts anything that can stand for a latitude: another latitude, the
    /// latitude of a coordinate, a number or a string.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{AngleElement, Latitude};
    ///
    /// assert_eq!(Latitude::try_parse(-12.5).unwrap().decimal(), -12.5);
    /// assert_eq!(Latitude::try_parse("N 12 30 0").unwrap().decimal(), 12.5);
    /// assert!(Latitude::try_parse(None::<&str>).is_none());
    /// ```
    pub fn try_parse<'a>(value: impl Into<ParseValue<'a>>) -> Option<Latitude> {
        match value.into() {
            ParseValue::Latitude(latitude) => Some(latitude),
            ParseValue::Coordinate(coordinate) => coordinate.latitude(),
            ParseValue::Decimal(value) => Self::from_decimal(value).ok(),
            ParseValue::Text(text) => Self::try_parse_str(&text),
            ParseValue::Longitude(longitude) => Self::try_parse_str(&longitude.to_string()),
            ParseValue::Unsupported => None,
        }
    }

    /// Whether `value` converts to a latitude with the same DMS rendering.
    pub fn equals<'a>(&self, value: impl Into<ParseValue<'a>>) -> bool {
        Self::try_parse(value).is_some_and(|other| other.to_string() == self.to_string())
    }
}

impl Display for Latitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_dms(DmsFormat::default()))
    }
}

impl ParseCoord for Latitude {
    fn parse_coord(value: &str) -> Result<Latitude, Error> {
        Self::try_parse_str(value).ok_or_else(|| Error::Unparsable {
            kind: Self::NAME,
            input: value.to_string(),
        })
    }
}

impl From<Latitude> for f64 {
    fn from(value: Latitude) -> f64 {
        value.decimal()
    }
}

impl TryFrom<f64> for Latitude {
    type Error = ElementError;

    fn try_from(value: f64) -> Result<Latitude, ElementError> {
        Self::from_decimal(value)
    }
}

impl FromStr for Latitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}
