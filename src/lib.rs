//! Geographic coordinates as normalized degree-minute-second values.
//!
//! [`Latitude`] and [`Longitude`] are immutable value objects that keep their
//! signed decimal form and their direction/degrees/minutes/seconds form in
//! sync. Both can be parsed from a wide range of loosely written notations,
//! combined into a [`Coordinate`], formatted back into several canonical
//! notations and projected to/from [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system).
//!
//! ```
//! use geodms::{AngleElement, Coordinate};
//!
//! let coord = Coordinate::try_parse_str("N 40° 26' 46.302\" W 79° 56' 55.903\"").unwrap();
//!
//! assert_eq!(coord.latitude().unwrap().format_decimal(6), 40.446195);
//! assert_eq!(coord.format_utm("WGS-84").unwrap(), "17T E 589139 N 4477813");
//! ```
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod coordinate;
pub mod element;
pub mod ellipsoid;
pub mod latitude;
pub mod longitude;
pub mod utm;
pub mod utility;
pub mod value;

pub use coordinate::Coordinate;
pub use element::{AngleElement, Component, Direction, DmFormat, DmsFormat, ElementError, ErrorKind, DEFAULT_DECIMAL_PRECISION};
pub use ellipsoid::Ellipsoid;
pub use latitude::Latitude;
pub use longitude::Longitude;
pub use utm::Utm;
pub use value::{AssociatedString, ParseValue};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod parser;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error("Ellipsoid '{0}' is not a known reference ellipsoid")]
    UnknownEllipsoid(String),
    #[error("UTM coords are invalid: {0}")]
    InvalidUtmCoords(String),
    #[error("Could not parse a {kind} from '{input}'")]
    Unparsable {
        kind: &'static str,
        input: String,
    },
    #[error("Can not use a {found} as {expected}!")]
    MismatchedElement {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Coordinate is missing its latitude or longitude")]
    IncompleteCoordinate,
}

pub trait ParseCoord {
    /// Parses a coordinate (or one of its elements) from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unparsable`] if no supported notation matches.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Returns [`Error::Unparsable`] if no supported notation matches.
///
/// # Usage
///
/// ```
/// use geodms::{AngleElement, Latitude};
///
/// let lat: Latitude = geodms::from_str("N 40:26:46.302").unwrap();
/// assert_eq!(lat.format_decimal(6), 40.446195);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
