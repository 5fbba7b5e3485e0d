//! The degree/minute/second representation shared by [`Latitude`](crate::Latitude)
//! and [`Longitude`](crate::Longitude).
//!
//! Every element keeps two views of the same angle in sync: the signed
//! [`decimal`](AngleElement::decimal) value and the unsigned
//! direction/degrees/minutes/seconds parts. Elements only come into existence
//! through a validating constructor, so an inconsistent element cannot exist.

use std::fmt;

use num::{Integer, ToPrimitive};
use thiserror::Error;

use crate::{
    utility::{dms, format_rounded, leading_int, parse_decimal, round_to, split_decimal, GeoMath},
    ThisOrThat,
};

const MINUTES_PER_DEGREE: u64 = 60;

/// Decimal places commonly used with [`AngleElement::format_decimal`].
pub const DEFAULT_DECIMAL_PRECISION: u32 = 8;

/// A cardinal direction. Latitudes use north/south, longitudes east/west.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The single letter used in the textual notations.
    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    /// Whether the direction contributes a positive decimal value (N, E).
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::North | Direction::East)
    }

    /// Maps a direction letter (any case) to a direction. `O` (German "Ost")
    /// is an alias for east.
    pub fn from_symbol(symbol: char) -> Option<Direction> {
        match symbol.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' | 'O' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The part of an element that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Direction,
    Degrees,
    Minutes,
    Seconds,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Direction => "direction",
            ErrorKind::Degrees => "degrees",
            ErrorKind::Minutes => "minutes",
            ErrorKind::Seconds => "seconds",
        };
        write!(f, "{name}")
    }
}

/// Raised when a latitude or longitude cannot be constructed from its parts.
/// Carries the offending raw value and an explanation of what is allowed.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Invalid or unknown value for a geo coordinate \"{kind}\" element/part! {message}")]
pub struct ElementError {
    kind: ErrorKind,
    value: String,
    message: String,
}

impl ElementError {
    pub(crate) fn new(kind: ErrorKind, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The raw value that was rejected.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One numeric part (degrees, minutes or seconds) handed to an element
/// constructor.
///
/// The variant matters for minutes: without a seconds value of at least `1`,
/// an [`Integer`](Component::Integer) is taken as whole minutes, while the
/// fraction of a [`Decimal`](Component::Decimal) or [`Text`](Component::Text)
/// is turned into seconds (`26.5` minutes become `26' 30"`).
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl Component {
    fn raw(&self) -> String {
        match self {
            Component::Integer(value) => value.to_string(),
            Component::Decimal(value) => value.to_string(),
            Component::Text(value) => value.clone(),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

macro_rules! component_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Component {
                fn from(value: $t) -> Self {
                    Component::Integer(i64::from(value))
                }
            }
        )*
    };
}

component_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Component {
    fn from(value: f64) -> Self {
        Component::Decimal(value)
    }
}

impl From<f32> for Component {
    fn from(value: f32) -> Self {
        Component::Decimal(f64::from(value))
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Component::Text(value.to_string())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Component::Text(value)
    }
}

/// Result of splitting a decimal angle into sexagesimal parts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DmsParts {
    pub direction: Direction,
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

/// Splits a signed decimal angle into direction, degrees, minutes and seconds.
///
/// Seconds are rounded to 5 places. A rounded value of exactly 60 seconds is
/// carried into the minutes first, then full hours of minutes into degrees.
///
/// ```
/// use geodms::element::decimal_to_dms;
/// use geodms::Direction;
///
/// let parts = decimal_to_dms(-79.948862, true);
/// assert_eq!(parts.direction, Direction::West);
/// assert_eq!((parts.degrees, parts.minutes), (79, 56));
/// assert_eq!(parts.seconds, 55.9032);
///
/// let parts = decimal_to_dms(10.999999999, false);
/// assert_eq!((parts.degrees, parts.minutes, parts.seconds), (11, 0, 0.0));
/// ```
pub fn decimal_to_dms(value: f64, is_longitude: bool) -> DmsParts {
    let direction = match (is_longitude, value < 0.0) {
        (true, true) => Direction::West,
        (true, false) => Direction::East,
        (false, true) => Direction::South,
        (false, false) => Direction::North,
    };

    let magnitude = value.abs();
    let degrees = magnitude.trunc();
    let minutes_fract = f64::from(dms::DM) * (magnitude - degrees);
    let minutes = minutes_fract.trunc();
    let mut seconds = round_to(f64::from(dms::MS) * (minutes_fract - minutes), 5);

    let mut degrees = degrees.to_u64().unwrap_or(0);
    let mut minutes = minutes.to_u64().unwrap_or(0);

    if seconds.eps_eq(f64::from(dms::MS)) {
        minutes += 1;
        seconds = 0.0;
    }
    while minutes >= MINUTES_PER_DEGREE {
        degrees += 1;
        minutes -= MINUTES_PER_DEGREE;
    }

    DmsParts {
        direction,
        degrees: degrees.to_u16().unwrap_or(u16::MAX),
        minutes: minutes.to_u8().unwrap_or(0),
        seconds,
    }
}

/// Signed decimal value of the given sexagesimal parts.
fn calc_dec(direction: Direction, degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let total_seconds = f64::from(dms::MS) * minutes + seconds;
    let value = degrees + total_seconds / f64::from(dms::DS);
    direction.is_positive().ternary(value, -value)
}

pub(crate) mod sealed {
    use super::Direction;

    /// Normalized storage of an element. Never constructed outside the
    /// validating constructors in the parent module.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Dms {
        pub(crate) direction: Direction,
        pub(crate) degrees: u16,
        pub(crate) minutes: u8,
        pub(crate) seconds: f64,
        pub(crate) decimal: f64,
    }

    pub trait Sealed: Sized {
        fn from_dms(dms: Dms) -> Self;
        fn dms(&self) -> &Dms;
    }
}

use sealed::Dms;

/// Options for [`AngleElement::format_dms`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DmsFormat {
    /// Put the direction letter at the end (`70° 50' 12" N`).
    pub direction_last: bool,
    /// Remove every space from the output (`N70°50'12"`).
    pub compact: bool,
    /// Decimal places of the seconds.
    pub seconds_precision: u32,
}

impl Default for DmsFormat {
    fn default() -> Self {
        Self {
            direction_last: false,
            compact: false,
            seconds_precision: 3,
        }
    }
}

/// Options for [`AngleElement::format_dm`] and
/// [`AngleElement::format_without_direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DmFormat {
    /// Append the minute character `'`.
    pub minute_char: bool,
    /// Decimal places of the fractional minutes.
    pub minutes_precision: u32,
}

impl Default for DmFormat {
    fn default() -> Self {
        Self {
            minute_char: true,
            minutes_precision: 6,
        }
    }
}

/// Capability shared by [`Latitude`](crate::Latitude) and
/// [`Longitude`](crate::Longitude): the direction alphabet, the degree bound,
/// accessors and formatting.
pub trait AngleElement: sealed::Sealed + Copy + fmt::Display {
    /// Lowercase name used in messages.
    const NAME: &'static str;
    /// Upper bound of the degrees and of the decimal magnitude.
    const MAX_DEGREES: u16;
    /// Direction of positive decimal values.
    const POSITIVE: Direction;
    /// Direction of negative decimal values.
    const NEGATIVE: Direction;
    const IS_LONGITUDE: bool;

    fn direction(&self) -> Direction {
        self.dms().direction
    }

    /// Degrees, always positive. The sign lives in the direction.
    fn degrees(&self) -> u16 {
        self.dms().degrees
    }

    fn minutes(&self) -> u8 {
        self.dms().minutes
    }

    fn seconds(&self) -> f64 {
        self.dms().seconds
    }

    /// Signed decimal value. Negative for S/W.
    fn decimal(&self) -> f64 {
        self.dms().decimal
    }

    /// Degrees-minutes-seconds notation, e.g. `N 40° 26' 46.302"`.
    fn format_dms(&self, format: DmsFormat) -> String {
        let dms = self.dms();
        let seconds = format_rounded(dms.seconds, format.seconds_precision);
        let (direction, degrees, minutes) = (dms.direction, dms.degrees, dms.minutes);

        match (format.direction_last, format.compact) {
            (false, false) => format!("{direction} {degrees}° {minutes}' {seconds}\""),
            (false, true) => format!("{direction}{degrees}°{minutes}'{seconds}\""),
            (true, false) => format!("{degrees}° {minutes}' {seconds}\" {direction}"),
            (true, true) => format!("{degrees}°{minutes}'{seconds}\"{direction}"),
        }
    }

    /// Colon separated notation, e.g. `N 40:26:46.302`.
    fn format_dcmcs(&self, compact: bool, seconds_precision: u32) -> String {
        let dms = self.dms();
        let seconds = format_rounded(dms.seconds, seconds_precision);
        let space = compact.ternary("", " ");
        format!("{}{space}{}:{}:{seconds}", dms.direction, dms.degrees, dms.minutes)
    }

    /// Degrees with decimal minutes, e.g. `N 40° 26.7717'`.
    fn format_dm(&self, format: DmFormat) -> String {
        let dms = self.dms();
        format!("{} {}", dms.direction, decimal_minutes(dms, format))
    }

    /// Degrees with decimal minutes and a `-` instead of S/W, e.g. `-79° 56.93172'`.
    fn format_without_direction(&self, format: DmFormat) -> String {
        let dms = self.dms();
        let sign = dms.direction.is_positive().ternary("", "-");
        format!("{sign}{}", decimal_minutes(dms, format))
    }

    /// The decimal value rounded to `precision` places.
    fn format_decimal(&self, precision: u32) -> f64 {
        round_to(self.dms().decimal, precision)
    }

    /// EXIF style notation, e.g. `51 deg 0' 31.27" N`.
    fn format_exif_like(&self) -> String {
        let dms = self.dms();
        let seconds = format_rounded(dms.seconds, 3).replace(',', ".");
        format!("{} deg {}' {seconds}\" {}", dms.degrees, dms.minutes, dms.direction)
    }
}

fn decimal_minutes(dms: &Dms, format: DmFormat) -> String {
    let minutes = f64::from(dms.minutes) + dms.seconds / f64::from(dms::MS);
    let minutes = format_rounded(minutes, format.minutes_precision);
    let minute_char = format.minute_char.ternary("'", "");
    format!("{}° {minutes}{minute_char}", dms.degrees)
}

fn range_label<E: AngleElement>() -> String {
    format!("{}/{} {}", E::POSITIVE.name(), E::NEGATIVE.name(), E::NAME)
}

fn init_direction<E: AngleElement>(raw: &str) -> Result<Direction, ElementError> {
    let symbol = raw.trim().to_uppercase();
    let mut chars = symbol.chars();

    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(ElementError::new(
            ErrorKind::Direction,
            raw,
            format!("'{symbol}' is not allowed."),
        ));
    };

    match Direction::from_symbol(letter) {
        Some(direction) if direction == E::POSITIVE || direction == E::NEGATIVE => Ok(direction),
        _ => Err(ElementError::new(
            ErrorKind::Direction,
            raw,
            format!("'{symbol}' isn't allowed. Please use '{}' or '{}'", E::POSITIVE, E::NEGATIVE),
        )),
    }
}

fn init_degrees<E: AngleElement>(degrees: &Component) -> Result<u16, ElementError> {
    let not_integer = || {
        ElementError::new(
            ErrorKind::Degrees,
            degrees.raw(),
            format!("'{degrees}' is not a valid degrees value for a {}.", range_label::<E>()),
        )
    };

    // Fractions of a degree are cut off, the way integer conversion of text does
    let value = match degrees {
        Component::Integer(value) => *value,
        Component::Decimal(value) => value.trunc().to_i64().ok_or_else(not_integer)?,
        Component::Text(text) => match leading_int(text) {
            Some(value) => value,
            None => parse_decimal(text)
                .and_then(|value| value.trunc().to_i64())
                .ok_or_else(not_integer)?,
        },
    };

    let max = i64::from(E::MAX_DEGREES);
    if !(-max..=max).contains(&value) {
        return Err(ElementError::new(
            ErrorKind::Degrees,
            degrees.raw(),
            format!("{value}° is out of allowed range 0-{max} for a {}.", range_label::<E>()),
        ));
    }

    value.unsigned_abs().to_u16().ok_or_else(not_integer)
}

/// Resolves the minutes and seconds slots into whole minutes and seconds.
///
/// Without a seconds value of at least 1 the minutes may carry a fraction,
/// which becomes the seconds. Fractions taken from a float are rounded to 8
/// places, fractions taken from text to 6.
fn init_minutes(minutes: &Component, seconds: Option<&Component>) -> Result<(u64, f64), ElementError> {
    let bad_minutes = |why: &str| {
        ElementError::new(
            ErrorKind::Minutes,
            minutes.raw(),
            format!("'{minutes}' {why}"),
        )
    };

    let minutes_text = match minutes {
        Component::Integer(value) => value.to_string(),
        Component::Decimal(value) if value.is_finite() => value.to_string(),
        Component::Decimal(_) => return Err(bad_minutes("is not of required decimal number format.")),
        Component::Text(text) => text.trim().to_string(),
    };
    let minutes_value = parse_decimal(&minutes_text)
        .ok_or_else(|| bad_minutes("is not of required decimal number format."))?;
    if minutes_value < 0.0 {
        return Err(bad_minutes("must not be negative."));
    }

    let seconds_value = match seconds {
        None => None,
        Some(Component::Integer(value)) => value.to_f64(),
        Some(Component::Decimal(value)) => Some(*value),
        Some(Component::Text(text)) => Some(parse_decimal(text).ok_or_else(|| {
            ElementError::new(
                ErrorKind::Seconds,
                text.as_str(),
                format!("'{text}' is not of required decimal number format."),
            )
        })?),
    };

    let whole_minutes = |value: f64| value.trunc().to_u64().ok_or_else(|| bad_minutes("is too large."));

    match seconds_value.filter(|seconds| *seconds >= 1.0) {
        Some(seconds) => {
            let minutes = match minutes {
                Component::Integer(value) => value.unsigned_abs(),
                _ => whole_minutes(minutes_value)?,
            };
            Ok((minutes, round_to(seconds, 8)))
        }
        None => {
            let places = match minutes {
                Component::Integer(value) => return Ok((value.unsigned_abs(), 0.0)),
                Component::Decimal(_) => 8,
                Component::Text(_) => 6,
            };

            let (whole, fraction) = split_decimal(&minutes_text);
            let whole = leading_int(whole)
                .and_then(|value| value.to_u64())
                .ok_or_else(|| bad_minutes("is not of required decimal number format."))?;
            let seconds = match fraction {
                Some(digits) if !digits.is_empty() => {
                    let fraction: f64 = format!("0.{digits}")
                        .parse()
                        .map_err(|_| bad_minutes("is not of required decimal number format."))?;
                    round_to(f64::from(dms::MS) * fraction, places)
                }
                _ => 0.0,
            };
            Ok((whole, seconds))
        }
    }
}

/// Carries full minutes out of the seconds and full degrees out of the
/// minutes, then checks the total against the element's bound.
fn normalize<E: AngleElement>(
    direction: Direction,
    degrees: u16,
    minutes: u64,
    seconds: f64,
) -> Result<Dms, ElementError> {
    let seconds_per_minute = f64::from(dms::MS);
    let mut minutes = minutes;
    let mut seconds = seconds;

    if seconds >= seconds_per_minute {
        let carry = (seconds / seconds_per_minute).trunc();
        minutes = minutes.saturating_add(carry.to_u64().unwrap_or(u64::MAX));
        seconds = round_to(seconds - carry * seconds_per_minute, 8);
        if seconds >= seconds_per_minute {
            minutes = minutes.saturating_add(1);
            seconds = 0.0;
        }
    }

    let (carry, minutes) = minutes.div_rem(&MINUTES_PER_DEGREE);
    let degrees = u64::from(degrees).saturating_add(carry);

    let degrees_value = degrees.to_f64().unwrap_or(f64::INFINITY);
    let minutes_value = minutes.to_f64().unwrap_or(0.0);
    let decimal = calc_dec(direction, degrees_value, minutes_value, seconds);

    let max = E::MAX_DEGREES;
    if degrees > u64::from(max) || decimal.abs() > f64::from(max) {
        return Err(ElementError::new(
            ErrorKind::Degrees,
            format!("{degrees}° {minutes}' {seconds}\""),
            format!(
                "{}° is out of allowed range 0-{max} for a {}.",
                decimal.abs(),
                range_label::<E>()
            ),
        ));
    }

    Ok(Dms {
        direction,
        degrees: degrees.to_u16().unwrap_or(max),
        minutes: minutes.to_u8().unwrap_or(0),
        seconds,
        decimal,
    })
}

/// Validating constructor behind `Latitude::new`/`Longitude::new` and friends.
pub(crate) fn construct<E: AngleElement>(
    direction: &str,
    degrees: &Component,
    minutes: &Component,
    seconds: Option<&Component>,
) -> Result<E, ElementError> {
    let direction = init_direction::<E>(direction)?;
    let degrees = init_degrees::<E>(degrees)?;
    let (minutes, seconds) = init_minutes(minutes, seconds)?;

    normalize::<E>(direction, degrees, minutes, seconds).map(E::from_dms)
}

/// Builds an element from a signed decimal value, keeping that value as is.
pub(crate) fn from_decimal<E: AngleElement>(value: f64) -> Result<E, ElementError> {
    let max = f64::from(E::MAX_DEGREES);
    if !value.is_finite() || value.abs() > max {
        return Err(ElementError::new(
            ErrorKind::Degrees,
            value.to_string(),
            format!("{value} is out of allowed range -{max}..{max} for a {}.", range_label::<E>()),
        ));
    }

    // A negative zero would otherwise render as "-0"
    let value = if value.is_zero() { 0.0 } else { value };
    let parts = decimal_to_dms(value, E::IS_LONGITUDE);

    Ok(E::from_dms(Dms {
        direction: parts.direction,
        degrees: parts.degrees,
        minutes: parts.minutes,
        seconds: parts.seconds,
        decimal: value,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Latitude, Longitude};

    #[test]
    fn decimal_split_carries_seconds_then_minutes() {
        let parts = decimal_to_dms(40.446195, false);
        assert_eq!(parts.direction, Direction::North);
        assert_eq!((parts.degrees, parts.minutes, parts.seconds), (40, 26, 46.302));

        // 59' 59.999999" rounds to 60" which must end up as a full degree
        let parts = decimal_to_dms(-12.99999999999, false);
        assert_eq!(parts.direction, Direction::South);
        assert_eq!((parts.degrees, parts.minutes, parts.seconds), (13, 0, 0.0));
    }

    #[test]
    fn decimal_split_picks_alphabet() {
        assert_eq!(decimal_to_dms(1.0, true).direction, Direction::East);
        assert_eq!(decimal_to_dms(-1.0, true).direction, Direction::West);
        assert_eq!(decimal_to_dms(0.0, false).direction, Direction::North);
    }

    #[test]
    fn minutes_with_fraction_become_seconds() {
        let (minutes, seconds) = init_minutes(&Component::Decimal(26.7717), None).unwrap();
        assert_eq!((minutes, seconds), (26, 46.302));

        let (minutes, seconds) = init_minutes(&Component::from("26,5"), None).unwrap();
        assert_eq!((minutes, seconds), (26, 30.0));
    }

    #[test]
    fn text_and_float_fractions_round_differently() {
        let (_, from_text) = init_minutes(&Component::from("0.123456789"), None).unwrap();
        let (_, from_float) = init_minutes(&Component::Decimal(0.123456789), None).unwrap();
        assert_eq!(from_text, 7.407407);
        assert_eq!(from_float, 7.40740734);
    }

    #[test]
    fn small_seconds_are_ignored_in_favour_of_fractional_minutes() {
        let (minutes, seconds) = init_minutes(&Component::Decimal(10.5), Some(&Component::Decimal(0.4))).unwrap();
        assert_eq!((minutes, seconds), (10, 30.0));

        let (minutes, seconds) = init_minutes(&Component::Integer(10), Some(&Component::Decimal(0.4))).unwrap();
        assert_eq!((minutes, seconds), (10, 0.0));
    }

    #[test]
    fn real_seconds_truncate_fractional_minutes() {
        let (minutes, seconds) = init_minutes(&Component::Decimal(10.9), Some(&Component::from("12,5"))).unwrap();
        assert_eq!((minutes, seconds), (10, 12.5));

        let (minutes, seconds) = init_minutes(&Component::from("0.5"), Some(&Component::Integer(3))).unwrap();
        assert_eq!((minutes, seconds), (0, 3.0));
    }

    #[test]
    fn bad_minutes_and_seconds() {
        let err = init_minutes(&Component::from("ten"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Minutes);
        assert_eq!(err.value(), "ten");

        let err = init_minutes(&Component::Integer(-3), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Minutes);

        let err = init_minutes(&Component::Integer(3), Some(&Component::from("5s"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Seconds);
    }

    #[test]
    fn direction_rules() {
        assert_eq!(init_direction::<Latitude>(" s ").unwrap(), Direction::South);
        assert_eq!(init_direction::<Longitude>("o").unwrap(), Direction::East);

        let err = init_direction::<Latitude>("E").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Direction);
        assert!(err.message().contains("'N' or 'S'"));

        let err = init_direction::<Longitude>("EW").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Direction);
    }

    #[test]
    fn degree_rules() {
        assert_eq!(init_degrees::<Latitude>(&Component::Integer(-45)).unwrap(), 45);
        assert_eq!(init_degrees::<Latitude>(&Component::from("007")).unwrap(), 7);
        assert_eq!(init_degrees::<Longitude>(&Component::Decimal(179.9)).unwrap(), 179);

        let err = init_degrees::<Latitude>(&Component::Integer(-91)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Degrees);
        assert!(err.to_string().contains("0-90 for a north/south latitude"));

        let err = init_degrees::<Longitude>(&Component::from("abc")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Degrees);
    }

    #[test]
    fn normalization_rejects_overflowing_totals() {
        let dms = normalize::<Latitude>(Direction::North, 89, 59, 60.0).unwrap();
        assert_eq!((dms.degrees, dms.minutes, dms.seconds), (90, 0, 0.0));
        assert_eq!(dms.decimal, 90.0);

        let err = normalize::<Latitude>(Direction::North, 90, 0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Degrees);
    }

    #[test]
    fn parts_rebuild_the_decimal() {
        for value in [0.0, 1e-9, 12.5, -33.8688, 40.446195, -89.99999999, 90.0] {
            let parts = decimal_to_dms(value, false);
            let lat: Latitude = construct(
                &parts.direction.to_string(),
                &Component::from(parts.degrees),
                &Component::from(parts.minutes),
                Some(&Component::Decimal(parts.seconds)),
            )
            .unwrap();
            assert!((lat.decimal() - value).abs() < 1e-8, "{value}");
        }

        for value in [-180.0, -79.948862, 151.2093, 179.999999] {
            let parts = decimal_to_dms(value, true);
            let lon: Longitude = construct(
                &parts.direction.to_string(),
                &Component::from(parts.degrees),
                &Component::from(parts.minutes),
                Some(&Component::Decimal(parts.seconds)),
            )
            .unwrap();
            assert!((lon.format_decimal(DEFAULT_DECIMAL_PRECISION) - value).abs() < 1e-8, "{value}");
        }
    }

    #[test]
    fn decimal_constructor_keeps_value() {
        let lon: Longitude = from_decimal(-79.948862).unwrap();
        assert_eq!(lon.decimal(), -79.948862);
        assert_eq!(lon.direction(), Direction::West);

        let lat: Latitude = from_decimal(-0.0).unwrap();
        assert_eq!(lat.format_dms(DmsFormat::default()), "N 0° 0' 0\"");

        assert!(from_decimal::<Latitude>(f64::NAN).is_err());
        assert!(from_decimal::<Latitude>(90.0001).is_err());
    }
}
