//! Numeric helpers shared by the element, coordinate and projection code.

use lazy_static::lazy_static;
use regex::Regex;

pub(crate) mod dms {
    /// Minutes per degree
    pub const DM: i32 = 60;
    /// Seconds per minute
    pub const MS: i32 = 60;
    /// Seconds per degree
    pub const DS: i32 = DM * MS;
}

lazy_static! {
    static ref DECIMAL: Regex = Regex::new(r"^[+-]?(?:\d+(?:[.,]\d*)?|[.,]\d+)$").unwrap();
}

/// Returns whether `value` is a decimal numeral with an optional sign,
/// using either `.` or `,` as the decimal separator.
///
/// With `pure` set, the string must consist of the numeral alone. Otherwise
/// surrounding whitespace is tolerated.
///
/// ```
/// use geodms::utility::is_decimal;
///
/// assert!(is_decimal("-79.948862", true));
/// assert!(is_decimal("40,5", true));
/// assert!(is_decimal(" 12 ", false));
/// assert!(!is_decimal(" 12 ", true));
/// assert!(!is_decimal("N40.5", false));
/// ```
pub fn is_decimal(value: &str, pure: bool) -> bool {
    let value = if pure { value } else { value.trim() };
    DECIMAL.is_match(value)
}

/// Parses a decimal numeral after normalizing `,` to `.`.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let value = value.trim();
    if !is_decimal(value, true) {
        return None;
    }
    value.replace(',', ".").parse().ok()
}

/// Splits the textual form of a number on its decimal separator into the
/// integer part and the digits after the separator.
pub(crate) fn split_decimal(value: &str) -> (&str, Option<&str>) {
    match value.find(|c: char| c == '.' || c == ',') {
        Some(idx) => (&value[..idx], Some(&value[idx + 1..])),
        None => (value, None),
    }
}

/// Parses the leading integer of a string the lenient way: an empty string
/// and a lone sign count as zero.
pub(crate) fn leading_int(value: &str) -> Option<i64> {
    let value = value.trim();
    match value {
        "" | "-" | "+" => Some(0),
        _ => value.parse().ok(),
    }
}

/// Rounds half away from zero to `places` decimal places.
///
/// The scaled value is first cut to 15 significant digits so that values like
/// `1.005` that are stored slightly below their written form still round up.
///
/// ```
/// use geodms::utility::round_to;
///
/// assert_eq!(round_to(46.30199999, 3), 46.302);
/// assert_eq!(round_to(1.005, 2), 1.01);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places.min(22) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let pre_rounded: f64 = format!("{scaled:.14e}").parse().unwrap_or(scaled);
    pre_rounded.round() / factor
}

/// Renders a rounded number the short way (`46.302`, `46`, `-0.5`).
pub(crate) fn format_rounded(value: f64, places: u32) -> String {
    let rounded = round_to(value, places);
    // Avoid printing "-0" for values that rounded away to nothing
    if rounded.is_zero() { "0".to_string() } else { rounded.to_string() }
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
    fn eps_eq(&self, other: Self) -> bool;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }

    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }
}
