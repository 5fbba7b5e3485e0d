//! Loosely typed input accepted by the `try_parse` conversions.

use std::borrow::Cow;

use crate::{Coordinate, Latitude, Longitude};

/// Anything a latitude, longitude or coordinate may be converted from.
///
/// Numbers become [`Decimal`](ParseValue::Decimal), strings become
/// [`Text`](ParseValue::Text) and `None` becomes
/// [`Unsupported`](ParseValue::Unsupported). Other types can opt in through
/// [`AssociatedString`] and [`ParseValue::from_associated`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParseValue<'a> {
    Latitude(Latitude),
    Longitude(Longitude),
    Coordinate(Coordinate),
    Decimal(f64),
    Text(Cow<'a, str>),
    Unsupported,
}

impl<'a> ParseValue<'a> {
    /// Wraps a value through its associated string, or
    /// [`Unsupported`](ParseValue::Unsupported) if it has none.
    ///
    /// # Usage
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use geodms::{AssociatedString, Latitude, ParseValue};
    ///
    /// struct Waypoint(&'static str);
    ///
    /// impl AssociatedString for Waypoint {
    ///     fn associated_string(&self) -> Option<Cow<'_, str>> {
    ///         Some(Cow::Borrowed(self.0))
    ///     }
    /// }
    ///
    /// let waypoint = Waypoint("N 51° 0' 31.27\"");
    /// assert!(Latitude::try_parse(ParseValue::from_associated(&waypoint)).is_some());
    /// ```
    pub fn from_associated<T: AssociatedString + ?Sized>(value: &'a T) -> ParseValue<'a> {
        value
            .associated_string()
            .map_or(ParseValue::Unsupported, ParseValue::Text)
    }
}

/// A value with a textual form the parsers can try.
pub trait AssociatedString {
    fn associated_string(&self) -> Option<Cow<'_, str>>;
}

impl AssociatedString for str {
    fn associated_string(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl AssociatedString for String {
    fn associated_string(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: AssociatedString> AssociatedString for Option<T> {
    fn associated_string(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(AssociatedString::associated_string)
    }
}

macro_rules! associated_via_display {
    ($($t:ty),*) => {
        $(
            impl AssociatedString for $t {
                fn associated_string(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

associated_via_display!(char, i32, i64, u32, u64, f32, f64, Latitude, Longitude, Coordinate);

impl From<Latitude> for ParseValue<'_> {
    fn from(value: Latitude) -> Self {
        ParseValue::Latitude(value)
    }
}

impl From<Longitude> for ParseValue<'_> {
    fn from(value: Longitude) -> Self {
        ParseValue::Longitude(value)
    }
}

impl From<Coordinate> for ParseValue<'_> {
    fn from(value: Coordinate) -> Self {
        ParseValue::Coordinate(value)
    }
}

impl From<&Coordinate> for ParseValue<'_> {
    fn from(value: &Coordinate) -> Self {
        ParseValue::Coordinate(*value)
    }
}

impl From<f64> for ParseValue<'_> {
    fn from(value: f64) -> Self {
        ParseValue::Decimal(value)
    }
}

impl From<f32> for ParseValue<'_> {
    fn from(value: f32) -> Self {
        ParseValue::Decimal(f64::from(value))
    }
}

impl From<i32> for ParseValue<'_> {
    fn from(value: i32) -> Self {
        ParseValue::Decimal(f64::from(value))
    }
}

impl<'a> From<&'a str> for ParseValue<'a> {
    fn from(value: &'a str) -> Self {
        ParseValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ParseValue<'a> {
    fn from(value: &'a String) -> Self {
        ParseValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ParseValue<'_> {
    fn from(value: String) -> Self {
        ParseValue::Text(Cow::Owned(value))
    }
}

impl<'a, T: Into<ParseValue<'a>>> From<Option<T>> for ParseValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParseValue::Unsupported, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(ParseValue::from(5), ParseValue::Decimal(5.0));
        assert_eq!(ParseValue::from("N 5"), ParseValue::Text(Cow::Borrowed("N 5")));
        assert_eq!(ParseValue::from(None::<&str>), ParseValue::Unsupported);
        assert_eq!(ParseValue::from(Some(1.5)), ParseValue::Decimal(1.5));
    }

    #[test]
    fn associated_strings() {
        let missing: Option<String> = None;
        assert_eq!(ParseValue::from_associated(&missing), ParseValue::Unsupported);

        let lat = Latitude::from_decimal(-0.5).unwrap();
        assert_eq!(
            ParseValue::from_associated(&lat),
            ParseValue::Text(Cow::Owned("S 0° 30' 0\"".to_string()))
        );
        assert_eq!(ParseValue::from_associated(&12), ParseValue::Text(Cow::Borrowed("12")));
    }
}
