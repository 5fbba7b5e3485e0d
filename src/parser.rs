//! Grammar shared by the latitude and longitude string parsers.
//!
//! Notations are tried in a fixed order and the first one that matches
//! decides the outcome. A notation that matches but yields out of range
//! values is a failure; later notations are not tried.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    element::{self, AngleElement, Component, Direction, ElementError},
    utility::{is_decimal, parse_decimal},
};

lazy_static! {
    static ref DEG_WORD: Regex = Regex::new(r"(?i)\s+deg").unwrap();
    static ref LAT_LEADING: Regex = Regex::new(r"(?i)^([NS])(.+)$").unwrap();
    static ref LAT_TRAILING: Regex = Regex::new(r"(?i)^(.+)([NS])$").unwrap();
    static ref LON_LEADING: Regex = Regex::new(r"(?i)^([EWO])(.+)$").unwrap();
    static ref LON_TRAILING: Regex = Regex::new(r"(?i)^(.+)([EWO])$").unwrap();
    static ref SIGNED_DEGREES: Regex = Regex::new(r"^(-?)\d+°").unwrap();
    // 40° 26' 46.302"  |  40:26:46.302  |  40d26'46"  |  40 26 46
    static ref FULL_DMS: Regex = Regex::new(r"^(\d{1,3})[°d:\s]\s*(\d{1,2})[:'\s](.+)$").unwrap();
    // 40° 26.7717'  |  40 26,7717
    static ref DEGREES_MINUTES: Regex = Regex::new(r"^(\d{1,3})[°\s]\s*([\d.,]+)'?$").unwrap();
    static ref DEGREES_SECONDS_MINUTES: Regex =
        Regex::new(r#"^(\d{1,3})°\s+([\d.,]+)"\s+([\d.,]+)'?$"#).unwrap();
}

/// Parses a latitude or longitude from a loosely written string.
pub(crate) fn parse_element<E: AngleElement>(input: &str) -> Option<E> {
    let input = input.trim();

    if is_decimal(input, true) {
        tracing::trace!(input, "{} given as decimal value", E::NAME);
        let value = parse_decimal(input)?;
        return accept(input, element::from_decimal(value));
    }

    let text = DEG_WORD.replace_all(input, "°");
    let (direction, body) = split_direction::<E>(&text)?;
    let body = body.trim();

    if let Some(caps) = FULL_DMS.captures(body) {
        tracing::trace!(input, "{} given as degrees, minutes and seconds", E::NAME);
        let seconds = caps[3].trim().trim_end_matches('"');
        return accept(
            input,
            element::construct(
                &direction,
                &Component::from(&caps[1]),
                &Component::from(&caps[2]),
                Some(&Component::from(seconds)),
            ),
        );
    }

    if is_decimal(body, true) {
        tracing::trace!(input, "{} given as decimal value with direction", E::NAME);
        let magnitude = parse_decimal(body)?.abs();
        let negative = direction
            .chars()
            .next()
            .and_then(Direction::from_symbol)
            .is_some_and(|direction| direction == E::NEGATIVE);
        let value = if negative { -magnitude } else { magnitude };
        return accept(input, element::from_decimal(value));
    }

    if let Some(caps) = DEGREES_MINUTES.captures(body) {
        tracing::trace!(input, "{} given as degrees and decimal minutes", E::NAME);
        let minutes = parse_decimal(&caps[2])?;
        return accept(
            input,
            element::construct(&direction, &Component::from(&caps[1]), &Component::Decimal(minutes), None),
        );
    }

    if let Some(caps) = DEGREES_SECONDS_MINUTES.captures(body) {
        tracing::trace!(input, "{} given as degrees with quoted minutes", E::NAME);
        let minutes = parse_decimal(&caps[2])?;
        let seconds = parse_decimal(&caps[3])?;
        return accept(
            input,
            element::construct(
                &direction,
                &Component::from(&caps[1]),
                &Component::Decimal(minutes),
                Some(&Component::Decimal(seconds)),
            ),
        );
    }

    tracing::debug!(input, "no {} notation matches", E::NAME);
    None
}

/// Splits off the direction letter, either leading or trailing. Without a
/// letter, a degrees value with a `°` sign decides by its sign.
fn split_direction<E: AngleElement>(text: &str) -> Option<(String, String)> {
    let (leading, trailing) = if E::IS_LONGITUDE {
        (&*LON_LEADING, &*LON_TRAILING)
    } else {
        (&*LAT_LEADING, &*LAT_TRAILING)
    };

    if let Some(caps) = leading.captures(text) {
        return Some((caps[1].to_string(), caps[2].to_string()));
    }
    if let Some(caps) = trailing.captures(text) {
        return Some((caps[2].to_string(), caps[1].to_string()));
    }
    if let Some(caps) = SIGNED_DEGREES.captures(text) {
        return Some(if caps[1].is_empty() {
            (E::POSITIVE.to_string(), text.to_string())
        } else {
            (E::NEGATIVE.to_string(), text[1..].to_string())
        });
    }

    tracing::debug!(text, "no direction found for a {}", E::NAME);
    None
}

fn accept<E: AngleElement>(input: &str, result: Result<E, ElementError>) -> Option<E> {
    result
        .map_err(|error| tracing::debug!(input, %error, "rejecting {} candidate", E::NAME))
        .ok()
}
