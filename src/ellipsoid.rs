//! Catalogue of reference ellipsoids usable for the UTM projection.

use std::collections::HashMap;

use lazy_static::lazy_static;

pub const AIRY: &str = "Airy";
pub const AUSTRALIAN_NATIONAL: &str = "Australian National";
pub const BESSEL_1841: &str = "Bessel 1841";
pub const BESSEL_1841_NAMIBIA: &str = "Bessel 1841 (Nambia)";
pub const CLARKE_1866: &str = "Clarke 1866";
pub const CLARKE_1880: &str = "Clarke 1880";
pub const EVEREST: &str = "Everest";
pub const FISCHER_1960_MERCURY: &str = "Fischer 1960 (Mercury)";
pub const FISCHER_1968: &str = "Fischer 1968";
pub const GRS_1967: &str = "GRS 1967";
pub const GRS_1980: &str = "GRS 1980";
pub const HELMERT_1906: &str = "Helmert 1906";
pub const HOUGH: &str = "Hough";
pub const INTERNATIONAL: &str = "International";
pub const KRASSOVSKY: &str = "Krassovsky";
pub const AIRY_MODIFIED: &str = "Modified Airy";
pub const EVEREST_MODIFIED: &str = "Modified Everest";
pub const FISCHER_1960_MODIFIED: &str = "Modified Fischer 1960";
pub const SOUTH_AMERICAN_1969: &str = "South American 1969";
pub const WGS_60: &str = "WGS 60";
pub const WGS_66: &str = "WGS 66";
pub const WGS_72: &str = "WGS-72";
pub const WGS_84: &str = "WGS-84";

/// A reference ellipsoid given by its semi-major axis `a` in meters and its
/// squared eccentricity `e²`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ellipsoid {
    name: &'static str,
    a: f64,
    ecc_squared: f64,
}

#[allow(clippy::unreadable_literal)]
static ELLIPSOIDS: [Ellipsoid; 23] = [
    Ellipsoid { name: AIRY,                  a: 6377563.0, ecc_squared: 0.00667054 },
    Ellipsoid { name: AUSTRALIAN_NATIONAL,   a: 6378160.0, ecc_squared: 0.006694542 },
    Ellipsoid { name: BESSEL_1841,           a: 6377397.0, ecc_squared: 0.006674372 },
    Ellipsoid { name: BESSEL_1841_NAMIBIA,   a: 6377484.0, ecc_squared: 0.006674372 },
    Ellipsoid { name: CLARKE_1866,           a: 6378206.0, ecc_squared: 0.006768658 },
    Ellipsoid { name: CLARKE_1880,           a: 6378249.0, ecc_squared: 0.006803511 },
    Ellipsoid { name: EVEREST,               a: 6377276.0, ecc_squared: 0.006637847 },
    Ellipsoid { name: FISCHER_1960_MERCURY,  a: 6378166.0, ecc_squared: 0.006693422 },
    Ellipsoid { name: FISCHER_1968,          a: 6378150.0, ecc_squared: 0.006693422 },
    Ellipsoid { name: GRS_1967,              a: 6378160.0, ecc_squared: 0.006694605 },
    Ellipsoid { name: GRS_1980,              a: 6378137.0, ecc_squared: 0.00669438 },
    Ellipsoid { name: HELMERT_1906,          a: 6378200.0, ecc_squared: 0.006693422 },
    Ellipsoid { name: HOUGH,                 a: 6378270.0, ecc_squared: 0.00672267 },
    Ellipsoid { name: INTERNATIONAL,         a: 6378388.0, ecc_squared: 0.00672267 },
    Ellipsoid { name: KRASSOVSKY,            a: 6378245.0, ecc_squared: 0.006693422 },
    Ellipsoid { name: AIRY_MODIFIED,         a: 6377340.0, ecc_squared: 0.00667054 },
    Ellipsoid { name: EVEREST_MODIFIED,      a: 6377304.0, ecc_squared: 0.006637847 },
    Ellipsoid { name: FISCHER_1960_MODIFIED, a: 6378155.0, ecc_squared: 0.006693422 },
    Ellipsoid { name: SOUTH_AMERICAN_1969,   a: 6378160.0, ecc_squared: 0.006694542 },
    Ellipsoid { name: WGS_60,                a: 6378165.0, ecc_squared: 0.006693422 },
    Ellipsoid { name: WGS_66,                a: 6378145.0, ecc_squared: 0.006694542 },
    Ellipsoid { name: WGS_72,                a: 6378135.0, ecc_squared: 0.006694318 },
    Ellipsoid { name: WGS_84,                a: 6378137.0, ecc_squared: 0.00669438 },
];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, &'static Ellipsoid> = ELLIPSOIDS
        .iter()
        .map(|ellipsoid| (ellipsoid.name, ellipsoid))
        .collect();
}

impl Ellipsoid {
    /// Looks up a predefined ellipsoid by its catalogue name. Surrounding
    /// whitespace is ignored, the name itself is matched exactly.
    ///
    /// # Usage
    ///
    /// ```
    /// use geodms::{Ellipsoid, ellipsoid};
    ///
    /// let wgs84 = Ellipsoid::named(ellipsoid::WGS_84).unwrap();
    /// assert_eq!(wgs84.a(), 6378137.0);
    ///
    /// assert!(Ellipsoid::named("Not-A-Real-Ellipsoid").is_none());
    /// ```
    pub fn named(name: &str) -> Option<Ellipsoid> {
        BY_NAME.get(name.trim()).map(|ellipsoid| **ellipsoid)
    }

    /// The default ellipsoid, WGS-84.
    pub fn wgs84() -> Ellipsoid {
        ELLIPSOIDS[ELLIPSOIDS.len() - 1]
    }

    /// Every ellipsoid in the catalogue.
    pub fn all() -> &'static [Ellipsoid] {
        &ELLIPSOIDS
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Semi-major axis in meters.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The squared eccentricity *e²*.
    pub fn eccentricity_squared(&self) -> f64 {
        self.ecc_squared
    }

    /// The squared second eccentricity *e'² = e² / (1 - e²)*.
    pub fn eccentricity_prime_squared(&self) -> f64 {
        self.ecc_squared / (1.0 - self.ecc_squared)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_complete() {
        assert_eq!(Ellipsoid::all().len(), 23);
        for ellipsoid in Ellipsoid::all() {
            assert_eq!(Ellipsoid::named(ellipsoid.name()), Some(*ellipsoid));
        }
    }

    #[test]
    fn default_is_wgs84() {
        let wgs84 = Ellipsoid::default();
        assert_eq!(wgs84.name(), WGS_84);
        assert_eq!(wgs84.eccentricity_squared(), 0.00669438);
    }

    #[test]
    fn lookup_tolerates_padding() {
        assert!(Ellipsoid::named(" Bessel 1841 (Nambia) ").is_some());
        assert!(Ellipsoid::named("wgs-84").is_none());
        assert!(Ellipsoid::named("").is_none());
    }
}
