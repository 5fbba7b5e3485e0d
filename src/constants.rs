// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;
// UTM false easting applied to every zone
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
// UTM false northing applied in the southern hemisphere
pub(crate) const UTM_FALSE_NORTHING: f64 = 10_000_000.;

// Angle conversions used by the UTM series, kept at the precision the
// published coordinates were generated with
#[allow(clippy::unreadable_literal)]
pub(crate) const UTM_DEG2RAD: f64 = 0.0174532925;
#[allow(clippy::unreadable_literal)]
pub(crate) const UTM_RAD2DEG: f64 = 57.2957795785523;

// Flattening of the ellipsoid used by the Andoyer-Lambert distance
#[allow(clippy::unreadable_literal)]
pub(crate) const DISTANCE_FLATTENING: f64 = 0.003352811;
// Equatorial radius in km used by the Andoyer-Lambert distance
pub(crate) const DISTANCE_EQUATORIAL_RADIUS_KM: f64 = 6378.14;
// Mean radius in km used by the great-circle distance
pub(crate) const DISTANCE_MEAN_RADIUS_KM: f64 = 6370.;
#[allow(clippy::unreadable_literal)]
pub(crate) const DISTANCE_DEG2RAD: f64 = 0.017453292519943;
