use crate::{
    constants::{UTM_DEG2RAD, UTM_K0, UTM_RAD2DEG},
    ellipsoid::Ellipsoid,
};

/// Transverse Mercator projection evaluated with the classic series in
/// powers of the longitude difference (USGS Professional Paper 1395).
///
/// Coordinates are returned relative to the central meridian and the
/// equator; false easting and northing are left to the caller.
pub(crate) struct TransverseMercator {
    a: f64,
    e2: f64,
    ep2: f64,
    k0: f64,
}

impl TransverseMercator {
    pub fn utm(ellipsoid: &Ellipsoid) -> TransverseMercator {
        Self {
            a: ellipsoid.a(),
            e2: ellipsoid.eccentricity_squared(),
            ep2: ellipsoid.eccentricity_prime_squared(),
            k0: UTM_K0,
        }
    }

    /// Factor between the rectifying latitude and the meridian arc.
    fn arc_factor(&self) -> f64 {
        let e2 = self.e2;
        1. - e2 / 4. - 3. * e2.powi(2) / 64. - 5. * e2.powi(3) / 256.
    }

    /// Length of the meridian arc from the equator to `phi` (radians).
    fn meridian_arc(&self, phi: f64) -> f64 {
        let e2 = self.e2;
        self.a
            * (self.arc_factor() * phi
                - (3. * e2 / 8. + 3. * e2.powi(2) / 32. + 45. * e2.powi(3) / 1024.) * (2. * phi).sin()
                + (15. * e2.powi(2) / 256. + 45. * e2.powi(3) / 1024.) * (4. * phi).sin()
                - (35. * e2.powi(3) / 3072.) * (6. * phi).sin())
    }

    /// Projects `lat`/`lon` (degrees) around the central meridian `lon0`.
    /// Returns `(x, y)` in meters.
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let phi = lat * UTM_DEG2RAD;
        let lambda = lon * UTM_DEG2RAD;
        let lambda0 = lon0 * UTM_DEG2RAD;

        let n = self.a / (1. - self.e2 * phi.sin().powi(2)).sqrt();
        let t = phi.tan().powi(2);
        let c = self.ep2 * phi.cos().powi(2);
        let a = phi.cos() * (lambda - lambda0);
        let m = self.meridian_arc(phi);

        let x = self.k0
            * n
            * (a + (1. - t + c) * a.powi(3) / 6.
                + (5. - 18. * t + t.powi(2) + 72. * c - 58. * self.ep2) * a.powi(5) / 120.);

        let y = self.k0
            * (m + n
                * phi.tan()
                * (a.powi(2) / 2.
                    + (5. - t + 9. * c + 4. * c.powi(2)) * a.powi(4) / 24.
                    + (61. - 58. * t + t.powi(2) + 600. * c - 330. * self.ep2) * a.powi(6) / 720.));

        (x, y)
    }

    /// Inverse of [`from_latlon`](Self::from_latlon). Takes `x`/`y` in meters
    /// relative to `lon0` and the equator and returns `(lat, lon)` in degrees.
    pub fn to_latlon(&self, lon0: f64, x: f64, y: f64) -> (f64, f64) {
        let e2 = self.e2;
        let ep2 = self.ep2;
        let e1 = (1. - (1. - e2).sqrt()) / (1. + (1. - e2).sqrt());

        let mu = y / self.k0 / (self.a * self.arc_factor());
        // Footpoint latitude
        let phi1 = mu
            + (3. * e1 / 2. - 27. * e1.powi(3) / 32.) * (2. * mu).sin()
            + (21. * e1.powi(2) / 16. - 55. * e1.powi(4) / 32.) * (4. * mu).sin()
            + (151. * e1.powi(3) / 96.) * (6. * mu).sin();

        let sin2 = phi1.sin().powi(2);
        let n1 = self.a / (1. - e2 * sin2).sqrt();
        let t1 = phi1.tan().powi(2);
        let c1 = ep2 * phi1.cos().powi(2);
        let r1 = self.a * (1. - e2) / (1. - e2 * sin2).powf(1.5);
        let d = x / (n1 * self.k0);

        let lat = phi1
            - (n1 * phi1.tan() / r1)
                * (d.powi(2) / 2.
                    - (5. + 3. * t1 + 10. * c1 - 4. * c1.powi(2) - 9. * ep2) * d.powi(4) / 24.
                    + (61. + 90. * t1 + 298. * c1 + 45. * t1.powi(2) - 252. * ep2 - 3. * c1.powi(2))
                        * d.powi(6)
                        / 720.);

        let lon = (d - (1. + 2. * t1 + c1) * d.powi(3) / 6.
            + (5. - 2. * c1 + 28. * t1 - 3. * c1.powi(2) + 8. * ep2 + 24. * t1.powi(2)) * d.powi(5) / 120.)
            / phi1.cos();

        (lat * UTM_RAD2DEG, lon0 + lon * UTM_RAD2DEG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_meridian_has_no_offset() {
        let tm = TransverseMercator::utm(&Ellipsoid::wgs84());
        let (x, y) = tm.from_latlon(15., 0., 15.);
        assert!(x.abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn forward_then_inverse() {
        let tm = TransverseMercator::utm(&Ellipsoid::wgs84());
        let (x, y) = tm.from_latlon(-75., 40.748333, -73.985278);
        assert!((x - 85_664.121).abs() < 1e-2);
        assert!((y - 4_511_315.4).abs() < 1.);

        let (lat, lon) = tm.to_latlon(-75., x, y);
        assert!((lat - 40.748333).abs() < 1e-6);
        assert!((lon + 73.985278).abs() < 1e-6);
    }
}
