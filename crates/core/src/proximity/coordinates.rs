//! Coordinates and great-circle distance.

/// Mean Earth radius in kilometres.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// Default reference point (Dublin office).
pub const DUBLIN_OFFICE: Coordinates = Coordinates::new(53.3381985, -6.2592576);

/// A latitude/longitude pair in degrees.
///
/// No range validation happens here; [`LocatedRecord`](super::LocatedRecord)
/// validates the coordinates it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance in kilometres, using the spherical law of cosines
    /// and [`MEAN_EARTH_RADIUS_KM`].
    ///
    /// Identical points are exactly 0. The cosine is clamped to `[-1, 1]` so
    /// rounding drift on near-identical or antipodal points never yields NaN.
    pub fn distance_to(&self, there: &Self) -> f64 {
        if self == there {
            return 0.0;
        }

        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lat2 = there.latitude.to_radians();
        let lon2 = there.longitude.to_radians();

        let delta_longitude = (lon1 - lon2).abs();
        let cos_angle =
            lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_longitude.cos();

        cos_angle.clamp(-1.0, 1.0).acos() * MEAN_EARTH_RADIUS_KM
    }
}
