//! Located records.
//!
//! A record is built once and validated eagerly; there is no way to hold a
//! record with a missing field or an out-of-range coordinate.

use crate::error::{FlatgeoError, Result};

use super::coordinates::Coordinates;

/// A named, uniquely identified point on the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedRecord {
    id: i64,
    name: String,
    coordinates: Coordinates,
}

impl LocatedRecord {
    /// Creates a record, validating that latitude is within `[-90, 90]` and
    /// longitude within `[-180, 180]`.
    pub fn new(id: i64, name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        check_range("latitude", latitude, 90.0)?;
        check_range("longitude", longitude, 180.0)?;
        Ok(Self {
            id,
            name: name.into(),
            coordinates: Coordinates::new(latitude, longitude),
        })
    }

    /// Starts a builder with every field absent.
    pub fn builder() -> LocatedRecordBuilder {
        LocatedRecordBuilder::default()
    }

    pub const fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    pub const fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }

    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Great-circle distance in kilometres from this record to `there`.
    pub fn distance_to(&self, there: &Coordinates) -> f64 {
        self.coordinates.distance_to(there)
    }
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<()> {
    // NaN fails `contains`, so it is reported as out of range too.
    if (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(FlatgeoError::OutOfRange { field, value })
    }
}

/// Builder for [`LocatedRecord`] when fields arrive one at a time,
/// e.g. from a parsed line of input.
#[derive(Debug, Clone, Default)]
pub struct LocatedRecordBuilder {
    id: Option<i64>,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl LocatedRecordBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    /// Builds the record.
    ///
    /// # Errors
    /// [`FlatgeoError::MissingFields`] naming every absent field, or
    /// [`FlatgeoError::OutOfRange`] for an invalid coordinate.
    pub fn build(self) -> Result<LocatedRecord> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push("id");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.latitude.is_none() {
            missing.push("latitude");
        }
        if self.longitude.is_none() {
            missing.push("longitude");
        }

        match (self.id, self.name, self.latitude, self.longitude) {
            (Some(id), Some(name), Some(latitude), Some(longitude)) => {
                LocatedRecord::new(id, name, latitude, longitude)
            }
            _ => Err(FlatgeoError::MissingFields { fields: missing }),
        }
    }
}
