//! Radius filtering of located records.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::{FlatgeoError, Result};

use super::coordinates::{Coordinates, DUBLIN_OFFICE};
use super::record::LocatedRecord;

/// Parameters for a proximity query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityParams {
    /// Point distances are measured from.
    pub reference: Coordinates,

    /// Records at or under this great-circle distance (km) are retained.
    pub radius_km: f64,
}

impl Default for ProximityParams {
    fn default() -> Self {
        Self {
            reference: DUBLIN_OFFICE,
            radius_km: 100.0,
        }
    }
}

impl ProximityParams {
    /// Creates new proximity parameters.
    ///
    /// # Panics
    /// Panics if `radius_km` is negative, NaN or infinite.
    pub fn new(reference: Coordinates, radius_km: f64) -> Self {
        assert!(
            radius_km.is_finite() && radius_km >= 0.0,
            "radius_km should be a finite, non-negative number of kilometres"
        );
        Self {
            reference,
            radius_km,
        }
    }
}

/// Filters a validated set of records by distance to a reference point.
#[derive(Debug, Clone, Copy)]
pub struct ProximityFilter<'a> {
    records: &'a [LocatedRecord],
}

impl<'a> ProximityFilter<'a> {
    /// Wraps `records`, rejecting collections whose ids are not unique.
    pub fn new(records: &'a [LocatedRecord]) -> Result<Self> {
        let mut seen = FxHashSet::with_capacity_and_hasher(records.len(), Default::default());
        for record in records {
            if !seen.insert(record.id()) {
                return Err(FlatgeoError::DuplicateId(record.id()));
            }
        }
        Ok(Self { records })
    }

    pub const fn len(&self) -> usize {
        self.records.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns every record within `radius_km` of `reference`, ascending by id.
    ///
    /// A NaN or negative radius matches nothing.
    pub fn within_radius(&self, reference: &Coordinates, radius_km: f64) -> Vec<&'a LocatedRecord> {
        let mut within: Vec<&'a LocatedRecord> = self
            .records
            .iter()
            .filter(|record| record.distance_to(reference) <= radius_km)
            .collect();
        within.sort_unstable_by_key(|record| record.id());

        debug!(
            total = self.records.len(),
            matched = within.len(),
            radius_km,
            "filtered records by distance"
        );
        within
    }

    /// Same as [`within_radius`](Self::within_radius), using `params`.
    pub fn within(&self, params: &ProximityParams) -> Vec<&'a LocatedRecord> {
        self.within_radius(&params.reference, params.radius_km)
    }
}

/// Validates `records` and returns those within `radius_km` of `reference`,
/// ascending by id.
pub fn within_radius<'a>(
    records: &'a [LocatedRecord],
    reference: &Coordinates,
    radius_km: f64,
) -> Result<Vec<&'a LocatedRecord>> {
    Ok(ProximityFilter::new(records)?.within_radius(reference, radius_km))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_target_dublin_office() {
        let params = ProximityParams::default();
        assert_eq!(params.reference, DUBLIN_OFFICE);
        assert_eq!(params.radius_km, 100.0);
    }

    #[test]
    #[should_panic(expected = "radius_km")]
    fn negative_radius_params_panic() {
        ProximityParams::new(DUBLIN_OFFICE, -1.0);
    }

    #[test]
    fn nan_radius_matches_nothing() {
        let records = vec![LocatedRecord::new(1, "here", 53.3381985, -6.2592576).unwrap()];
        let filter = ProximityFilter::new(&records).unwrap();
        assert!(filter.within_radius(&DUBLIN_OFFICE, f64::NAN).is_empty());
        assert_eq!(filter.within_radius(&DUBLIN_OFFICE, 0.0).len(), 1);
    }
}
