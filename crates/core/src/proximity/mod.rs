//! Great-circle proximity filtering of located records.

pub mod coordinates;
pub mod filter;
pub mod record;

pub use coordinates::{Coordinates, DUBLIN_OFFICE, MEAN_EARTH_RADIUS_KM};
pub use filter::{ProximityFilter, ProximityParams, within_radius};
pub use record::{LocatedRecord, LocatedRecordBuilder};
