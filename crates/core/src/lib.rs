//! flatgeo - cycle-safe flattening of nested integer lists, and great-circle
//! proximity filtering of located records.
//!
//! The two halves are independent:
//!
//! - [`nested`]: build a nested structure in a [`NestedArena`] and flatten it
//!   with [`flatten_recursive`] or [`flatten_iterative`].
//! - [`proximity`]: validate [`LocatedRecord`]s and keep those within a radius
//!   of a reference point, ordered by id.

pub mod error;
pub mod nested;
pub mod proximity;

pub use error::{FlatgeoError, Result};
pub use nested::{
    FlattenStrategy, ListId, NestedArena, Node, flatten, flatten_iterative, flatten_recursive,
};
pub use proximity::{
    Coordinates, DUBLIN_OFFICE, LocatedRecord, LocatedRecordBuilder, MEAN_EARTH_RADIUS_KM,
    ProximityFilter, ProximityParams, within_radius,
};
