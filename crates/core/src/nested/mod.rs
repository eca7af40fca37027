//! Nested integer structures and their flattening.

pub mod flatten;
pub mod node;

pub use flatten::{FlattenStrategy, flatten, flatten_iterative, flatten_recursive};
pub use node::{ListId, NestedArena, Node};
