//! Nested node types and the arena that owns their lists.
//!
//! Lists are stored by index in a [`NestedArena`] and referenced through
//! [`ListId`] handles, so a list can contain a handle to itself or to any of
//! its ancestors. Identity is the handle, never the contents.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{FlatgeoError, Result};

static ARENA_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Handle to a list stored in a [`NestedArena`].
///
/// Carries the id of the arena that issued it, so a handle from one arena
/// never resolves to an unrelated list in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId {
    arena: u64,
    index: usize,
}

impl ListId {
    /// Position of the list within its arena.
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.arena, self.index)
    }
}

/// A single element of a nested structure.
///
/// Only `Int` and `List` carry meaning for flattening; every other variant
/// is a malformed element and is skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Null element
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer leaf
    Int(i64),
    /// Real (floating point) value
    Real(f64),
    /// Text value
    Text(String),
    /// Handle to a nested list
    List(ListId),
}

impl Node {
    /// Type name for diagnostics
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<ListId> for Node {
    fn from(id: ListId) -> Self {
        Self::List(id)
    }
}

/// Owns every list of one nested structure.
///
/// Lists are only appended to while the structure is being built; flattening
/// borrows the arena immutably.
#[derive(Debug)]
pub struct NestedArena {
    instance: u64,
    lists: Vec<Vec<Node>>,
}

impl Default for NestedArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NestedArena {
    pub fn new() -> Self {
        Self {
            instance: ARENA_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed),
            lists: Vec::new(),
        }
    }

    /// Stores a finished list and returns its handle.
    pub fn alloc(&mut self, items: Vec<Node>) -> ListId {
        let id = ListId {
            arena: self.instance,
            index: self.lists.len(),
        };
        self.lists.push(items);
        id
    }

    /// Stores a list and wraps its handle as a [`Node::List`].
    pub fn list<I>(&mut self, items: I) -> Node
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Node::List(self.alloc(items.into_iter().map(Into::into).collect()))
    }

    /// Allocates an empty list whose handle can be referenced before its
    /// contents are pushed. This is how cycles are built.
    pub fn reserve(&mut self) -> ListId {
        self.alloc(Vec::new())
    }

    /// Appends `node` to the list behind `id`.
    pub fn push(&mut self, id: ListId, node: Node) -> Result<()> {
        if id.arena != self.instance {
            return Err(FlatgeoError::UnknownList(id));
        }
        let list = self
            .lists
            .get_mut(id.index)
            .ok_or(FlatgeoError::UnknownList(id))?;
        list.push(node);
        Ok(())
    }

    /// Resolves a handle. Returns `None` for handles issued by another arena.
    pub fn get(&self, id: ListId) -> Option<&[Node]> {
        if id.arena != self.instance {
            return None;
        }
        self.lists.get(id.index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
