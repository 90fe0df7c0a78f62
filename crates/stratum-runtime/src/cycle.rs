use std::collections::BTreeSet;

///
/// ObjectIdentity
///
/// Physical identity of a live graph node: the address of the value for the
/// duration of one serialization call. Value-equal but distinct objects have
/// distinct identities; nothing reachable from a single call tree can move
/// while the call runs.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct ObjectIdentity(usize);

impl ObjectIdentity {
    #[must_use]
    pub fn of<T>(value: &T) -> Self {
        Self(std::ptr::from_ref(value) as usize)
    }
}

///
/// CycleDetector
///
/// Visited-set scoped to one outer serialization call, or explicitly threaded
/// by the caller to merge scopes across a forest of calls. Never shared
/// across concurrent serializations of overlapping graphs.
///

#[derive(Debug, Default)]
pub struct CycleDetector {
    visited: BTreeSet<ObjectIdentity>,
}

impl CycleDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True (and marks visited) on the first occurrence of an identity,
    /// false on every subsequent occurrence within this instance.
    pub fn can_proceed(&mut self, identity: ObjectIdentity) -> bool {
        self.visited.insert(identity)
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
