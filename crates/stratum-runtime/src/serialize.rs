use crate::{
    cycle::CycleDetector,
    shared::{Shared, shared},
    tree::{Tree, TreeMap},
};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("value at '{path}' is not JSON-encodable: non-finite number")]
    NonFiniteNumber { path: String },

    #[error("encode failed: {0}")]
    Encode(String),
}

///
/// ParseError
///

#[derive(Debug, ThisError)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("JSON root must be an object")]
    RootNotObject,
}

///
/// TreeSerialize
///
/// Export half of the graph serialization contract. `to_tree_with` threads
/// one detector through the whole call tree; a node already visited in that
/// tree serializes as the omitted marker (`Tree::Null`) instead of
/// descending. Cycles are broken this way, never reported as errors.
///

pub trait TreeSerialize {
    fn to_tree_with(&self, detector: &mut CycleDetector) -> Tree;

    /// Serialize with a detector scoped to this call. Callers serializing a
    /// forest that shares nodes thread their own detector instead.
    fn to_tree(&self) -> Tree {
        let mut detector = CycleDetector::new();
        self.to_tree_with(&mut detector)
    }

    /// JSON text of exactly the mapping `to_tree` produces.
    fn to_json(&self) -> Result<String, SerializeError> {
        self.to_tree().to_json()
    }
}

///
/// TreeDeserialize
///
/// Import half of the contract, defined over the shared handle so collection
/// ingest can establish back-references. No cycle detection: ingest only
/// constructs descendants, never revisits self.
///

pub trait TreeDeserialize: Default {
    /// Apply a mapping to an existing instance. Missing keys degrade per
    /// field: scalars and references to null, embedded objects and
    /// collections left untouched.
    fn from_tree(this: &Shared<Self>, data: &TreeMap);

    /// Construct a fresh instance from a mapping.
    #[must_use]
    fn new_from_tree(data: &TreeMap) -> Shared<Self> {
        let this = shared(Self::default());
        Self::from_tree(&this, data);
        this
    }

    /// Decode JSON text and apply it. The text is parsed in full before any
    /// mutation; on malformed input or a non-object root the target is left
    /// entirely unchanged.
    fn from_json(this: &Shared<Self>, text: &str) -> Result<(), ParseError> {
        let tree = Tree::from_json(text)?;
        match tree {
            Tree::Map(data) => {
                Self::from_tree(this, &data);
                Ok(())
            }
            _ => Err(ParseError::RootNotObject),
        }
    }

    /// Construct a fresh instance from JSON text.
    fn new_from_json(text: &str) -> Result<Shared<Self>, ParseError> {
        let this = shared(Self::default());
        Self::from_json(&this, text)?;
        Ok(this)
    }
}
