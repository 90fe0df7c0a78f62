pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for entity schema identifiers.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for attribute, reference, and collection identifiers.
pub const MAX_MEMBER_NAME_LEN: usize = 64;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::AttributeKind,
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("schema validation failed: {0}")]
    Validation(error::ErrorTree),
}
