mod attribute;
mod collection;
mod entity;
mod reference;
mod schema;

pub use attribute::Attribute;
pub use collection::{Collection, DynamicCollection};
pub use entity::Entity;
pub use reference::{Reference, ReferenceMapping};
pub use schema::Schema;

use crate::error::ErrorTree;

///
/// ValidateNode
///
/// Local (single-node) invariants. Cross-node invariants live in the global
/// validation pass, which sees the whole schema.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}
