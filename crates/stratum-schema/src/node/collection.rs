use crate::{err, error::ErrorTree, node::ValidateNode, validate::naming::validate_ident};
use serde::Serialize;

///
/// Collection
///
/// One-to-many inverse of exactly one Reference declared on the foreign
/// entity. The inverse must exist; the global validation pass treats a
/// missing one as fatal.
///

#[derive(Clone, Debug, Serialize)]
pub struct Collection {
    pub name: String,
    pub foreign_entity: String,
    pub foreign_reference: String,
}

impl Collection {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        foreign_entity: impl Into<String>,
        foreign_reference: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            foreign_entity: foreign_entity.into(),
            foreign_reference: foreign_reference.into(),
        }
    }
}

impl ValidateNode for Collection {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_ident(&self.name) {
            err!(errs, "collection name: {e}");
        }
        if self.foreign_entity.is_empty() {
            err!(errs, "collection '{0}' names no foreign entity", self.name);
        }
        if self.foreign_reference.is_empty() {
            err!(
                errs,
                "collection '{0}' names no inverse reference",
                self.name
            );
        }

        errs.result()
    }
}

///
/// DynamicCollection
///
/// Polymorphic one-to-many. Members are constructed through the foreign
/// entity's factory at ingest time and carry no inverse reference, so only
/// foreign-entity existence is enforced.
///

#[derive(Clone, Debug, Serialize)]
pub struct DynamicCollection {
    pub name: String,
    pub foreign_entity: String,
}

impl DynamicCollection {
    #[must_use]
    pub fn new(name: impl Into<String>, foreign_entity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foreign_entity: foreign_entity.into(),
        }
    }
}

impl ValidateNode for DynamicCollection {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_ident(&self.name) {
            err!(errs, "dynamic collection name: {e}");
        }
        if self.foreign_entity.is_empty() {
            err!(
                errs,
                "dynamic collection '{0}' names no foreign entity",
                self.name
            );
        }

        errs.result()
    }
}
