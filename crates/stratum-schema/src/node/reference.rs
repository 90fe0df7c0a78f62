use crate::{err, error::ErrorTree, node::ValidateNode, validate::naming::validate_ident};
use serde::Serialize;

///
/// ReferenceMapping
///
/// One (local attribute, foreign attribute) pair. Setting the reference
/// copies the foreign attribute's value onto the local attribute.
///

#[derive(Clone, Debug, Serialize)]
pub struct ReferenceMapping {
    pub local_attribute: String,
    pub foreign_attribute: String,
}

impl ReferenceMapping {
    #[must_use]
    pub fn new(local_attribute: impl Into<String>, foreign_attribute: impl Into<String>) -> Self {
        Self {
            local_attribute: local_attribute.into(),
            foreign_attribute: foreign_attribute.into(),
        }
    }
}

///
/// Reference
///
/// Many-to-one pointer to a foreign entity, with the ordered mapping list
/// used to denormalize the foreign key onto the local entity.
///

#[derive(Clone, Debug, Serialize)]
pub struct Reference {
    pub name: String,
    pub foreign_entity: String,
    pub mappings: Vec<ReferenceMapping>,
}

impl Reference {
    #[must_use]
    pub fn new(name: impl Into<String>, foreign_entity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foreign_entity: foreign_entity.into(),
            mappings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_mapping(
        mut self,
        local_attribute: impl Into<String>,
        foreign_attribute: impl Into<String>,
    ) -> Self {
        self.mappings
            .push(ReferenceMapping::new(local_attribute, foreign_attribute));
        self
    }
}

impl ValidateNode for Reference {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_ident(&self.name) {
            err!(errs, "reference name: {e}");
        }
        if self.foreign_entity.is_empty() {
            err!(errs, "reference '{0}' names no foreign entity", self.name);
        }
        if self.mappings.is_empty() {
            err!(errs, "reference '{0}' has no attribute mappings", self.name);
        }

        errs.result()
    }
}
