use crate::{
    err,
    error::ErrorTree,
    node::{Attribute, Collection, DynamicCollection, Reference, ValidateNode},
    validate::naming::validate_entity_name,
};
use serde::Serialize;
use std::collections::BTreeSet;

///
/// Entity
///

#[derive(Clone, Debug, Serialize)]
pub struct Entity {
    pub name: String,
    pub table: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dynamic_collections: Vec<DynamicCollection>,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            attributes: Vec::new(),
            references: Vec::new(),
            collections: Vec::new(),
            dynamic_collections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    #[must_use]
    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collections.push(collection);
        self
    }

    #[must_use]
    pub fn with_dynamic_collection(mut self, collection: DynamicCollection) -> Self {
        self.dynamic_collections.push(collection);
        self
    }

    // lookups

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    #[must_use]
    pub fn reference(&self, name: &str) -> Option<&Reference> {
        self.references.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Primary-key attributes in declaration order.
    pub fn primary_key_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.primary_key)
    }

    #[must_use]
    pub fn has_primary_key(&self) -> bool {
        self.attributes.iter().any(|a| a.primary_key)
    }
}

impl ValidateNode for Entity {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_entity_name(&self.name) {
            errs.add(e);
        }
        if self.table.is_empty() {
            err!(errs, "entity '{0}' has an empty table name", self.name);
        }

        // member names must be unique across attributes, references,
        // collections, and dynamic collections; generated members share one
        // namespace
        let mut seen = BTreeSet::new();
        let members = self
            .attributes
            .iter()
            .map(|a| a.name.as_str())
            .chain(self.references.iter().map(|r| r.name.as_str()))
            .chain(self.collections.iter().map(|c| c.name.as_str()))
            .chain(self.dynamic_collections.iter().map(|d| d.name.as_str()));
        for name in members {
            if !seen.insert(name) {
                err!(errs, "duplicate member name '{name}'");
            }
        }

        errs.result()
    }
}
