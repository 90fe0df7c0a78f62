use crate::{error::ErrorTree, node::Entity, validate::validate_schema};
use serde::Serialize;

///
/// Schema
///
/// The entity graph handed over by an external loader. `build` is the only
/// constructor and runs staged validation, so a `Schema` value is always
/// internally consistent. Read-only afterwards.
///

#[derive(Clone, Debug, Serialize)]
pub struct Schema {
    entities: Vec<Entity>,
}

impl Schema {
    pub fn build(entities: Vec<Entity>) -> Result<Self, ErrorTree> {
        let schema = Self { entities };
        validate_schema(&schema)?;

        Ok(schema)
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }
}
