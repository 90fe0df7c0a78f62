use crate::{
    context::GenerationContext,
    contribution::ClassPlan,
    plugin::{PluginId, PluginRegistry},
    resolver::{PluginResolver, ResolveError},
};
use stratum_schema::node::{Entity, Schema};
use thiserror::Error as ThisError;

///
/// GenerateError
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

///
/// EntityGenerator
///
/// Per-entity driver: resolve the requested units once, run them over a
/// fresh context, hand the accumulated plan to the caller. Entities are
/// fully independent; a configuration error aborts the affected entity
/// only, and an outer driver may process entities in parallel.
///

pub struct EntityGenerator<'a> {
    schema: &'a Schema,
    registry: &'a PluginRegistry,
}

impl<'a> EntityGenerator<'a> {
    #[must_use]
    pub const fn new(schema: &'a Schema, registry: &'a PluginRegistry) -> Self {
        Self { schema, registry }
    }

    pub fn generate(
        &self,
        entity: &Entity,
        requested: &[PluginId],
    ) -> Result<ClassPlan, GenerateError> {
        let order = PluginResolver::new(self.registry).resolve(requested)?;

        let mut ctx = GenerationContext::new(self.schema, entity);
        for plugin in order {
            plugin.generate(&mut ctx);
        }

        Ok(ctx.into_plan())
    }

    /// Generate every entity with the same requested set. Results are
    /// per-entity; one failure leaves the others intact.
    pub fn generate_all(
        &self,
        requested: &[PluginId],
    ) -> Vec<(String, Result<ClassPlan, GenerateError>)> {
        self.schema
            .entities()
            .iter()
            .map(|entity| (entity.name.clone(), self.generate(entity, requested)))
            .collect()
    }
}
