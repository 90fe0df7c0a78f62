use crate::{contribution::ClassPlan, plugin::PluginId};
use std::collections::BTreeSet;
use stratum_schema::node::{
    Attribute, Collection, DynamicCollection, Entity, Reference, Schema,
};

///
/// EntityView
///
/// Read-only window onto one entity and its schema for units to query.
///

pub struct EntityView<'a> {
    schema: &'a Schema,
    entity: &'a Entity,
}

impl<'a> EntityView<'a> {
    #[must_use]
    pub const fn entity(&self) -> &'a Entity {
        self.entity
    }

    #[must_use]
    pub fn attributes(&self) -> &'a [Attribute] {
        &self.entity.attributes
    }

    #[must_use]
    pub fn references(&self) -> &'a [Reference] {
        &self.entity.references
    }

    #[must_use]
    pub fn collections(&self) -> &'a [Collection] {
        &self.entity.collections
    }

    #[must_use]
    pub fn dynamic_collections(&self) -> &'a [DynamicCollection] {
        &self.entity.dynamic_collections
    }

    #[must_use]
    pub fn foreign_entity(&self, name: &str) -> Option<&'a Entity> {
        self.schema.entity(name)
    }
}

///
/// GenerationContext
///
/// Per-entity accumulator units mutate. `contribute` runs a mutation at
/// most once per unit id; repeated calls are no-ops, which is what makes
/// composition idempotent under diamond dependencies. Single entity,
/// single-threaded; independent entities' contexts share no state.
///

pub struct GenerationContext<'a> {
    schema: &'a Schema,
    entity: &'a Entity,
    executed: BTreeSet<PluginId>,
    plan: ClassPlan,
}

impl<'a> GenerationContext<'a> {
    #[must_use]
    pub fn new(schema: &'a Schema, entity: &'a Entity) -> Self {
        Self {
            schema,
            entity,
            executed: BTreeSet::new(),
            plan: ClassPlan::new(entity.name.clone()),
        }
    }

    /// Execute `mutation` against the accumulated plan exactly once per
    /// `unit`. Already-executed ids are silent no-ops.
    pub fn contribute(
        &mut self,
        unit: PluginId,
        mutation: impl FnOnce(&mut ClassPlan, &EntityView<'_>),
    ) {
        if !self.executed.insert(unit) {
            return;
        }
        let view = EntityView {
            schema: self.schema,
            entity: self.entity,
        };
        mutation(&mut self.plan, &view);
    }

    #[must_use]
    pub fn has_executed(&self, unit: PluginId) -> bool {
        self.executed.contains(unit)
    }

    #[must_use]
    pub fn into_plan(self) -> ClassPlan {
        self.plan
    }
}
