//! Schema validation orchestration and shared helpers.

pub(crate) mod naming;
pub(crate) mod relation;

use crate::{
    error::ErrorTree,
    node::{Schema, ValidateNode},
};

/// Run full schema validation in a staged, deterministic order.
pub(crate) fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(schema);

    // Phase 2: enforce schema-wide invariants.
    validate_global(schema, &mut errors);

    errors.result()
}

// Validate every node, attaching findings under entity/member routes.
fn validate_nodes(schema: &Schema) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for entity in schema.entities() {
        let mut entity_errors = ErrorTree::new();
        if let Err(e) = entity.validate() {
            entity_errors.merge(e);
        }

        for attribute in &entity.attributes {
            merge_member(&mut entity_errors, &attribute.name, attribute.validate());
        }
        for reference in &entity.references {
            merge_member(&mut entity_errors, &reference.name, reference.validate());
        }
        for collection in &entity.collections {
            merge_member(&mut entity_errors, &collection.name, collection.validate());
        }
        for dynamic in &entity.dynamic_collections {
            merge_member(&mut entity_errors, &dynamic.name, dynamic.validate());
        }

        errors.merge_at(entity.name.clone(), entity_errors);
    }

    errors
}

fn merge_member(errors: &mut ErrorTree, route: &str, result: Result<(), ErrorTree>) {
    if let Err(e) = result {
        errors.merge_at(route.to_string(), e);
    }
}

// Run global validation passes that require a full schema view.
fn validate_global(schema: &Schema, errors: &mut ErrorTree) {
    relation::validate_references(schema, errors);
    relation::validate_collections(schema, errors);
}
