use crate::{
    err,
    error::ErrorTree,
    node::{Entity, Schema},
};
use std::collections::BTreeMap;

// Build a name -> entity map once; both passes resolve against it.
fn entity_map(schema: &Schema) -> BTreeMap<&str, &Entity> {
    schema
        .entities()
        .iter()
        .map(|entity| (entity.name.as_str(), entity))
        .collect()
}

/// Validate that every reference resolves: the foreign entity exists and each
/// mapping names a real attribute on both sides.
pub(crate) fn validate_references(schema: &Schema, errs: &mut ErrorTree) {
    let entities = entity_map(schema);

    for entity in schema.entities() {
        for reference in &entity.references {
            let Some(foreign) = entities.get(reference.foreign_entity.as_str()) else {
                err!(
                    errs,
                    "entity '{0}', reference '{1}', points to unknown entity '{2}'",
                    entity.name,
                    reference.name,
                    reference.foreign_entity
                );
                continue;
            };

            for mapping in &reference.mappings {
                if entity.attribute(&mapping.local_attribute).is_none() {
                    err!(
                        errs,
                        "entity '{0}', reference '{1}', maps unknown local attribute '{2}'",
                        entity.name,
                        reference.name,
                        mapping.local_attribute
                    );
                }
                if foreign.attribute(&mapping.foreign_attribute).is_none() {
                    err!(
                        errs,
                        "entity '{0}', reference '{1}', maps unknown attribute '{2}' on entity '{3}'",
                        entity.name,
                        reference.name,
                        mapping.foreign_attribute,
                        foreign.name
                    );
                }
            }
        }
    }
}

/// Validate that every collection has its matching inverse reference on the
/// foreign entity, and that the inverse points back here. A missing inverse
/// is fatal, never a silent skip.
pub(crate) fn validate_collections(schema: &Schema, errs: &mut ErrorTree) {
    let entities = entity_map(schema);

    for entity in schema.entities() {
        for collection in &entity.collections {
            let Some(foreign) = entities.get(collection.foreign_entity.as_str()) else {
                err!(
                    errs,
                    "entity '{0}', collection '{1}', points to unknown entity '{2}'",
                    entity.name,
                    collection.name,
                    collection.foreign_entity
                );
                continue;
            };

            let Some(inverse) = foreign.reference(&collection.foreign_reference) else {
                err!(
                    errs,
                    "entity '{0}', collection '{1}', has no matching reference '{2}' on entity '{3}'",
                    entity.name,
                    collection.name,
                    collection.foreign_reference,
                    foreign.name
                );
                continue;
            };

            if inverse.foreign_entity != entity.name {
                err!(
                    errs,
                    "entity '{0}', collection '{1}': reference '{2}' on entity '{3}' points to '{4}', not back here",
                    entity.name,
                    collection.name,
                    inverse.name,
                    foreign.name,
                    inverse.foreign_entity
                );
            }
        }

        for dynamic in &entity.dynamic_collections {
            if !entities.contains_key(dynamic.foreign_entity.as_str()) {
                err!(
                    errs,
                    "entity '{0}', dynamic collection '{1}', points to unknown entity '{2}'",
                    entity.name,
                    dynamic.name,
                    dynamic.foreign_entity
                );
            }
        }
    }
}
