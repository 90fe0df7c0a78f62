use crate::{
    context::GenerationContext,
    contribution::{Method, Receiver, TraitImpl},
    plugin::{GeneratorPlugin, PluginId},
    plugins::{AttributeAccessorPlugin, CollectionAccessorPlugin, ReferenceAccessorPlugin},
};
use stratum_schema::types::AttributeKind;

///
/// TreeDeserializerPlugin
///
/// Implements `TreeDeserialize` for the class: lenient ingest from the
/// mapping. Scalars and references degrade to null on absence; embedded
/// objects and collections are left untouched when their key is missing.
/// Collection members are added through `add_to_`, never by replacing
/// storage, so back-references are established.
///

pub struct TreeDeserializerPlugin;

impl TreeDeserializerPlugin {
    pub const ID: PluginId = "tree-deserializer";
}

// Accessor on TreeMap for each scalar kind.
const fn scalar_accessor(kind: AttributeKind) -> Option<&'static str> {
    match kind {
        AttributeKind::Bool => Some("get_bool"),
        AttributeKind::Int => Some("get_i64"),
        AttributeKind::Float => Some("get_f64"),
        AttributeKind::Text => Some("get_text"),
        AttributeKind::List => Some("get_tree"),
        AttributeKind::DateTime => Some("get_timestamp"),
        AttributeKind::Date => Some("get_date"),
        AttributeKind::Time => Some("get_time"),
        AttributeKind::Enum | AttributeKind::Object => None,
    }
}

impl GeneratorPlugin for TreeDeserializerPlugin {
    fn id(&self) -> PluginId {
        Self::ID
    }

    fn dependencies(&self) -> &[PluginId] {
        &[
            AttributeAccessorPlugin::ID,
            ReferenceAccessorPlugin::ID,
            CollectionAccessorPlugin::ID,
        ]
    }

    fn generate(&self, ctx: &mut GenerationContext) {
        ctx.contribute(Self::ID, |plan, view| {
            let mut method = Method::new("from_tree", Receiver::Handle)
                .with_param("data", "&TreeMap");

            // scalar and reference mutation under one borrow, released
            // before collection ingest re-enters through add_to_
            method.line("{");
            method.line("    let mut entity = this.borrow_mut();");

            for attribute in view.attributes() {
                let name = &attribute.name;
                match attribute.kind {
                    AttributeKind::Enum => {
                        method.line(format!(
                            "    entity.set_{name}_from_value(data.get_str(\"{name}\"));"
                        ));
                    }
                    AttributeKind::Object => {
                        let ty = attribute.type_name.as_deref().unwrap_or_default();
                        method.line(format!("    if let Some(value) = data.get_map(\"{name}\") {{"));
                        method.line(format!(
                            "        entity.set_{name}(Some({ty}::new_from_tree(value)));"
                        ));
                        method.line("    }");
                    }
                    kind => {
                        if let Some(accessor) = scalar_accessor(kind) {
                            method.line(format!(
                                "    entity.set_{name}(data.{accessor}(\"{name}\"));"
                            ));
                        }
                    }
                }
            }

            for reference in view.references() {
                let name = &reference.name;
                let foreign = &reference.foreign_entity;
                method.line(format!(
                    "    entity.set_{name}(data.get_map(\"{name}\").map({foreign}::new_from_tree));"
                ));
            }

            method.line("}");

            for collection in view.collections() {
                let name = &collection.name;
                let foreign = &collection.foreign_entity;
                method.line(format!("if let Some(children) = data.get_list(\"{name}\") {{"));
                method.line("    for child in children {");
                method.line("        if let Some(child) = child.as_map() {");
                method.line(format!(
                    "            Self::add_to_{name}(this, {foreign}::new_from_tree(child));"
                ));
                method.line("        }");
                method.line("    }");
                method.line("}");
            }

            for dynamic in view.dynamic_collections() {
                let name = &dynamic.name;
                let foreign = &dynamic.foreign_entity;
                method.line(format!("if let Some(children) = data.get_list(\"{name}\") {{"));
                method.line("    for child in children {");
                method.line("        if let Some(child) = child.as_map() {");
                method.line(format!(
                    "            Self::add_to_{name}(this, {foreign}::new_from_tree(child));"
                ));
                method.line("        }");
                method.line("    }");
                method.line("}");
            }

            plan.add_trait_impl(TraitImpl::new("TreeDeserialize").with_method(method));
        });
    }
}
