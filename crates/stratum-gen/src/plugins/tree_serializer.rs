use crate::{
    context::GenerationContext,
    contribution::{Method, Receiver, TraitImpl},
    plugin::{GeneratorPlugin, PluginId},
    plugins::{AttributeAccessorPlugin, CollectionAccessorPlugin, ReferenceAccessorPlugin},
};
use stratum_schema::types::AttributeKind;

///
/// TreeSerializerPlugin
///
/// Implements `TreeSerialize` for the class: cycle-guarded export into the
/// ordered mapping. Field order is attributes, references, collections,
/// dynamic collections. References nest with the shared detector; embedded
/// objects serialize through their own tree with a fresh one.
///

pub struct TreeSerializerPlugin;

impl TreeSerializerPlugin {
    pub const ID: PluginId = "tree-serializer";
}

impl GeneratorPlugin for TreeSerializerPlugin {
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
            let mut method = Method::new("to_tree_with", Receiver::Ref)
                .with_param("detector", "&mut CycleDetector")
                .returns("Tree");

            method.line("if !detector.can_proceed(ObjectIdentity::of(self)) {");
            method.line("    return Tree::Null;");
            method.line("}");
            method.line("let mut data = TreeMap::new();");

            for attribute in view.attributes() {
                let name = &attribute.name;
                let entry = match attribute.kind {
                    AttributeKind::Bool | AttributeKind::Int | AttributeKind::Float => {
                        format!("Tree::from(self.{name})")
                    }
                    AttributeKind::Text | AttributeKind::List => {
                        format!("Tree::from(self.{name}.clone())")
                    }
                    AttributeKind::DateTime | AttributeKind::Date | AttributeKind::Time => {
                        format!("self.{name}.map_or(Tree::Null, |v| Tree::from(v.to_string()))")
                    }
                    AttributeKind::Enum => {
                        format!("self.{name}.map_or(Tree::Null, |v| Tree::from(v.as_value()))")
                    }
                    AttributeKind::Object => format!(
                        "self.{name}.as_ref().map_or(Tree::Null, |value| value.borrow().to_tree())"
                    ),
                };
                method.line(format!("data.insert(\"{name}\", {entry});"));
            }

            for reference in view.references() {
                let name = &reference.name;
                method.line(format!(
                    "data.insert(\"{name}\", self.{name}.as_ref().map_or(Tree::Null, |foreign| foreign.borrow().to_tree_with(detector)));"
                ));
            }

            let collections = view
                .collections()
                .iter()
                .map(|c| c.name.clone())
                .chain(view.dynamic_collections().iter().map(|d| d.name.clone()));
            for name in collections {
                method.line(format!("let mut {name} = Vec::new();"));
                method.line(format!(
                    "for child in self.{name}.as_deref().unwrap_or_default() {{"
                ));
                method.line(format!(
                    "    {name}.push(child.borrow().to_tree_with(detector));"
                ));
                method.line("}");
                method.line(format!("data.insert(\"{name}\", Tree::List({name}));"));
            }

            method.line("Tree::Map(data)");

            plan.add_trait_impl(TraitImpl::new("TreeSerialize").with_method(method));
        });
    }
}
