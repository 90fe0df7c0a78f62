use crate::{
    context::GenerationContext,
    contribution::{Method, Receiver},
    plugin::{GeneratorPlugin, PluginId},
    plugins::MemberPlugin,
};

///
/// CollectionAccessorPlugin
///
/// Collection getter plus the `add_to_` mutator, the only sanctioned way
/// to grow a collection. The mutator overwrites the child's inverse
/// reference unconditionally (last add wins, no detach), lazily initializes
/// storage, and appends; duplicates are permitted.
///

pub struct CollectionAccessorPlugin;

impl CollectionAccessorPlugin {
    pub const ID: PluginId = "collection-accessor";
}

impl GeneratorPlugin for CollectionAccessorPlugin {
    fn id(&self) -> PluginId {
        Self::ID
    }

    fn dependencies(&self) -> &[PluginId] {
        &[MemberPlugin::ID]
    }

    fn generate(&self, ctx: &mut GenerationContext) {
        ctx.contribute(Self::ID, |plan, view| {
            for collection in view.collections() {
                let name = &collection.name;
                let foreign = &collection.foreign_entity;

                let mut getter = Method::new(format!("get_{name}"), Receiver::Ref)
                    .returns(format!("&[Shared<{foreign}>]"));
                getter.line(format!("self.{name}.as_deref().unwrap_or_default()"));
                plan.add_method(getter);

                let mut add_to = Method::new(format!("add_to_{name}"), Receiver::Handle)
                    .with_param("child", format!("Shared<{foreign}>"));
                add_to.line(format!(
                    "child.borrow_mut().set_{}(Some(Shared::clone(this)));",
                    collection.foreign_reference
                ));
                add_to.line(format!(
                    "this.borrow_mut().{name}.get_or_insert_with(Vec::new).push(child);"
                ));
                plan.add_method(add_to);
            }

            // dynamic collections carry no inverse reference to sync
            for dynamic in view.dynamic_collections() {
                let name = &dynamic.name;
                let foreign = &dynamic.foreign_entity;

                let mut getter = Method::new(format!("get_{name}"), Receiver::Ref)
                    .returns(format!("&[Shared<{foreign}>]"));
                getter.line(format!("self.{name}.as_deref().unwrap_or_default()"));
                plan.add_method(getter);

                let mut add_to = Method::new(format!("add_to_{name}"), Receiver::Handle)
                    .with_param("child", format!("Shared<{foreign}>"));
                add_to.line(format!(
                    "this.borrow_mut().{name}.get_or_insert_with(Vec::new).push(child);"
                ));
                plan.add_method(add_to);
            }
        });
    }
}
