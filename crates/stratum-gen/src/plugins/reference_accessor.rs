use crate::{
    context::GenerationContext,
    contribution::{Method, Receiver},
    plugin::{GeneratorPlugin, PluginId},
    plugins::MemberPlugin,
};

///
/// ReferenceAccessorPlugin
///
/// Getter/setter per many-to-one reference. The setter also denormalizes
/// every mapped foreign-key attribute onto the local entity; assigning none
/// clears them the same way.
///

pub struct ReferenceAccessorPlugin;

impl ReferenceAccessorPlugin {
    pub const ID: PluginId = "reference-accessor";
}

impl GeneratorPlugin for ReferenceAccessorPlugin {
    fn id(&self) -> PluginId {
        Self::ID
    }

    fn dependencies(&self) -> &[PluginId] {
        &[MemberPlugin::ID]
    }

    fn generate(&self, ctx: &mut GenerationContext) {
        ctx.contribute(Self::ID, |plan, view| {
            for reference in view.references() {
                let name = &reference.name;
                let ty = format!("Option<Shared<{}>>", reference.foreign_entity);

                let mut getter = Method::new(format!("get_{name}"), Receiver::Ref).returns(&ty);
                getter.line(format!("self.{name}.clone()"));
                plan.add_method(getter);

                let mut setter =
                    Method::new(format!("set_{name}"), Receiver::Mut).with_param("value", &ty);
                let self_referential = reference.foreign_entity == view.entity().name;
                for mapping in &reference.mappings {
                    if self_referential {
                        // a self-typed handle can alias self during a
                        // self-add; try_borrow falls back to our own copy
                        setter.line(format!(
                            "self.{local} = value.as_ref().and_then(|foreign| foreign.try_borrow().map_or(self.{foreign}, |foreign| foreign.get_{foreign}()));",
                            local = mapping.local_attribute,
                            foreign = mapping.foreign_attribute
                        ));
                    } else {
                        setter.line(format!(
                            "self.{} = value.as_ref().and_then(|foreign| foreign.borrow().get_{}());",
                            mapping.local_attribute, mapping.foreign_attribute
                        ));
                    }
                }
                setter.line(format!("self.{name} = value;"));
                plan.add_method(setter);
            }
        });
    }
}
