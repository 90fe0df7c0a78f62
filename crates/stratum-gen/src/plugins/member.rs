use crate::{
    context::GenerationContext,
    contribution::Member,
    plugin::{GeneratorPlugin, PluginId},
    plugins::member_type,
};

///
/// MemberPlugin
///
/// Backing fields for attributes, references, and collections. References
/// hold shared handles; collection storage is lazily initialized, so it is
/// optional too.
///

pub struct MemberPlugin;

impl MemberPlugin {
    pub const ID: PluginId = "member";
}

impl GeneratorPlugin for MemberPlugin {
    fn id(&self) -> PluginId {
        Self::ID
    }

    fn generate(&self, ctx: &mut GenerationContext) {
        ctx.contribute(Self::ID, |plan, view| {
            plan.add_derive("Debug");
            plan.add_derive("Default");

            for attribute in view.attributes() {
                plan.add_member(Member::new(&attribute.name, member_type(attribute)));
            }
            for reference in view.references() {
                plan.add_member(Member::new(
                    &reference.name,
                    format!("Option<Shared<{}>>", reference.foreign_entity),
                ));
            }
            for collection in view.collections() {
                plan.add_member(Member::new(
                    &collection.name,
                    format!("Option<Vec<Shared<{}>>>", collection.foreign_entity),
                ));
            }
            for dynamic in view.dynamic_collections() {
                plan.add_member(Member::new(
                    &dynamic.name,
                    format!("Option<Vec<Shared<{}>>>", dynamic.foreign_entity),
                ));
            }
        });
    }
}
