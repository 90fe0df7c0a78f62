use crate::{
    context::GenerationContext,
    contribution::{Method, Receiver},
    plugin::{GeneratorPlugin, PluginId},
    plugins::MemberPlugin,
};

///
/// ConstructorPlugin
///
/// Plain constructor. Construction from a mapping (`new_from_tree`) and
/// from JSON come with the deserialize trait the tree-deserializer unit
/// implements.
///

pub struct ConstructorPlugin;

impl ConstructorPlugin {
    pub const ID: PluginId = "constructor";
}

impl GeneratorPlugin for ConstructorPlugin {
    fn id(&self) -> PluginId {
        Self::ID
    }

    fn dependencies(&self) -> &[PluginId] {
        &[MemberPlugin::ID]
    }

    fn generate(&self, ctx: &mut GenerationContext) {
        ctx.contribute(Self::ID, |plan, _view| {
            let mut method = Method::new("new", Receiver::None).returns("Self");
            method.line("Self::default()");
            plan.add_method(method);
        });
    }
}
