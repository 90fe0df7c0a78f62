use crate::{
    context::GenerationContext,
    contribution::{Method, Receiver},
    plugin::{GeneratorPlugin, PluginId},
    plugins::{AttributeAccessorPlugin, MemberPlugin},
};

///
/// PrimaryKeyPlugin
///
/// `generate_primary_key` for entities whose key attributes name a
/// sequence. The provider is consulted at most once per unset key; the
/// result stays cached on the instance, so a second call is a no-op.
///

pub struct PrimaryKeyPlugin;

impl PrimaryKeyPlugin {
    pub const ID: PluginId = "primary-key";
}

impl GeneratorPlugin for PrimaryKeyPlugin {
    fn id(&self) -> PluginId {
        Self::ID
    }

    fn dependencies(&self) -> &[PluginId] {
        &[MemberPlugin::ID, AttributeAccessorPlugin::ID]
    }

    fn generate(&self, ctx: &mut GenerationContext) {
        ctx.contribute(Self::ID, |plan, view| {
            let generated: Vec<_> = view
                .attributes()
                .iter()
                .filter(|a| a.primary_key && a.sequence.is_some())
                .collect();
            if generated.is_empty() {
                return;
            }

            let mut method = Method::new("generate_primary_key", Receiver::Mut)
                .with_param("provider", "&mut dyn SequenceProvider");
            for attribute in generated {
                let name = &attribute.name;
                let sequence = attribute.sequence.as_deref().unwrap_or_default();
                method.line(format!("if self.{name}.is_none() {{"));
                method.line(format!(
                    "    self.{name} = Some(provider.next_value(\"{sequence}\"));"
                ));
                method.line("}");
            }
            plan.add_method(method);
        });
    }
}
