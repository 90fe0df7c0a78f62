use crate::{
    context::GenerationContext,
    contribution::Constant,
    plugin::{GeneratorPlugin, PluginId},
    plugins::column_constant,
};

///
/// ConstantPlugin
///
/// Table-name and per-attribute column-name constants.
///

pub struct ConstantPlugin;

impl ConstantPlugin {
    pub const ID: PluginId = "constant";
}

impl GeneratorPlugin for ConstantPlugin {
    fn id(&self) -> PluginId {
        Self::ID
    }

    fn generate(&self, ctx: &mut GenerationContext) {
        ctx.contribute(Self::ID, |plan, view| {
            plan.add_constant(Constant::new(
                "TABLE_NAME",
                format!("\"{}\"", view.entity().table),
            ));
            for attribute in view.attributes() {
                plan.add_constant(Constant::new(
                    column_constant(attribute),
                    format!("\"{}\"", attribute.column),
                ));
            }
        });
    }
}
