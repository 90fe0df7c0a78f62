use crate::{
    context::GenerationContext,
    contribution::{Method, Receiver},
    plugin::{GeneratorPlugin, PluginId},
    plugins::{ConstantPlugin, MemberPlugin, is_copy_kind, member_type, variant_name},
};
use convert_case::{Case, Casing};

///
/// AttributeAccessorPlugin
///
/// Typed getter/setter per attribute. Enum attributes additionally get a
/// lenient raw-value setter and an `is_` predicate per declared value.
///

pub struct AttributeAccessorPlugin;

impl AttributeAccessorPlugin {
    pub const ID: PluginId = "attribute-accessor";
}

impl GeneratorPlugin for AttributeAccessorPlugin {
    fn id(&self) -> PluginId {
        Self::ID
    }

    fn dependencies(&self) -> &[PluginId] {
        &[MemberPlugin::ID, ConstantPlugin::ID]
    }

    fn generate(&self, ctx: &mut GenerationContext) {
        ctx.contribute(Self::ID, |plan, view| {
            for attribute in view.attributes() {
                let name = &attribute.name;
                let ty = member_type(attribute);

                let mut getter = Method::new(format!("get_{name}"), Receiver::Ref).returns(&ty);
                if is_copy_kind(attribute.kind) {
                    getter.line(format!("self.{name}"));
                } else {
                    getter.line(format!("self.{name}.clone()"));
                }
                plan.add_method(getter);

                let mut setter =
                    Method::new(format!("set_{name}"), Receiver::Mut).with_param("value", &ty);
                setter.line(format!("self.{name} = value;"));
                plan.add_method(setter);

                if attribute.is_enum() {
                    let enum_type = attribute.type_name.as_deref().unwrap_or_default();

                    let mut from_value = Method::new(format!("set_{name}_from_value"), Receiver::Mut)
                        .with_param("value", "Option<&str>");
                    from_value.line(format!("self.{name} = value.and_then({enum_type}::from_value);"));
                    plan.add_method(from_value);

                    for value in &attribute.enum_values {
                        let mut predicate = Method::new(
                            format!("is_{name}_{}", value.to_case(Case::Snake)),
                            Receiver::Ref,
                        )
                        .returns("bool");
                        predicate.line(format!(
                            "self.{name} == Some({enum_type}::{})",
                            variant_name(value)
                        ));
                        plan.add_method(predicate);
                    }
                }
            }
        });
    }
}
