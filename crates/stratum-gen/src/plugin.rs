use crate::{context::GenerationContext, plugins};

/// Stable identity of a contribution unit.
pub type PluginId = &'static str;

///
/// GeneratorPlugin
///
/// One independently-authored contribution unit. Units declare what must
/// run before them by id; they never invoke each other, and ordering is the
/// resolver's job alone.
///

pub trait GeneratorPlugin {
    fn id(&self) -> PluginId;

    fn dependencies(&self) -> &[PluginId] {
        &[]
    }

    fn generate(&self, ctx: &mut GenerationContext);
}

///
/// PluginRegistry
///
/// Id -> unit lookup used by the resolver to close over dependencies.
///

#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn GeneratorPlugin>>,
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full built-in unit set.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(plugins::MemberPlugin));
        registry.register(Box::new(plugins::ConstantPlugin));
        registry.register(Box::new(plugins::ConstructorPlugin));
        registry.register(Box::new(plugins::AttributeAccessorPlugin));
        registry.register(Box::new(plugins::ReferenceAccessorPlugin));
        registry.register(Box::new(plugins::CollectionAccessorPlugin));
        registry.register(Box::new(plugins::TreeSerializerPlugin));
        registry.register(Box::new(plugins::TreeDeserializerPlugin));
        registry.register(Box::new(plugins::PrimaryKeyPlugin));
        registry
    }

    /// Register a unit. A later registration with the same id replaces the
    /// earlier one.
    pub fn register(&mut self, plugin: Box<dyn GeneratorPlugin>) {
        if let Some(slot) = self.plugins.iter_mut().find(|p| p.id() == plugin.id()) {
            *slot = plugin;
        } else {
            self.plugins.push(plugin);
        }
    }

    #[must_use]
    pub fn get(&self, id: PluginId) -> Option<&dyn GeneratorPlugin> {
        self.plugins.iter().find(|p| p.id() == id).map(|p| &**p)
    }

    /// Ids in registration order; the default requested set.
    #[must_use]
    pub fn ids(&self) -> Vec<PluginId> {
        self.plugins.iter().map(|p| p.id()).collect()
    }
}
