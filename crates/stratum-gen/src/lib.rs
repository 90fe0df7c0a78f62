pub mod context;
pub mod contribution;
pub mod generator;
pub mod plugin;
pub mod plugins;
pub mod resolver;

pub use context::{EntityView, GenerationContext};
pub use contribution::{ClassPlan, Constant, Member, Method, Param, Receiver, TraitImpl};
pub use generator::{EntityGenerator, GenerateError};
pub use plugin::{GeneratorPlugin, PluginId, PluginRegistry};
pub use resolver::{PluginResolver, ResolveError};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        context::{EntityView, GenerationContext},
        contribution::{ClassPlan, Constant, Member, Method, Param, Receiver, TraitImpl},
        generator::{EntityGenerator, GenerateError},
        plugin::{GeneratorPlugin, PluginId, PluginRegistry},
        resolver::{PluginResolver, ResolveError},
    };
}
