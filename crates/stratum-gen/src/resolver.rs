use crate::plugin::{GeneratorPlugin, PluginId, PluginRegistry};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// ResolveError
///
/// Fatal configuration problems in a requested unit set. Neither can be
/// repaired at generation time; generation aborts for the affected entity
/// only.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("unknown contribution unit '{id}'")]
    UnknownPlugin { id: PluginId },

    #[error("contribution unit dependency cycle: {}", .cycle.join(" -> "))]
    DependencyCycle { cycle: Vec<String> },
}

///
/// PluginResolver
///
/// Orders a requested unit list into a dependency-respecting, duplicate-free
/// execution sequence. Dependencies not explicitly requested are pulled in;
/// ties are broken by original request order; a unit reachable over several
/// paths appears exactly once. Pure: computes order, never invokes units.
/// Output is deterministic for a given registry and request, hence cacheable.
///

pub struct PluginResolver<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> PluginResolver<'a> {
    #[must_use]
    pub const fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(
        &self,
        requested: &[PluginId],
    ) -> Result<Vec<&'a dyn GeneratorPlugin>, ResolveError> {
        let mut order = Vec::new();
        let mut done = BTreeSet::new();
        let mut in_progress = Vec::new();

        for &id in requested {
            self.visit(id, &mut done, &mut in_progress, &mut order)?;
        }

        Ok(order)
    }

    // Depth-first emit: dependencies first, each unit once.
    fn visit(
        &self,
        id: PluginId,
        done: &mut BTreeSet<PluginId>,
        in_progress: &mut Vec<PluginId>,
        order: &mut Vec<&'a dyn GeneratorPlugin>,
    ) -> Result<(), ResolveError> {
        if done.contains(id) {
            return Ok(());
        }
        if let Some(start) = in_progress.iter().position(|p| *p == id) {
            let mut cycle: Vec<String> = in_progress[start..]
                .iter()
                .map(ToString::to_string)
                .collect();
            cycle.push(id.to_string());
            return Err(ResolveError::DependencyCycle { cycle });
        }

        let plugin = self
            .registry
            .get(id)
            .ok_or(ResolveError::UnknownPlugin { id })?;

        in_progress.push(id);
        for &dependency in plugin.dependencies() {
            self.visit(dependency, done, in_progress, order)?;
        }
        in_progress.pop();

        done.insert(id);
        order.push(plugin);

        Ok(())
    }
}
