use std::collections::BTreeMap;
use std::fmt;

///
/// ErrorTree
///
/// Route-keyed aggregation of validation findings. Leaf messages attach to
/// the node they were reported on; child trees attach under the route key of
/// the offending schema node, so one failed build reports every problem with
/// its location.
///

#[derive(Clone, Debug, Default)]
pub struct ErrorTree {
    errors: Vec<String>,
    children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flat message at this node.
    pub fn add(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Add a message under a child route.
    pub fn add_at(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.children.entry(route.into()).or_default().add(message);
    }

    /// Absorb another tree's findings at this node.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        for (key, tree) in other.children {
            self.children.entry(key).or_default().merge(tree);
        }
    }

    /// Merge another tree under a child route. Empty trees are dropped.
    pub fn merge_at(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }
        self.children.entry(route.into()).or_default().merge(other);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in this tree and all children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Ok if no findings were recorded, otherwise the tree itself.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn render(&self, route: &str, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.errors {
            if route.is_empty() {
                writeln!(out, "{message}")?;
            } else {
                writeln!(out, "{route}: {message}")?;
            }
        }
        for (key, child) in &self.children {
            let next = if route.is_empty() {
                key.clone()
            } else {
                format!("{route}.{key}")
            };
            child.render(&next, out)?;
        }
        Ok(())
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render("", f)
    }
}

impl std::error::Error for ErrorTree {}

///
/// err!
/// Push a formatted message onto an ErrorTree.
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
