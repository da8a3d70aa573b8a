//! Configuration for Rust source emission.

/// Configuration for Rust source emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the generated resolver contract trait
    pub(crate) resolvers_trait: String,
    /// Path of the runtime crate whose prelude the generated code imports
    pub(crate) runtime_crate: String,
    /// Whether to emit public `exec_*` entry points for root objects
    pub(crate) exec_shims: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolvers_trait: "Resolvers".to_string(),
            runtime_crate: "graphgen_runtime".to_string(),
            exec_shims: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolver contract trait name.
    pub fn resolvers_trait(mut self, name: impl Into<String>) -> Self {
        self.resolvers_trait = name.into();
        self
    }

    /// Set the runtime crate path.
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    /// Set whether to emit exec entry points.
    pub fn exec_shims(mut self, value: bool) -> Self {
        self.exec_shims = value;
        self
    }
}
