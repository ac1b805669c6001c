//! Configuration for code generation.
//!
//! [`CodegenConfig`] controls target-side naming and artifact layout. It
//! implements [`serde::Deserialize`] so front ends can load it from
//! external sources (the CLI reads a TOML section into it).

use serde::Deserialize;

fn default_root_module() -> String {
    "generated".to_string()
}

fn default_header() -> bool {
    true
}

/// Code generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CodegenConfig {
    /// Name of the root module every artifact is placed under.
    #[serde(default = "default_root_module")]
    root_module: String,

    /// Whether generated files start with a generated-file header comment.
    #[serde(default = "default_header")]
    header: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            root_module: default_root_module(),
            header: default_header(),
        }
    }
}

impl CodegenConfig {
    /// Creates a configuration with the given root module name.
    pub fn new(root_module: impl Into<String>) -> Self {
        Self {
            root_module: root_module.into(),
            ..Self::default()
        }
    }

    /// Returns this configuration with the header comment toggled.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// The root module every artifact is placed under.
    pub fn root_module(&self) -> &str {
        &self.root_module
    }

    /// Whether generated files start with a header comment.
    pub fn header(&self) -> bool {
        self.header
    }
}
