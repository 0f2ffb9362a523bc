use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A build-configuration document (`tsconfig*.json`). Only the parts the
/// tooling mutates are modeled; everything else is preserved opaquely.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Tsconfig {
    /// Project references to sibling packages. Defaulted to empty on read and
    /// always written back, matching how these files are maintained.
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(rename = "compilerOptions", skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<CompilerOptions>,
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Reference {
    pub path: String,
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl Reference {
    #[must_use]
    pub fn new(path: String) -> Self {
        Self {
            path,
            other: IndexMap::new(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CompilerOptions {
    /// Module alias map used by the test runner and editor tooling.
    #[serde(default)]
    pub paths: IndexMap<String, Vec<String>>,
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl Tsconfig {
    /// The alias map, when this document carries compiler options at all.
    pub fn paths_mut(&mut self) -> Option<&mut IndexMap<String, Vec<String>>> {
        self.compiler_options.as_mut().map(|co| &mut co.paths)
    }
}
