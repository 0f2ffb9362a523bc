use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One manifest schema for all the shapes a package.json has grown over
/// time. Fields added later (scripts, nodemon watch list, deploy flags) are
/// explicitly optional; anything not modeled here survives a rewrite via the
/// flattened catch-all.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PackageJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripts: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<IndexMap<String, String>>,
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
    #[serde(rename = "nodemonConfig", skip_serializing_if = "Option::is_none")]
    pub nodemon_config: Option<NodemonConfig>,
    #[serde(rename = "wsp", skip_serializing_if = "Option::is_none")]
    pub deploy: Option<DeployFlags>,
    // Catch-all for other fields to preserve them
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NodemonConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

/// Per-package deployment switches under the tool's own manifest key.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct DeployFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish: Option<bool>,
}

impl PackageJson {
    pub fn dependencies_mut(&mut self) -> &mut IndexMap<String, String> {
        self.dependencies.get_or_insert_with(IndexMap::new)
    }

    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies
            .as_ref()
            .is_some_and(|deps| deps.contains_key(name))
    }

    /// The nodemon watch list, when the manifest carries one.
    pub fn watch_list_mut(&mut self) -> Option<&mut Vec<String>> {
        self.nodemon_config.as_mut().and_then(|n| n.watch.as_mut())
    }

    #[must_use]
    pub fn watch_list(&self) -> Option<&Vec<String>> {
        self.nodemon_config.as_ref().and_then(|n| n.watch.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let input = r#"{
  "name": "app",
  "version": "1.0.0",
  "repository": "https://example.com/repo.git",
  "jest": { "moduleNameMapper": { "core": "../core/src" } },
  "dependencies": { "core": "*" }
}"#;
        let parsed: PackageJson = serde_json::from_str(input).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("app"));
        assert!(parsed.other.contains_key("repository"));
        assert!(parsed.other.contains_key("jest"));

        let out = serde_json::to_string(&parsed).unwrap();
        let reparsed: PackageJson = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn optional_sections_default_to_none() {
        let parsed: PackageJson = serde_json::from_str(r#"{ "name": "a" }"#).unwrap();
        assert!(parsed.dependencies.is_none());
        assert!(parsed.nodemon_config.is_none());
        assert!(parsed.deploy.is_none());
        assert!(parsed.watch_list().is_none());
    }

    #[test]
    fn deploy_flags_parse_from_the_tool_key() {
        let parsed: PackageJson =
            serde_json::from_str(r#"{ "name": "a", "wsp": { "bundle": true, "publish": false } }"#)
                .unwrap();
        let deploy = parsed.deploy.unwrap();
        assert_eq!(deploy.bundle, Some(true));
        assert_eq!(deploy.publish, Some(false));
        assert_eq!(deploy.deploy, None);
    }
}
