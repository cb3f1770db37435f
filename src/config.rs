use anyhow::Context;
use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "diorite.json";

#[derive(Debug, Clone, PartialEq, Eq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct DioriteConfig {
    /// Material queries resolved and logged at startup, e.g. `64:7` or
    /// `wool:black`.
    pub lookups: Vec<String>,
    /// Where to write the JSON dump of every block, if anywhere.
    pub dump: Option<PathBuf>,
}

impl Default for DioriteConfig {
    fn default() -> Self {
        Self {
            lookups: vec![
                "64:7".to_owned(),
                "wool:black".to_owned(),
                "minecraft:wooden_door".to_owned(),
            ],
            dump: None,
        }
    }
}

impl DioriteConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid diorite config")
    }

    /// Reads the config at `path`. Without a path, `diorite.json` is used when
    /// it exists and the built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = DioriteConfig::from_json(r#"{ "dump": "blocks.json" }"#).unwrap();
        assert_eq!(config.dump, Some(PathBuf::from("blocks.json")));
        assert_eq!(config.lookups, DioriteConfig::default().lookups);
    }

    #[test]
    fn explicit_lookups() {
        let config = DioriteConfig::from_json(r#"{ "lookups": ["1:3"] }"#).unwrap();
        assert_eq!(config.lookups, vec!["1:3".to_owned()]);
        assert_eq!(config.dump, None);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(DioriteConfig::from_json("{ lookups: 1 }").is_err());
        assert!(DioriteConfig::load(Some(Path::new("does/not/exist.json"))).is_err());
    }
}
