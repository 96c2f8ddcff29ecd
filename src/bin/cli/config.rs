//! 文档配置

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 文档配置文件结构（JSON）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    #[serde(default = "default_root_id")]
    pub root_id: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_root_id() -> String { "root".to_string() }
fn default_title() -> String { "Mini DOM".to_string() }
fn default_lang() -> String { "en".to_string() }

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            root_id: default_root_id(),
            title: default_title(),
            lang: default_lang(),
        }
    }
}

impl DocumentConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = DocumentConfig::parse(r#"{ "rootId": "app" }"#).unwrap();
        assert_eq!(config.root_id, "app");
        assert_eq!(config.title, "Mini DOM");
        assert_eq!(config.lang, "en");
    }

    #[test]
    fn test_empty_config() {
        let config = DocumentConfig::parse("{}").unwrap();
        assert_eq!(config.root_id, "root");
    }
}
