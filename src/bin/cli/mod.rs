//! mini-dom 命令行

pub mod config;

use anyhow::{Context, Result};
use mini_dom::{Document, NodeDescription, TreeRenderer};
use tracing::{debug, info};

pub use config::DocumentConfig;

/// 按配置创建文档：`<html lang>`、`<title>` 和挂载容器
pub fn build_document(config: &DocumentConfig) -> Result<Document> {
    let mut doc = Document::with_root(&config.root_id);
    let html = doc.root();
    doc.set_attribute(html, "lang", &config.lang)?;

    let title = doc.create_element("title")?;
    doc.set_inner_html(title, &config.title)?;
    let head = doc.head();
    doc.append_child(head, title)?;
    Ok(doc)
}

/// 解析 JSON 输入并渲染到挂载点，返回渲染后的文档
pub fn render_input(input: &str, config: &DocumentConfig) -> Result<Document> {
    let descriptions =
        NodeDescription::list_from_json(input).context("failed to parse node descriptions")?;
    debug!(count = descriptions.len(), "descriptions loaded");

    let mut doc = build_document(config)?;
    let mount = doc
        .get_element_by_id(&config.root_id)
        .context("mount container missing from document")?;

    TreeRenderer::new()
        .render_all(&mut doc, &descriptions, mount)
        .with_context(|| format!("failed to render into #{}", config.root_id))?;

    info!(count = descriptions.len(), root_id = %config.root_id, "rendered");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_input_array() {
        let input = r#"[
            {"type": "h1", "children": "Custom App | chai"},
            {"type": "a", "props": {"href": "https://www.google.com", "target": "_blank"},
             "children": "click me to visit google"}
        ]"#;
        let doc = render_input(input, &DocumentConfig::default()).unwrap();
        assert_eq!(
            doc.outer_html(doc.body()),
            concat!(
                r#"<body><div id="root"><h1>Custom App | chai</h1>"#,
                r#"<a href="https://www.google.com" target="_blank">"#,
                r#"click me to visit google</a></div></body>"#
            )
        );
    }

    #[test]
    fn test_build_document_head() {
        let config = DocumentConfig {
            title: "Hello".to_string(),
            ..Default::default()
        };
        let doc = build_document(&config).unwrap();
        assert_eq!(
            doc.outer_html(doc.head()),
            "<head><title>Hello</title></head>"
        );
        assert_eq!(doc.attribute(doc.root(), "lang"), Some("en"));
    }

    #[test]
    fn test_render_input_names_bad_prop() {
        let input = r#"[{"type": "div", "props": {"style": {"color": "red"}}}]"#;
        let err = render_input(input, &DocumentConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("prop `style`"));
    }

    #[test]
    fn test_render_input_errors() {
        let config = DocumentConfig::default();
        assert!(render_input("not json", &config).is_err());

        let err = render_input(r#"{"type": ""}"#, &config).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid node type"));
    }
}
