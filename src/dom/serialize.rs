//! HTML 序列化

use super::document::{Document, NodeId};
use super::tags::is_void_element;

impl Document {
    /// 节点自身及其子树的 HTML；节点不存在时返回空串
    ///
    /// void 元素（`img`、`br` 等）只输出开始标签，它的原始内容和子节点都不会输出，
    /// 即使渲染器把节点追加到了它下面。
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// 原始内容加上所有子节点的 HTML
    pub fn serialize_children(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_contents(id, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(data) = self.get(id) else {
            return;
        };

        out.push('<');
        out.push_str(&data.tag_name);
        for (name, value) in &data.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute(value, out);
            out.push('"');
        }
        out.push('>');

        if is_void_element(&data.tag_name) {
            return;
        }

        self.write_contents(id, out);
        out.push_str("</");
        out.push_str(&data.tag_name);
        out.push('>');
    }

    fn write_contents(&self, id: NodeId, out: &mut String) {
        let Some(data) = self.get(id) else {
            return;
        };
        // 原始内容直接输出
        out.push_str(&data.inner_html);
        for child in &data.children {
            self.write_node(*child, out);
        }
    }
}

/// 只在输出时转义，存储的属性值保持原样
fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_document() {
        let doc = Document::with_root("root");
        assert_eq!(
            doc.outer_html(doc.root()),
            r#"<html><head></head><body><div id="root"></div></body></html>"#
        );
    }

    #[test]
    fn test_serialize_raw_content_and_escaped_attributes() {
        let mut doc = Document::new();
        let p = doc.create_element("p").unwrap();
        doc.set_attribute(p, "title", r#"say "hi" & bye"#).unwrap();
        doc.set_inner_html(p, "<b>bold</b> & raw").unwrap();
        assert_eq!(
            doc.outer_html(p),
            r#"<p title="say &quot;hi&quot; &amp; bye"><b>bold</b> & raw</p>"#
        );
        assert_eq!(doc.attribute(p, "title"), Some(r#"say "hi" & bye"#));
    }

    #[test]
    fn test_serialize_void_element() {
        let mut doc = Document::new();
        let img = doc.create_element("img").unwrap();
        doc.set_attribute(img, "src", "a.png").unwrap();
        doc.set_inner_html(img, "ignored").unwrap();
        assert_eq!(doc.outer_html(img), r#"<img src="a.png">"#);
    }

    #[test]
    fn test_serialize_missing_node() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        doc.remove(div).unwrap();
        assert_eq!(doc.outer_html(div), "");
    }
}
