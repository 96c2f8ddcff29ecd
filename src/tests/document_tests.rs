//! 文档树单元测试
//! 通过 OutputTree 接口操作 Document

use crate::dom::Document;
use crate::error::DomError;
use crate::renderer::OutputTree;

/// 通过接口构建一个小页面
fn build_page<T: OutputTree>(tree: &mut T, mount: T::Handle) -> Result<T::Handle, DomError> {
    let nav = tree.create_element("nav")?;
    tree.set_attribute(nav, "class", "menu")?;
    let link = tree.create_element("a")?;
    tree.set_attribute(link, "href", "/about")?;
    tree.set_inner_html(link, "About")?;
    tree.append_child(nav, link)?;
    tree.append_child(mount, nav)?;
    Ok(nav)
}

#[test]
fn test_output_tree_builds_nested_markup() {
    let mut doc = Document::with_root("root");
    let mount = doc.get_element_by_id("root").unwrap();

    build_page(&mut doc, mount).unwrap();

    assert_eq!(
        doc.serialize_children(mount),
        r#"<nav class="menu"><a href="/about">About</a></nav>"#
    );
}

#[test]
fn test_output_tree_rejects_unknown_kind() {
    let mut doc = Document::new();
    assert!(!OutputTree::is_valid_kind(&doc, "marquee2"));
    assert_eq!(
        OutputTree::create_element(&mut doc, "marquee2"),
        Err(DomError::InvalidTagName("marquee2".into()))
    );
    assert_eq!(
        OutputTree::create_element(&mut doc, ""),
        Err(DomError::InvalidTagName(String::new()))
    );
}

#[test]
fn test_output_tree_missing_parent() {
    let mut doc = Document::new();
    let stale = doc.create_element("div").unwrap();
    doc.remove(stale).unwrap();
    let child = doc.create_element("p").unwrap();

    assert!(!OutputTree::contains(&doc, stale));
    assert_eq!(
        OutputTree::append_child(&mut doc, stale, child),
        Err(DomError::NodeNotFound(stale))
    );
    assert_eq!(doc.parent(child), None);
}

#[test]
fn test_tag_case_is_preserved() {
    let mut doc = Document::with_root("root");
    let mount = doc.get_element_by_id("root").unwrap();
    let node = doc.create_element("Section").unwrap();
    doc.append_child(mount, node).unwrap();

    assert_eq!(doc.tag_name(node), Some("Section"));
    assert_eq!(doc.outer_html(node), "<Section></Section>");
}

#[test]
fn test_first_matching_id_wins() {
    let mut doc = Document::with_root("root");
    let mount = doc.get_element_by_id("root").unwrap();
    let dup = doc.create_element("div").unwrap();
    doc.set_attribute(dup, "id", "root").unwrap();
    doc.append_child(mount, dup).unwrap();

    assert_eq!(doc.get_element_by_id("root"), Some(mount));
}
