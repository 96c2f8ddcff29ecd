//! 元素类型注册表

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// 标准 HTML 元素
static HTML_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
        "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
        "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl",
        "dt", "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2",
        "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img",
        "input", "ins", "kbd", "label", "legend", "li", "link", "main", "map", "mark", "menu",
        "meta", "meter", "nav", "noscript", "object", "ol", "optgroup", "option", "output", "p",
        "picture", "pre", "progress", "q", "rp", "rt", "ruby", "s", "samp", "script", "search",
        "section", "select", "slot", "small", "source", "span", "strong", "style", "sub",
        "summary", "sup", "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead",
        "time", "title", "tr", "track", "u", "ul", "var", "video", "wbr",
    ]
    .into_iter()
    .collect()
});

/// 不允许作为自定义元素的名字
const RESERVED_CUSTOM_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// 没有结束标签的元素
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// 判断元素类型是否可创建（不区分 ASCII 大小写）
pub fn is_known_element(tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }
    let lower = tag.to_ascii_lowercase();
    HTML_ELEMENTS.contains(lower.as_str()) || is_custom_element_name(&lower)
}

/// 自定义元素名：小写字母开头，至少一个 `-`
pub fn is_custom_element_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_lowercase());
    starts_ok
        && tag.contains('-')
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
        && !RESERVED_CUSTOM_NAMES.contains(&tag)
}

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}
