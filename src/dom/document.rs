//! 内存文档树
//!
//! 节点存放在 arena 中，通过 [`NodeId`] 访问。删除的节点槽位不会复用，
//! 因此旧句柄永远不会指向新节点。

use super::tags::is_known_element;
use crate::error::DomError;
use tracing::{debug, trace};

/// 节点句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// 元素节点
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    pub tag_name: String,
    /// 按首次设置的顺序保存
    pub attributes: Vec<(String, String)>,
    /// 原始内容，不解析也不转义
    pub inner_html: String,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl ElementData {
    fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            ..Default::default()
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// 文档
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Option<ElementData>>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Document {
    /// 创建 `<html><head></head><body></body></html>`
    pub fn new() -> Self {
        let mut nodes = vec![
            Some(ElementData::new("html")),
            Some(ElementData::new("head")),
            Some(ElementData::new("body")),
        ];
        let (root, head, body) = (NodeId(0), NodeId(1), NodeId(2));
        for child in [head, body] {
            if let Some(data) = nodes[child.0].as_mut() {
                data.parent = Some(root);
            }
        }
        if let Some(html) = nodes[root.0].as_mut() {
            html.children = vec![head, body];
        }
        Self { nodes, root, head, body }
    }

    /// 创建带挂载容器的文档，相当于 `<body><div id="{root_id}"></div></body>`
    pub fn with_root(root_id: &str) -> Self {
        let mut doc = Self::new();
        let container = doc.insert(ElementData::new("div"));
        doc.push_attribute(container, "id", root_id);
        doc.link(doc.body, container);
        debug!(root_id, "document created with mount container");
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// 存活节点数量（含游离节点）
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&ElementData> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(DomError::NodeNotFound(id))
    }

    fn insert(&mut self, data: ElementData) -> NodeId {
        self.nodes.push(Some(data));
        NodeId(self.nodes.len() - 1)
    }

    fn push_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(Some(data)) = self.nodes.get_mut(id.0) {
            data.attributes.push((name.to_string(), value.to_string()));
        }
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(Some(data)) = self.nodes.get_mut(child.0) {
            data.parent = Some(parent);
        }
        if let Some(Some(data)) = self.nodes.get_mut(parent.0) {
            data.children.push(child);
        }
    }

    /// 创建游离元素，需要再调用 [`Document::append_child`] 挂到树上
    pub fn create_element(&mut self, tag_name: &str) -> Result<NodeId, DomError> {
        if !is_known_element(tag_name) {
            return Err(DomError::InvalidTagName(tag_name.to_string()));
        }
        Ok(self.insert(ElementData::new(tag_name)))
    }

    /// 设置属性；已存在则原位替换值
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let data = self.get_mut(id)?;
        match data.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
        trace!(?id, name, value, "attribute set");
        Ok(())
    }

    /// 设置原始内容。内容按原样保存和输出，不做 HTML 转义。
    pub fn set_inner_html(&mut self, id: NodeId, html: &str) -> Result<(), DomError> {
        self.get_mut(id)?.inner_html = html.to_string();
        Ok(())
    }

    /// 追加为 `parent` 的最后一个子节点，先从原父节点上摘下
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.contains(parent) {
            return Err(DomError::NodeNotFound(parent));
        }
        if !self.contains(child) {
            return Err(DomError::NodeNotFound(child));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    /// 删除节点及其整个子树
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        if !self.contains(id) {
            return Err(DomError::NodeNotFound(id));
        }
        self.detach(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(data) = self.nodes.get_mut(current.0).and_then(Option::take) {
                stack.extend(data.children);
            }
        }
        debug!(?id, "subtree removed");
        Ok(())
    }

    fn detach(&mut self, id: NodeId) {
        let parent = self.get(id).and_then(|d| d.parent);
        if let Some(parent) = parent {
            if let Some(Some(data)) = self.nodes.get_mut(parent.0) {
                data.children.retain(|c| *c != id);
            }
        }
        if let Some(Some(data)) = self.nodes.get_mut(id.0) {
            data.parent = None;
        }
    }

    /// `ancestor` 是否为 `node` 本身或其祖先
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|d| d.parent);
        }
        false
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|d| d.tag_name.as_str())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|d| d.get_attr(name))
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        self.get(id).map(|d| d.attributes.as_slice()).unwrap_or(&[])
    }

    pub fn inner_html(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|d| d.inner_html.as_str())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|d| d.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|d| d.parent)
    }

    /// 按 id 属性查找挂在文档树上的元素（深度优先，先序）
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let data = self.get(id)?;
            if data.get_attr("id") == Some(element_id) {
                return Some(id);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        None
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
