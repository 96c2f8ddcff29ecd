//! 渲染器写入的目标树接口

use crate::dom::{is_known_element, Document, NodeId};
use crate::error::DomError;
use std::fmt::Debug;

/// 可变输出树。渲染器只通过这组操作修改目标树。
pub trait OutputTree {
    type Handle: Copy + Debug;

    fn contains(&self, handle: Self::Handle) -> bool;

    /// 元素类型能否被 `create_element` 接受
    fn is_valid_kind(&self, kind: &str) -> bool;

    fn create_element(&mut self, kind: &str) -> Result<Self::Handle, DomError>;

    fn set_attribute(
        &mut self,
        node: Self::Handle,
        name: &str,
        value: &str,
    ) -> Result<(), DomError>;

    /// 原始内容，不转义
    fn set_inner_html(&mut self, node: Self::Handle, html: &str) -> Result<(), DomError>;

    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle) -> Result<(), DomError>;
}

impl OutputTree for Document {
    type Handle = NodeId;

    fn contains(&self, handle: NodeId) -> bool {
        Document::contains(self, handle)
    }

    fn is_valid_kind(&self, kind: &str) -> bool {
        is_known_element(kind)
    }

    fn create_element(&mut self, kind: &str) -> Result<NodeId, DomError> {
        Document::create_element(self, kind)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        Document::set_attribute(self, node, name, value)
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) -> Result<(), DomError> {
        Document::set_inner_html(self, node, html)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        Document::append_child(self, parent, child)
    }
}
