//! 树渲染器 - 把一个节点描述变成输出树上的一个元素
//!
//! 每次调用都是一次性创建，没有 diff，也不会更新已有节点。

use super::output_tree::OutputTree;
use crate::dom::Document;
use crate::element::NodeDescription;
use crate::error::RenderError;
use tracing::{debug, trace};

/// 无状态渲染器
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// 创建 `description.tag` 元素，写入内容和属性，然后追加为 `mount` 的最后一个子节点。
    ///
    /// 先检查挂载点，再检查元素类型；任一失败时输出树保持不变。
    pub fn render<T: OutputTree>(
        &self,
        tree: &mut T,
        description: &NodeDescription,
        mount: T::Handle,
    ) -> Result<(), RenderError> {
        validate(tree, description, mount)?;

        let node = tree.create_element(&description.tag)?;
        tree.set_inner_html(node, description.content())?;
        for (name, value) in description.attributes() {
            trace!(name, value, "copy attribute");
            tree.set_attribute(node, name, value)?;
        }
        tree.append_child(mount, node)?;

        debug!(
            tag = %description.tag,
            attributes = description.attribute_count(),
            ?mount,
            "node rendered"
        );
        Ok(())
    }

    /// 依次渲染多个描述到同一挂载点。全部校验通过后才开始插入。
    pub fn render_all<T: OutputTree>(
        &self,
        tree: &mut T,
        descriptions: &[NodeDescription],
        mount: T::Handle,
    ) -> Result<(), RenderError> {
        for description in descriptions {
            validate(tree, description, mount)?;
        }
        for description in descriptions {
            self.render(tree, description, mount)?;
        }
        Ok(())
    }

    /// 按元素 id 查找挂载点后渲染，相当于 `querySelector('#id')` 再渲染
    pub fn render_into(
        &self,
        document: &mut Document,
        description: &NodeDescription,
        root_id: &str,
    ) -> Result<(), RenderError> {
        let mount = document
            .get_element_by_id(root_id)
            .ok_or(RenderError::MountTargetMissing)?;
        self.render(document, description, mount)
    }
}

fn validate<T: OutputTree>(
    tree: &T,
    description: &NodeDescription,
    mount: T::Handle,
) -> Result<(), RenderError> {
    if !tree.contains(mount) {
        return Err(RenderError::MountTargetMissing);
    }
    if !tree.is_valid_kind(&description.tag) {
        return Err(RenderError::InvalidNodeType(description.tag.clone()));
    }
    Ok(())
}

/// 使用默认渲染器渲染
pub fn render<T: OutputTree>(
    tree: &mut T,
    description: &NodeDescription,
    mount: T::Handle,
) -> Result<(), RenderError> {
    TreeRenderer.render(tree, description, mount)
}
