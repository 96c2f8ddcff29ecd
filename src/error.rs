//! 错误类型

use crate::dom::NodeId;
use thiserror::Error;

/// 渲染失败的两种情况，调用方需要自行修正输入
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// 挂载点在输出树中不存在
    #[error("mount target does not exist in the output tree")]
    MountTargetMissing,
    /// 元素类型为空或不被识别
    #[error("invalid node type `{0}`")]
    InvalidNodeType(String),
}

/// 文档树操作错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0:?} not found")]
    NodeNotFound(NodeId),
    #[error("invalid tag name `{0}`")]
    InvalidTagName(String),
    /// 不能把节点挂到自己或自己的后代下面
    #[error("node cannot be inserted under itself or its descendants")]
    HierarchyRequest,
}

/// `Document` 在渲染前已校验挂载点和类型，这里的 `HierarchyRequest` 不会出现；
/// 其他 `OutputTree` 实现若返回它，也只能归为挂载点不可用，以保持两种渲染错误。
impl From<DomError> for RenderError {
    fn from(err: DomError) -> Self {
        match err {
            DomError::InvalidTagName(tag) => Self::InvalidNodeType(tag),
            DomError::NodeNotFound(_) | DomError::HierarchyRequest => Self::MountTargetMissing,
        }
    }
}

/// 节点描述 JSON 加载错误
#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("malformed node description: {0}")]
    Json(#[from] serde_json::Error),
}
