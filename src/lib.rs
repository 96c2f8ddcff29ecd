//! Mini DOM - 声明式节点描述渲染器
//! 把 `{ type, props, children }` 描述渲染成内存文档树上的元素

mod error;

// 节点描述
pub mod element;

// 输出树
pub mod dom;

// 渲染器
pub mod renderer;

pub use dom::{Document, NodeId};
pub use element::{create_element, NodeDescription, Props};
pub use error::{DescriptionError, DomError, RenderError};
pub use renderer::{render, OutputTree, TreeRenderer};

// 单元测试
#[cfg(test)]
mod tests;
