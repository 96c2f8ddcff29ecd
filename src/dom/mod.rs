//! 输出树 - 渲染结果落地的内存文档

mod document;
mod serialize;
pub mod tags;

pub use document::{Document, ElementData, NodeId};
pub use tags::{is_custom_element_name, is_known_element, is_void_element};
