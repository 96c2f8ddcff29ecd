//! 渲染器 - 将节点描述渲染到输出树

mod output_tree;
mod tree_renderer;

pub use output_tree::OutputTree;
pub use tree_renderer::{render, TreeRenderer};
