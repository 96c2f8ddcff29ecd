//! 单元测试模块
//! 覆盖渲染器、文档树等功能

pub mod document_tests;
