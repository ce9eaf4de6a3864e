//! # 解析器模块
//!
//! 提供用户输入文本的解析器。
//!
//! ## 依赖关系
//! - 被 `input/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: dms

pub mod dms;
