//! # 输入处理模块
//!
//! 原始字段 → 校验 → 转换请求。
//!
//! ## 依赖关系
//! - 被 `service/orchestrator.rs` 和 `commands/` 使用
//! - 使用 `parsers/`, `models/`
//! - 子模块: fields, collector, builder

pub mod builder;
pub mod collector;
pub mod fields;

pub use collector::collect;
pub use fields::{FieldId, RawFields};
