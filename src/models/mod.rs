//! # 数据模型模块
//!
//! 定义 DMS 坐标、转换模式、请求与响应的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `input/`, `service/` 和 `commands/` 使用
//! - 子模块: dms, mode, request, response, coverage

pub mod coverage;
pub mod dms;
pub mod mode;
pub mod request;
pub mod response;

pub use dms::{Axis, DmsValue, Hemisphere};
pub use mode::{ConversionDirection, InputFormat, ModeState};
pub use request::{ConversionRequest, GeographicInput};
pub use response::{ConversionResult, ServiceResponse};
