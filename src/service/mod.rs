//! # 转换服务模块
//!
//! 投影计算由外部 HTTP 服务完成，这里只定义调用接口与流程编排。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `input/`
//! - 子模块: http, orchestrator

pub mod http;
pub mod orchestrator;

pub use http::HttpConversionService;
pub use orchestrator::{ConversionOrchestrator, DisplayState, SubmitOutcome};

use crate::models::{ConversionRequest, ServiceResponse};

/// 外部转换服务
///
/// 传输层失败以不透明的 `anyhow::Error` 返回；
/// 服务端业务错误通过 `ServiceResponse { success: false, .. }` 返回。
pub trait ConversionService {
    fn convert(&mut self, request: &ConversionRequest) -> anyhow::Result<ServiceResponse>;
}
