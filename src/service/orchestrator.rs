//! # 转换流程编排
//!
//! 维护模式状态与显示状态，协调一次提交：
//! 拒绝并发提交 → 禁用提交 → 清除旧结果 → 收集并构建请求 →
//! 交给转换服务 → 展示结果或错误 → 重新启用提交。
//!
//! 提交拆分为 `begin_submission` / `finish_submission` 两步，
//! 两步之间即请求在途窗口，此时再次提交会被拒绝。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/session.rs` 使用
//! - 使用 `input/`, `models/`, `service/mod.rs`

use crate::error::GeoconvError;
use crate::input::{self, RawFields};
use crate::models::{
    ConversionDirection, ConversionRequest, ConversionResult, InputFormat, ModeState,
    ServiceResponse,
};
use crate::service::ConversionService;

use tracing::{debug, info, warn};

/// 当前显示内容
#[derive(Debug, Default)]
pub enum DisplayState {
    #[default]
    Empty,
    /// 转换结果，附带产生该结果的请求方向
    Result {
        direction: ConversionDirection,
        result: ConversionResult,
    },
    Error(GeoconvError),
}

/// 开始提交的结果
#[derive(Debug)]
pub enum Submission {
    /// 已有请求在途，本次提交被忽略
    Busy,
    /// 本地校验失败，错误已写入显示状态
    Rejected,
    /// 请求已就绪，等待交给转换服务
    Ready(ConversionRequest),
}

/// 一次提交的最终结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Busy,
    Rejected,
    Presented,
    Failed,
}

/// 转换流程编排器
#[derive(Debug, Default)]
pub struct ConversionOrchestrator {
    mode: ModeState,
    display: DisplayState,
    in_flight: Option<ConversionDirection>,
}

impl ConversionOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ModeState {
        self.mode
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// 提交控件是否可用
    pub fn submit_enabled(&self) -> bool {
        self.in_flight.is_none()
    }

    /// 选择转换方向；清除显示内容，不触碰原始字段
    pub fn select_direction(&mut self, direction: ConversionDirection) {
        self.mode = self.mode.select_direction(direction);
        self.display = DisplayState::Empty;
        debug!(mode = %self.mode, "direction selected");
    }

    /// 选择输入格式；清除显示内容，不触碰原始字段
    pub fn select_format(&mut self, format: InputFormat) {
        self.mode = self.mode.select_format(format);
        self.display = DisplayState::Empty;
        debug!(mode = %self.mode, "format selected");
    }

    pub fn clear_display(&mut self) {
        self.display = DisplayState::Empty;
    }

    /// 取走显示内容，留下空状态
    pub fn take_display(&mut self) -> DisplayState {
        std::mem::take(&mut self.display)
    }

    /// 开始一次提交
    pub fn begin_submission(&mut self, fields: &RawFields) -> Submission {
        if !self.submit_enabled() {
            debug!("submission ignored: a request is already in flight");
            return Submission::Busy;
        }

        self.display = DisplayState::Empty;

        match input::collect(self.mode, fields) {
            Ok(request) => {
                self.in_flight = Some(request.direction());
                info!(direction = %request.direction(), "submitting conversion request");
                Submission::Ready(request)
            }
            Err(e) => {
                debug!(error = %e, "input rejected");
                self.display = DisplayState::Error(e);
                Submission::Rejected
            }
        }
    }

    /// 结束在途提交，展示结果或错误，并重新启用提交
    pub fn finish_submission(
        &mut self,
        response: anyhow::Result<ServiceResponse>,
    ) -> SubmitOutcome {
        let Some(direction) = self.in_flight.take() else {
            warn!("response received with no request in flight; ignored");
            return SubmitOutcome::Busy;
        };

        let outcome = response
            .map_err(|e| {
                warn!(error = %format!("{:#}", e), "conversion service unreachable");
                GeoconvError::Transport {
                    detail: format!("{:#}", e),
                }
            })
            .and_then(ServiceResponse::into_result);

        match outcome {
            Ok(result) => {
                self.display = DisplayState::Result { direction, result };
                SubmitOutcome::Presented
            }
            Err(e) => {
                debug!(error = %e, "conversion failed");
                self.display = DisplayState::Error(e);
                SubmitOutcome::Failed
            }
        }
    }

    /// 完整提交：开始 → 调用转换服务 → 结束
    pub fn submit<S: ConversionService + ?Sized>(
        &mut self,
        fields: &RawFields,
        service: &mut S,
    ) -> SubmitOutcome {
        match self.begin_submission(fields) {
            Submission::Busy => SubmitOutcome::Busy,
            Submission::Rejected => SubmitOutcome::Rejected,
            Submission::Ready(request) => {
                let response = service.convert(&request);
                self.finish_submission(response)
            }
        }
    }
}
