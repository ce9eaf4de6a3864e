//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `input/`, `service/`, `utils/`
//! - 子模块: convert, dms, session

pub mod convert;
pub mod dms;
pub mod session;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::input::RawFields;
use crate::models::{coverage, ConversionRequest, ServiceResponse};
use crate::service::{ConversionOrchestrator, ConversionService, SubmitOutcome};
use crate::utils::{output, progress};

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert(args) => convert::execute(args, &cli.global),
        Commands::Dms(args) => dms::execute(args),
        Commands::Session(args) => session::execute(args, &cli.global),
    }
}

/// 为转换服务加上覆盖范围检查与 spinner
struct WithProgress<'a, S: ?Sized> {
    inner: &'a mut S,
}

impl<S: ConversionService + ?Sized> ConversionService for WithProgress<'_, S> {
    fn convert(&mut self, request: &ConversionRequest) -> anyhow::Result<ServiceResponse> {
        for warning in coverage::GHANA.check_request(request) {
            output::print_warning(&warning);
        }
        let pb = progress::create_spinner("Converting...");
        let response = self.inner.convert(request);
        pb.finish_and_clear();
        response
    }
}

/// 带进度提示的一次提交
fn submit_with_progress<S: ConversionService + ?Sized>(
    orchestrator: &mut ConversionOrchestrator,
    fields: &RawFields,
    service: &mut S,
) -> SubmitOutcome {
    let outcome = orchestrator.submit(fields, &mut WithProgress { inner: service });
    if outcome == SubmitOutcome::Busy {
        output::print_warning("A conversion is already in progress");
    }
    outcome
}
