//! # convert 命令实现
//!
//! 单次坐标转换。
//!
//! ## 功能
//! - 按方向/格式收集并校验输入
//! - `--dry-run` 时只打印请求 JSON
//! - 否则提交到转换服务并以表格显示结果
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `input/`, `service/`
//! - 使用 `utils/output.rs`, `utils/presenter.rs`

use crate::cli::convert::ConvertArgs;
use crate::cli::GlobalArgs;
use crate::error::{GeoconvError, Result};
use crate::input;
use crate::models::coverage;
use crate::service::{ConversionOrchestrator, DisplayState, HttpConversionService};
use crate::utils::{output, presenter};

/// 执行 convert 命令
pub fn execute(args: ConvertArgs, global: &GlobalArgs) -> Result<()> {
    let mode = args.mode();
    let fields = args.raw_fields();

    output::print_header(&format!("Converting {}", mode));

    if args.dry_run {
        let request = input::collect(mode, &fields)?;
        for warning in coverage::GHANA.check_request(&request) {
            output::print_warning(&warning);
        }
        let json = serde_json::to_string_pretty(&request).map_err(|e| {
            GeoconvError::InvalidArgument(format!("Cannot encode request: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    let mut service = HttpConversionService::new(&global.service_url, global.timeout())?;
    output::print_info(&format!("Using conversion service at {}", service.endpoint()));

    let mut orchestrator = ConversionOrchestrator::new();
    orchestrator.select_direction(mode.direction);
    orchestrator.select_format(mode.format);

    super::submit_with_progress(&mut orchestrator, &fields, &mut service);

    match orchestrator.take_display() {
        DisplayState::Error(e) => Err(e),
        display => {
            presenter::present(&display);
            Ok(())
        }
    }
}
