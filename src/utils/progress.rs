//! # 进度提示工具
//!
//! 封装 `indicatif` 提供请求在途时的 spinner。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// 请求在途时的 spinner；调用方在收到响应后 `finish_and_clear`
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap()
            .tick_strings(&["◐", "◓", "◑", "◒", "●"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(TICK_INTERVAL);
    pb
}
