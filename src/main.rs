//! # geoconv - 加纳坐标转换工具
//!
//! 在国家坐标网 (easting/northing, 英尺) 与地理坐标 (经纬度，十进制度或度分秒)
//! 之间转换。投影计算由外部转换服务完成，本程序负责输入的解析、校验与请求构建。
//!
//! ## 子命令
//! - `convert` - 单次坐标转换
//! - `dms`     - 本地 DMS 工具
//!   - `parse`        - 解析 DMS 文本
//!   - `from-decimal` - 十进制度转 DMS
//! - `session` - 交互式转换会话
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── service/   (转换服务与流程编排)
//!   │     ├── input/     (字段收集与请求构建)
//!   │     ├── parsers/   (DMS 解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出与展示)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod input;
mod models;
mod parsers;
mod service;
mod utils;

use clap::Parser;
use cli::Cli;
use tracing::Level;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let level = if cli.global.debug {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::run(cli) {
        if let error::GeoconvError::Transport { detail } = &e {
            tracing::debug!(%detail, "transport failure detail");
        }
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
