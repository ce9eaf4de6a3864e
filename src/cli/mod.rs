//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 单次坐标转换
//! - `dms`: DMS 工具（嵌套子命令）
//!   - `parse`: 解析 DMS 文本
//!   - `from-decimal`: 十进制度转 DMS
//! - `session`: 交互式转换会话
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, dms, session

pub mod convert;
pub mod dms;
pub mod session;

use clap::{Args, Parser, Subcommand};
use std::time::Duration;

/// geoconv - 加纳坐标转换工具
#[derive(Parser)]
#[command(name = "geoconv")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Convert between grid (easting/northing) and geographic (lat/lon, DMS) coordinates",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 全局选项（转换服务与日志配置）
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base URL of the conversion service
    #[arg(
        long,
        global = true,
        env = "GEOCONV_SERVICE_URL",
        default_value = "http://127.0.0.1:5000"
    )]
    pub service_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GEOCONV_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Enable debug logging on stderr
    #[arg(long, global = true, env = "GEOCONV_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl GlobalArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Submit one conversion to the conversion service
    Convert(convert::ConvertArgs),

    /// Parse and convert DMS coordinates locally
    Dms(dms::DmsArgs),

    /// Start an interactive conversion session
    Session(session::SessionArgs),
}
