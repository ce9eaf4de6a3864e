//! # dms 子命令 CLI 定义
//!
//! 本地 DMS 工具，不联系转换服务：
//! - `parse`: 解析 DMS 文本并显示各分量
//! - `from-decimal`: 十进制度转换为 DMS
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dms.rs`

use crate::models::Axis;
use clap::{Args, Subcommand, ValueEnum};

/// dms 主命令参数
#[derive(Args, Debug)]
pub struct DmsArgs {
    #[command(subcommand)]
    pub command: DmsCommands,
}

/// dms 子命令
#[derive(Subcommand, Debug)]
pub enum DmsCommands {
    /// Parse DMS text such as "5°35'18.09\"N"
    Parse(ParseArgs),

    /// Convert decimal degrees to DMS
    FromDecimal(FromDecimalArgs),
}

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// DMS text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl ParseArgs {
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

/// 坐标轴参数
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AxisArg {
    /// Latitude (N/S)
    #[value(alias = "latitude")]
    Lat,
    /// Longitude (E/W)
    #[value(alias = "longitude")]
    Lon,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Lat => Axis::Latitude,
            AxisArg::Lon => Axis::Longitude,
        }
    }
}

/// from-decimal 子命令参数
#[derive(Args, Debug)]
pub struct FromDecimalArgs {
    /// Decimal degrees (negative for S/W)
    #[arg(allow_hyphen_values = true)]
    pub value: f64,

    /// Which axis the value belongs to
    #[arg(short, long, value_enum)]
    pub axis: AxisArg,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_parse_joins_words() {
        let cli = Cli::try_parse_from(["geoconv", "dms", "parse", "N", "5", "35", "18.09"]).unwrap();
        let Commands::Dms(DmsArgs {
            command: DmsCommands::Parse(args),
        }) = cli.command
        else {
            panic!("expected dms parse");
        };
        assert_eq!(args.joined(), "N 5 35 18.09");
    }

    #[test]
    fn test_from_decimal_negative_value() {
        let cli =
            Cli::try_parse_from(["geoconv", "dms", "from-decimal", "-0.175317", "--axis", "lon"])
                .unwrap();
        let Commands::Dms(DmsArgs {
            command: DmsCommands::FromDecimal(args),
        }) = cli.command
        else {
            panic!("expected dms from-decimal");
        };
        assert_eq!(args.value, -0.175317);
        assert_eq!(Axis::from(args.axis), Axis::Longitude);
    }
}
