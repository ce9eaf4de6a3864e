//! # 转换模式状态机
//!
//! 转换方向 × 输入格式。状态以值的形式返回，不依赖任何全局状态。
//!
//! ## 依赖关系
//! - 被 `service/orchestrator.rs`, `input/collector.rs` 使用
//! - 被 `cli/` 用作参数枚举

use clap::ValueEnum;
use std::fmt;

/// 转换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConversionDirection {
    /// Grid (easting/northing) to latitude/longitude
    #[default]
    #[value(name = "grid-to-geo", alias = "grid")]
    GridToGeographic,
    /// Latitude/longitude to grid (easting/northing)
    #[value(name = "geo-to-grid", alias = "geo")]
    GeographicToGrid,
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionDirection::GridToGeographic => write!(f, "grid-to-geo"),
            ConversionDirection::GeographicToGrid => write!(f, "geo-to-grid"),
        }
    }
}

/// 地理坐标输入格式（仅在 geo-to-grid 方向下有意义）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Decimal degrees
    #[default]
    #[value(name = "dd", alias = "decimal")]
    DecimalDegrees,
    /// Degrees, minutes, seconds
    #[value(name = "dms")]
    Dms,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::DecimalDegrees => write!(f, "dd"),
            InputFormat::Dms => write!(f, "dms"),
        }
    }
}

/// 当前模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeState {
    pub direction: ConversionDirection,
    pub format: InputFormat,
}

impl ModeState {
    /// 选择转换方向，格式保持不变
    pub fn select_direction(self, direction: ConversionDirection) -> ModeState {
        ModeState { direction, ..self }
    }

    /// 选择输入格式，方向保持不变
    pub fn select_format(self, format: InputFormat) -> ModeState {
        ModeState { format, ..self }
    }

    /// 当前生效的输入格式；grid-to-geo 方向下格式不起作用
    pub fn effective_format(&self) -> Option<InputFormat> {
        match self.direction {
            ConversionDirection::GridToGeographic => None,
            ConversionDirection::GeographicToGrid => Some(self.format),
        }
    }
}

impl fmt::Display for ModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effective_format() {
            Some(format) => write!(f, "{} ({})", self.direction, format),
            None => write!(f, "{}", self.direction),
        }
    }
}
