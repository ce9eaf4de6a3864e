//! # 统一错误处理模块
//!
//! 定义 geoconv 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 格式错误: DMS 文本无法匹配任何已知模式
//! - 范围错误: 度/分/秒超出允许范围
//! - 校验错误: 必填字段缺失或不是有限实数
//! - 远端错误: 转换服务返回 `success: false`
//! - 传输错误: 无法与转换服务通信
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::fmt;
use thiserror::Error;

/// DMS 格式提示，附加在格式错误信息后
pub const DMS_USAGE_HINT: &str = r#"Use: "5° 35' 27.51" N" or "5 35 27.51 N""#;

/// 超出范围的 DMS 分量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmsComponent {
    LatitudeDegrees,
    LongitudeDegrees,
    Minutes,
    Seconds,
}

impl fmt::Display for DmsComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DmsComponent::LatitudeDegrees => write!(f, "Latitude degrees"),
            DmsComponent::LongitudeDegrees => write!(f, "Longitude degrees"),
            DmsComponent::Minutes => write!(f, "Minutes"),
            DmsComponent::Seconds => write!(f, "Seconds"),
        }
    }
}

/// geoconv 统一错误类型
#[derive(Error, Debug)]
pub enum GeoconvError {
    // ─────────────────────────────────────────────────────────────
    // DMS 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid DMS format: '{input}' ({reason}). {hint}", hint = DMS_USAGE_HINT)]
    InvalidDmsFormat { input: String, reason: String },

    #[error("{component} out of range: {value} (must be {bound})")]
    OutOfRange {
        component: DmsComponent,
        value: String,
        bound: &'static str,
    },

    // ─────────────────────────────────────────────────────────────
    // 输入校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 转换服务错误
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Remote(String),

    #[error("Conversion failed: could not reach the conversion service")]
    Transport { detail: String },

    #[error("Unexpected response from conversion service: {0}")]
    InvalidResponse(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl GeoconvError {
    /// 是否为输入校验错误（缺失或格式不正确的字段）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GeoconvError::MissingField { .. } | GeoconvError::InvalidField { .. }
        )
    }

    /// 是否为本地错误（无需联系转换服务即可发现）
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            GeoconvError::InvalidDmsFormat { .. } | GeoconvError::OutOfRange { .. }
        ) || self.is_validation()
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GeoconvError>;
