//! # convert 子命令 CLI 定义
//!
//! 单次提交坐标转换。每个原始输入字段对应一个选项，
//! 校验由输入收集器完成，这里不做任何解析。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::input::{FieldId, RawFields};
use crate::models::{ConversionDirection, InputFormat, ModeState};

use clap::Args;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = ConversionDirection::GridToGeographic)]
    pub direction: ConversionDirection,

    /// Geographic input format (geo-to-grid only)
    #[arg(short, long, value_enum, default_value_t = InputFormat::DecimalDegrees)]
    pub format: InputFormat,

    /// Print the request JSON instead of sending it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Grid easting (feet)
    #[arg(long, allow_hyphen_values = true)]
    pub easting: Option<String>,

    /// Grid northing (feet)
    #[arg(long, allow_hyphen_values = true)]
    pub northing: Option<String>,

    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<String>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<String>,

    /// Latitude as DMS text, e.g. "5 35 18.09 N"
    #[arg(long, allow_hyphen_values = true)]
    pub dms_latitude: Option<String>,

    /// Longitude as DMS text, e.g. "0 10 31.14 W"
    #[arg(long, allow_hyphen_values = true)]
    pub dms_longitude: Option<String>,

    /// Latitude degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat_degrees: Option<String>,

    /// Latitude minutes
    #[arg(long)]
    pub lat_minutes: Option<String>,

    /// Latitude seconds
    #[arg(long)]
    pub lat_seconds: Option<String>,

    /// Latitude hemisphere (N/S, default N)
    #[arg(long)]
    pub lat_hemisphere: Option<String>,

    /// Longitude degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon_degrees: Option<String>,

    /// Longitude minutes
    #[arg(long)]
    pub lon_minutes: Option<String>,

    /// Longitude seconds
    #[arg(long)]
    pub lon_seconds: Option<String>,

    /// Longitude hemisphere (E/W, default W)
    #[arg(long)]
    pub lon_hemisphere: Option<String>,
}

impl ConvertArgs {
    pub fn mode(&self) -> ModeState {
        ModeState::default()
            .select_direction(self.direction)
            .select_format(self.format)
    }

    /// 转换为原始字段记录
    pub fn raw_fields(&self) -> RawFields {
        let mut fields = RawFields::default();
        let pairs = [
            (FieldId::Easting, &self.easting),
            (FieldId::Northing, &self.northing),
            (FieldId::Latitude, &self.latitude),
            (FieldId::Longitude, &self.longitude),
            (FieldId::DmsLatitude, &self.dms_latitude),
            (FieldId::DmsLongitude, &self.dms_longitude),
            (FieldId::LatDegrees, &self.lat_degrees),
            (FieldId::LatMinutes, &self.lat_minutes),
            (FieldId::LatSeconds, &self.lat_seconds),
            (FieldId::LatHemisphere, &self.lat_hemisphere),
            (FieldId::LonDegrees, &self.lon_degrees),
            (FieldId::LonMinutes, &self.lon_minutes),
            (FieldId::LonSeconds, &self.lon_seconds),
            (FieldId::LonHemisphere, &self.lon_hemisphere),
        ];
        for (id, value) in pairs {
            if let Some(v) = value {
                fields.set(id, v.clone());
            }
        }
        fields
    }
}
