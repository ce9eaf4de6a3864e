//! # 请求构建器
//!
//! 将校验通过的输入映射为转换服务的请求体。纯函数，不做任何校验。
//!
//! ## 依赖关系
//! - 被 `input/collector.rs` 调用
//! - 使用 `models/request.rs`

use crate::input::collector::ValidatedInput;
use crate::models::{ConversionRequest, GeographicInput};

/// 构建转换请求；DMS 值序列化为规范格式 `"D M S H"`
pub fn build(input: ValidatedInput) -> ConversionRequest {
    match input {
        ValidatedInput::Grid { easting, northing } => {
            ConversionRequest::GridToGeo { easting, northing }
        }
        ValidatedInput::Decimal {
            latitude,
            longitude,
        } => ConversionRequest::GeoToGrid(GeographicInput::Decimal {
            latitude,
            longitude,
        }),
        ValidatedInput::Dms {
            latitude,
            longitude,
        } => ConversionRequest::GeoToGrid(GeographicInput::Dms {
            latitude_dms: latitude.to_string(),
            longitude_dms: longitude.to_string(),
        }),
    }
}
