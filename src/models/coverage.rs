//! # 投影覆盖范围
//!
//! 转换服务的投影仅在加纳境内有定义。超出范围的坐标仍会提交，
//! 但调用方应给出警告。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用

use crate::models::{ConversionRequest, DmsValue, GeographicInput};

/// 经纬度矩形范围（十进制度）
#[derive(Debug, Clone, Copy)]
pub struct CoverageArea {
    pub name: &'static str,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// 加纳国家坐标网覆盖范围
pub const GHANA: CoverageArea = CoverageArea {
    name: "Ghana",
    lat_min: 4.0,
    lat_max: 11.5,
    lon_min: -3.5,
    lon_max: 1.5,
};

impl CoverageArea {
    pub fn contains_latitude(&self, lat: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat)
    }

    pub fn contains_longitude(&self, lon: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&lon)
    }

    /// 检查请求中的地理坐标，返回超出范围的描述；grid 请求不检查
    pub fn check_request(&self, request: &ConversionRequest) -> Vec<String> {
        let (lat, lon) = match request {
            ConversionRequest::GridToGeo { .. } => return Vec::new(),
            ConversionRequest::GeoToGrid(GeographicInput::Decimal {
                latitude,
                longitude,
            }) => (Some(*latitude), Some(*longitude)),
            ConversionRequest::GeoToGrid(GeographicInput::Dms {
                latitude_dms,
                longitude_dms,
            }) => (decode(latitude_dms), decode(longitude_dms)),
        };

        let mut warnings = Vec::new();
        if let Some(lat) = lat.filter(|v| !self.contains_latitude(*v)) {
            warnings.push(format!(
                "Latitude {:.6} is outside {} ({} to {})",
                lat, self.name, self.lat_min, self.lat_max
            ));
        }
        if let Some(lon) = lon.filter(|v| !self.contains_longitude(*v)) {
            warnings.push(format!(
                "Longitude {:.6} is outside {} ({} to {})",
                lon, self.name, self.lon_min, self.lon_max
            ));
        }
        warnings
    }
}

fn decode(canonical: &str) -> Option<f64> {
    crate::parsers::dms::parse(canonical)
        .ok()
        .map(|v: DmsValue| v.to_decimal())
}
