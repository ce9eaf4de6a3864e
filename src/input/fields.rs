//! # 原始输入字段
//!
//! 界面层提供的完整字段记录。所有字段都是可选字符串，
//! 空白字符串等同于未填写。
//!
//! ## 依赖关系
//! - 被 `input/collector.rs`, `commands/` 使用

use crate::error::{GeoconvError, Result};
use crate::models::{Axis, DmsValue};
use std::fmt;
use std::str::FromStr;

/// 字段标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Easting,
    Northing,
    Latitude,
    Longitude,
    DmsLatitude,
    DmsLongitude,
    LatDegrees,
    LatMinutes,
    LatSeconds,
    LatHemisphere,
    LonDegrees,
    LonMinutes,
    LonSeconds,
    LonHemisphere,
}

impl FieldId {
    pub const ALL: [FieldId; 14] = [
        FieldId::Easting,
        FieldId::Northing,
        FieldId::Latitude,
        FieldId::Longitude,
        FieldId::DmsLatitude,
        FieldId::DmsLongitude,
        FieldId::LatDegrees,
        FieldId::LatMinutes,
        FieldId::LatSeconds,
        FieldId::LatHemisphere,
        FieldId::LonDegrees,
        FieldId::LonMinutes,
        FieldId::LonSeconds,
        FieldId::LonHemisphere,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldId::Easting => "easting",
            FieldId::Northing => "northing",
            FieldId::Latitude => "latitude",
            FieldId::Longitude => "longitude",
            FieldId::DmsLatitude => "dms-latitude",
            FieldId::DmsLongitude => "dms-longitude",
            FieldId::LatDegrees => "lat-degrees",
            FieldId::LatMinutes => "lat-minutes",
            FieldId::LatSeconds => "lat-seconds",
            FieldId::LatHemisphere => "lat-hemisphere",
            FieldId::LonDegrees => "lon-degrees",
            FieldId::LonMinutes => "lon-minutes",
            FieldId::LonSeconds => "lon-seconds",
            FieldId::LonHemisphere => "lon-hemisphere",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FieldId {
    type Err = GeoconvError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        FieldId::ALL
            .iter()
            .copied()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| GeoconvError::InvalidArgument(format!("Unknown field '{}'", s.trim())))
    }
}

/// 某一坐标轴的 DMS 相关字段
#[derive(Debug, Clone, Copy)]
pub struct DmsFieldSet {
    pub text: FieldId,
    pub degrees: FieldId,
    pub minutes: FieldId,
    pub seconds: FieldId,
    pub hemisphere: FieldId,
}

impl DmsFieldSet {
    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Latitude => DmsFieldSet {
                text: FieldId::DmsLatitude,
                degrees: FieldId::LatDegrees,
                minutes: FieldId::LatMinutes,
                seconds: FieldId::LatSeconds,
                hemisphere: FieldId::LatHemisphere,
            },
            Axis::Longitude => DmsFieldSet {
                text: FieldId::DmsLongitude,
                degrees: FieldId::LonDegrees,
                minutes: FieldId::LonMinutes,
                seconds: FieldId::LonSeconds,
                hemisphere: FieldId::LonHemisphere,
            },
        }
    }
}

/// 原始字段记录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub easting: Option<String>,
    pub northing: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub dms_latitude: Option<String>,
    pub dms_longitude: Option<String>,
    pub lat_degrees: Option<String>,
    pub lat_minutes: Option<String>,
    pub lat_seconds: Option<String>,
    pub lat_hemisphere: Option<String>,
    pub lon_degrees: Option<String>,
    pub lon_minutes: Option<String>,
    pub lon_seconds: Option<String>,
    pub lon_hemisphere: Option<String>,
}

impl RawFields {
    /// 旧版界面的示例默认值
    pub fn demo() -> Self {
        let mut fields = RawFields::default();
        for (id, value) in [
            (FieldId::Easting, "1199601.82"),
            (FieldId::Northing, "333506.23"),
            (FieldId::Latitude, "5.588358"),
            (FieldId::Longitude, "-0.175317"),
            (FieldId::LatDegrees, "5"),
            (FieldId::LatMinutes, "35"),
            (FieldId::LatSeconds, "18.09"),
            (FieldId::LatHemisphere, "N"),
            (FieldId::LonDegrees, "0"),
            (FieldId::LonMinutes, "10"),
            (FieldId::LonSeconds, "31.14"),
            (FieldId::LonHemisphere, "W"),
        ] {
            fields.set(id, value);
        }
        fields
    }

    fn slot(&self, id: FieldId) -> &Option<String> {
        match id {
            FieldId::Easting => &self.easting,
            FieldId::Northing => &self.northing,
            FieldId::Latitude => &self.latitude,
            FieldId::Longitude => &self.longitude,
            FieldId::DmsLatitude => &self.dms_latitude,
            FieldId::DmsLongitude => &self.dms_longitude,
            FieldId::LatDegrees => &self.lat_degrees,
            FieldId::LatMinutes => &self.lat_minutes,
            FieldId::LatSeconds => &self.lat_seconds,
            FieldId::LatHemisphere => &self.lat_hemisphere,
            FieldId::LonDegrees => &self.lon_degrees,
            FieldId::LonMinutes => &self.lon_minutes,
            FieldId::LonSeconds => &self.lon_seconds,
            FieldId::LonHemisphere => &self.lon_hemisphere,
        }
    }

    fn slot_mut(&mut self, id: FieldId) -> &mut Option<String> {
        match id {
            FieldId::Easting => &mut self.easting,
            FieldId::Northing => &mut self.northing,
            FieldId::Latitude => &mut self.latitude,
            FieldId::Longitude => &mut self.longitude,
            FieldId::DmsLatitude => &mut self.dms_latitude,
            FieldId::DmsLongitude => &mut self.dms_longitude,
            FieldId::LatDegrees => &mut self.lat_degrees,
            FieldId::LatMinutes => &mut self.lat_minutes,
            FieldId::LatSeconds => &mut self.lat_seconds,
            FieldId::LatHemisphere => &mut self.lat_hemisphere,
            FieldId::LonDegrees => &mut self.lon_degrees,
            FieldId::LonMinutes => &mut self.lon_minutes,
            FieldId::LonSeconds => &mut self.lon_seconds,
            FieldId::LonHemisphere => &mut self.lon_hemisphere,
        }
    }

    /// 读取字段；空白视为未填写，返回去除首尾空白后的值
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.slot(id)
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        *self.slot_mut(id) = Some(value.into());
    }

    pub fn clear(&mut self, id: FieldId) {
        *self.slot_mut(id) = None;
    }

    /// 用解析结果回填某一轴的分量字段
    pub fn fill_components(&mut self, axis: Axis, value: &DmsValue) {
        let set = DmsFieldSet::for_axis(axis);
        self.set(set.degrees, value.degrees().to_string());
        self.set(set.minutes, value.minutes().to_string());
        // 59.995 及以上舍入后为 "60.00"，截到 59.99 保持分量仍然合法
        let seconds = match format!("{:.2}", value.seconds()) {
            rounded if rounded == "60.00" => "59.99".to_string(),
            rounded => rounded,
        };
        self.set(set.seconds, seconds);
        self.set(set.hemisphere, value.hemisphere().to_string());
    }

    /// 已填写的字段
    pub fn populated(&self) -> Vec<(FieldId, &str)> {
        FieldId::ALL
            .iter()
            .filter_map(|&id| self.get(id).map(|v| (id, v)))
            .collect()
    }
}
