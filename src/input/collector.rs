//! # 输入收集器
//!
//! 按当前转换方向与输入格式读取原始字段，校验后交给请求构建器。
//!
//! ## 规则
//! - grid-to-geo: easting, northing 必填且为有限实数
//! - geo-to-grid + dd: latitude, longitude 必填且为有限实数
//! - geo-to-grid + dms: 每个坐标轴独立选择
//!   1. 文本字段已填写 → 交给 DMS 解析器
//!   2. 否则度/分/秒分量字段必须全部填写；半球缺省时使用该轴默认值 (N/W)
//!
//! ## 依赖关系
//! - 使用 `input/fields.rs`, `input/builder.rs`
//! - 使用 `parsers/dms.rs`, `models/`

use crate::error::{GeoconvError, Result};
use crate::input::builder;
use crate::input::fields::{DmsFieldSet, FieldId, RawFields};
use crate::models::{
    Axis, ConversionDirection, ConversionRequest, DmsValue, Hemisphere, InputFormat, ModeState,
};
use crate::parsers::dms;

/// 校验通过的输入
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedInput {
    Grid { easting: f64, northing: f64 },
    Decimal { latitude: f64, longitude: f64 },
    Dms { latitude: DmsValue, longitude: DmsValue },
}

/// 收集并校验输入，构建转换请求
pub fn collect(mode: ModeState, fields: &RawFields) -> Result<ConversionRequest> {
    validate(mode, fields).map(builder::build)
}

/// 只做校验，不构建请求
pub fn validate(mode: ModeState, fields: &RawFields) -> Result<ValidatedInput> {
    match (mode.direction, mode.format) {
        (ConversionDirection::GridToGeographic, _) => Ok(ValidatedInput::Grid {
            easting: read_number(fields, FieldId::Easting)?,
            northing: read_number(fields, FieldId::Northing)?,
        }),
        (ConversionDirection::GeographicToGrid, InputFormat::DecimalDegrees) => {
            Ok(ValidatedInput::Decimal {
                latitude: read_number(fields, FieldId::Latitude)?,
                longitude: read_number(fields, FieldId::Longitude)?,
            })
        }
        (ConversionDirection::GeographicToGrid, InputFormat::Dms) => Ok(ValidatedInput::Dms {
            latitude: read_dms(fields, Axis::Latitude)?,
            longitude: read_dms(fields, Axis::Longitude)?,
        }),
    }
}

/// 读取必填的有限实数字段
fn read_number(fields: &RawFields, id: FieldId) -> Result<f64> {
    let raw = fields.get(id).ok_or_else(|| missing(id.name()))?;
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(id, raw, "not a finite number"))
}

fn read_integer(fields: &RawFields, id: FieldId) -> Result<i64> {
    let raw = fields.get(id).ok_or_else(|| missing(id.name()))?;
    raw.parse::<i64>()
        .map_err(|_| invalid(id, raw, "not a whole number"))
}

/// 读取某一轴的 DMS 值；文本字段优先
fn read_dms(fields: &RawFields, axis: Axis) -> Result<DmsValue> {
    let set = DmsFieldSet::for_axis(axis);

    let (value, source) = match fields.get(set.text) {
        Some(text) => (dms::parse(text)?, set.text),
        None => (compose(fields, axis, &set)?, set.hemisphere),
    };

    if value.axis() != axis {
        let expected = match axis {
            Axis::Latitude => "N or S",
            Axis::Longitude => "E or W",
        };
        return Err(invalid(
            source,
            &value.hemisphere().to_string(),
            &format!("{} hemisphere must be {}", axis, expected),
        ));
    }

    Ok(value)
}

/// 由分量字段直接组合，复用 DmsValue 的范围校验
fn compose(fields: &RawFields, axis: Axis, set: &DmsFieldSet) -> Result<DmsValue> {
    let components = [set.degrees, set.minutes, set.seconds];
    if components.iter().all(|&id| fields.get(id).is_none()) {
        return Err(missing(&format!(
            "{} (or {}, {}, {})",
            set.text, set.degrees, set.minutes, set.seconds
        )));
    }

    let degrees = read_integer(fields, set.degrees)?;
    let minutes = read_integer(fields, set.minutes)?;
    let seconds = read_number(fields, set.seconds)?;

    let hemisphere = match fields.get(set.hemisphere) {
        Some(raw) => raw
            .parse::<Hemisphere>()
            .map_err(|_| invalid(set.hemisphere, raw, "expected one of N, S, E, W"))?,
        None => axis.default_hemisphere(),
    };

    DmsValue::new(degrees, minutes, seconds, hemisphere)
}

fn missing(field: &str) -> GeoconvError {
    GeoconvError::MissingField {
        field: field.to_string(),
    }
}

fn invalid(id: FieldId, value: &str, reason: &str) -> GeoconvError {
    GeoconvError::InvalidField {
        field: id.name().to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DmsComponent;
    use crate::models::GeographicInput;

    fn dms_mode() -> ModeState {
        ModeState::default()
            .select_direction(ConversionDirection::GeographicToGrid)
            .select_format(InputFormat::Dms)
    }

    fn fields(pairs: &[(FieldId, &str)]) -> RawFields {
        let mut f = RawFields::default();
        for (id, v) in pairs {
            f.set(*id, *v);
        }
        f
    }

    fn missing_field(err: GeoconvError) -> String {
        match err {
            GeoconvError::MissingField { field } => field,
            other => panic!("expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn test_grid_fields() {
        let f = fields(&[(FieldId::Easting, "1199601.82"), (FieldId::Northing, "333506.23")]);
        let req = collect(ModeState::default(), &f).unwrap();
        assert_eq!(
            req,
            ConversionRequest::GridToGeo {
                easting: 1199601.82,
                northing: 333506.23
            }
        );
    }

    #[test]
    fn test_grid_missing_and_malformed() {
        let f = fields(&[(FieldId::Easting, "1199601.82")]);
        let err = collect(ModeState::default(), &f).unwrap_err();
        assert_eq!(missing_field(err), "northing");

        let f = fields(&[(FieldId::Easting, "12abc"), (FieldId::Northing, "1")]);
        let err = collect(ModeState::default(), &f).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("easting"));

        let f = fields(&[(FieldId::Easting, "inf"), (FieldId::Northing, "NaN")]);
        assert!(collect(ModeState::default(), &f).unwrap_err().is_validation());
    }

    #[test]
    fn test_decimal_fields() {
        let mode = ModeState::default().select_direction(ConversionDirection::GeographicToGrid);
        let f = fields(&[(FieldId::Latitude, "5.588358"), (FieldId::Longitude, "-0.175317")]);
        let req = collect(mode, &f).unwrap();
        assert_eq!(
            req,
            ConversionRequest::GeoToGrid(GeographicInput::Decimal {
                latitude: 5.588358,
                longitude: -0.175317
            })
        );

        let f = fields(&[(FieldId::Latitude, "5.588358"), (FieldId::Longitude, " ")]);
        assert_eq!(missing_field(collect(mode, &f).unwrap_err()), "longitude");
    }

    #[test]
    fn test_dms_text_takes_precedence() {
        // 分量字段即使非法也被忽略
        let f = fields(&[
            (FieldId::DmsLatitude, "5°35'18.09\"N"),
            (FieldId::DmsLongitude, "W 0 10 31.14"),
            (FieldId::LatDegrees, "999"),
            (FieldId::LonMinutes, "abc"),
        ]);
        let req = collect(dms_mode(), &f).unwrap();
        assert_eq!(
            req,
            ConversionRequest::GeoToGrid(GeographicInput::Dms {
                latitude_dms: "5 35 18.09 N".to_string(),
                longitude_dms: "0 10 31.14 W".to_string(),
            })
        );
    }

    #[test]
    fn test_dms_paths_chosen_per_axis() {
        let f = fields(&[
            (FieldId::DmsLatitude, "5 35 18.09 N"),
            (FieldId::LonDegrees, "0"),
            (FieldId::LonMinutes, "10"),
            (FieldId::LonSeconds, "31.14"),
            (FieldId::LonHemisphere, "w"),
        ]);
        match validate(dms_mode(), &f).unwrap() {
            ValidatedInput::Dms {
                latitude,
                longitude,
            } => {
                assert_eq!(latitude.hemisphere(), Hemisphere::North);
                assert_eq!(longitude.to_string(), "0 10 31.14 W");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_negative_zero_seconds_serialize_canonically() {
        let f = fields(&[
            (FieldId::LatDegrees, "5"),
            (FieldId::LatMinutes, "35"),
            (FieldId::LatSeconds, "-0"),
            (FieldId::LatHemisphere, "N"),
            (FieldId::DmsLongitude, "0 10 31.14 W"),
        ]);
        let req = collect(dms_mode(), &f).unwrap();
        let ConversionRequest::GeoToGrid(GeographicInput::Dms { latitude_dms, .. }) = &req else {
            panic!("unexpected: {:?}", req);
        };
        assert_eq!(latitude_dms, "5 35 0 N");
        assert!(dms::parse(latitude_dms).is_ok());
    }

    #[test]
    fn test_default_hemisphere_is_axis_appropriate() {
        let f = fields(&[
            (FieldId::LatDegrees, "5"),
            (FieldId::LatMinutes, "35"),
            (FieldId::LatSeconds, "18.09"),
            (FieldId::LonDegrees, "0"),
            (FieldId::LonMinutes, "10"),
            (FieldId::LonSeconds, "31.14"),
        ]);
        let req = collect(dms_mode(), &f).unwrap();
        assert_eq!(
            req,
            ConversionRequest::GeoToGrid(GeographicInput::Dms {
                latitude_dms: "5 35 18.09 N".to_string(),
                longitude_dms: "0 10 31.14 W".to_string(),
            })
        );
    }

    #[test]
    fn test_dms_missing_fields() {
        let err = collect(dms_mode(), &RawFields::default()).unwrap_err();
        assert!(missing_field(err).starts_with("dms-latitude"));

        let f = fields(&[
            (FieldId::DmsLatitude, "5 35 18.09 N"),
            (FieldId::LonDegrees, "0"),
            (FieldId::LonSeconds, "31.14"),
        ]);
        let err = collect(dms_mode(), &f).unwrap_err();
        assert_eq!(missing_field(err), "lon-minutes");
    }

    #[test]
    fn test_dms_component_range_reuses_parser_rules() {
        let f = fields(&[
            (FieldId::LatDegrees, "5"),
            (FieldId::LatMinutes, "60"),
            (FieldId::LatSeconds, "0"),
            (FieldId::DmsLongitude, "0 10 31.14 W"),
        ]);
        match collect(dms_mode(), &f).unwrap_err() {
            GeoconvError::OutOfRange { component, .. } => {
                assert_eq!(component, DmsComponent::Minutes)
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_dms_text_errors_propagate() {
        let f = fields(&[
            (FieldId::DmsLatitude, "not a coordinate"),
            (FieldId::DmsLongitude, "0 10 31.14 W"),
        ]);
        assert!(matches!(
            collect(dms_mode(), &f),
            Err(GeoconvError::InvalidDmsFormat { .. })
        ));
    }

    #[test]
    fn test_hemisphere_must_match_axis() {
        let f = fields(&[
            (FieldId::DmsLatitude, "5 35 18.09 E"),
            (FieldId::DmsLongitude, "0 10 31.14 W"),
        ]);
        let err = collect(dms_mode(), &f).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("dms-latitude"));

        let f = fields(&[
            (FieldId::DmsLatitude, "5 35 18.09 N"),
            (FieldId::LonDegrees, "0"),
            (FieldId::LonMinutes, "10"),
            (FieldId::LonSeconds, "31"),
            (FieldId::LonHemisphere, "S"),
        ]);
        let err = collect(dms_mode(), &f).unwrap_err();
        assert!(err.to_string().contains("lon-hemisphere"));
    }

    #[test]
    fn test_format_ignored_for_grid_direction() {
        let mode = ModeState::default().select_format(InputFormat::Dms);
        let f = fields(&[(FieldId::Easting, "1"), (FieldId::Northing, "2")]);
        assert!(matches!(
            collect(mode, &f).unwrap(),
            ConversionRequest::GridToGeo { .. }
        ));
    }
}
