//! # 结果展示
//!
//! 将转换服务返回的数值字段格式化为终端表格，或显示错误信息。
//! 经纬度保留 6 位小数，英尺/米保留 2 位小数，DMS 字符串原样显示。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/session.rs` 使用
//! - 使用 `service/orchestrator.rs` 的 `DisplayState`
//! - 使用 `tabled`, `utils/output.rs`

use crate::error::GeoconvError;
use crate::models::{ConversionDirection, ConversionResult};
use crate::service::DisplayState;
use crate::utils::output;

use tabled::{Table, Tabled};
use tracing::debug;

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "Field")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 字段显示方式
#[derive(Clone, Copy)]
enum Shape {
    Degrees,
    Feet,
    Meters,
    Text,
}

const GRID_TO_GEO_ROWS: &[(&str, &str, Shape)] = &[
    ("Latitude", "latitude", Shape::Degrees),
    ("Longitude", "longitude", Shape::Degrees),
    ("Latitude (DMS)", "latitude_dms", Shape::Text),
    ("Longitude (DMS)", "longitude_dms", Shape::Text),
    ("Original Easting", "easting_ft", Shape::Feet),
    ("Original Northing", "northing_ft", Shape::Feet),
];

const GEO_TO_GRID_ROWS: &[(&str, &str, Shape)] = &[
    ("Easting", "easting_ft", Shape::Feet),
    ("Northing", "northing_ft", Shape::Feet),
    ("Easting (meters)", "easting_m", Shape::Meters),
    ("Northing (meters)", "northing_m", Shape::Meters),
    ("Original Latitude", "latitude", Shape::Degrees),
    ("Original Longitude", "longitude", Shape::Degrees),
    ("Original Latitude (DMS)", "latitude_dms", Shape::Text),
    ("Original Longitude (DMS)", "longitude_dms", Shape::Text),
];

fn format_value(result: &ConversionResult, key: &str, shape: Shape) -> String {
    let formatted = match shape {
        Shape::Degrees => result.number(key).map(|v| format!("{:.6}", v)),
        Shape::Feet => result.number(key).map(|v| format!("{:.2} ft", v)),
        Shape::Meters => result.number(key).map(|v| format!("{:.2} m", v)),
        Shape::Text => result.text(key).map(str::to_string),
    };
    formatted.unwrap_or_else(|| "-".to_string())
}

/// 按请求方向生成结果表格
pub fn render_result(direction: ConversionDirection, result: &ConversionResult) -> String {
    let layout = match direction {
        ConversionDirection::GridToGeographic => GRID_TO_GEO_ROWS,
        ConversionDirection::GeographicToGrid => GEO_TO_GRID_ROWS,
    };

    let rows: Vec<ResultRow> = layout
        .iter()
        .map(|&(label, key, shape)| ResultRow {
            label,
            value: format_value(result, key, shape),
        })
        .collect();

    Table::new(&rows).to_string()
}

/// 显示当前显示状态
pub fn present(display: &DisplayState) {
    match display {
        DisplayState::Empty => {}
        DisplayState::Result { direction, result } => {
            output::print_header(match direction {
                ConversionDirection::GridToGeographic => "Grid -> Geographic",
                ConversionDirection::GeographicToGrid => "Geographic -> Grid",
            });
            println!("{}", render_result(*direction, result));
        }
        DisplayState::Error(e) => present_error(e),
    }
}

fn present_error(err: &GeoconvError) {
    output::print_error(&err.to_string());
    match err {
        GeoconvError::Transport { detail } => {
            debug!(%detail, "transport failure detail");
            output::print_info("Check that the conversion service is running (see --service-url)");
        }
        e if e.is_local() => output::print_info("Fix the input and submit again"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceResponse;

    fn result(raw: &str) -> ConversionResult {
        serde_json::from_str::<ServiceResponse>(raw)
            .unwrap()
            .into_result()
            .unwrap()
    }

    #[test]
    fn test_grid_to_geo_table() {
        let r = result(
            r#"{"success": true, "data": {
                "latitude": 5.5883581234, "longitude": -0.1753171234,
                "latitude_dms": "5° 35' 18.09\" N", "longitude_dms": "0° 10' 31.14\" W",
                "easting_ft": 1199601.823, "northing_ft": 333506.2345
            }}"#,
        );
        let table = render_result(ConversionDirection::GridToGeographic, &r);
        assert!(table.contains("5.588358"));
        assert!(table.contains("-0.175317"));
        assert!(table.contains("1199601.82 ft"));
        assert!(table.contains("0° 10' 31.14\" W"));
        assert!(!table.contains("meters"));
    }

    #[test]
    fn test_geo_to_grid_table_with_missing_field() {
        let r = result(r#"{"success": true, "data": {"easting_m": 365638.1, "northing_ft": 1.0}}"#);
        let table = render_result(ConversionDirection::GeographicToGrid, &r);
        assert!(table.contains("365638.10 m"));
        assert!(table.contains("1.00 ft"));
        assert!(table.contains("Original Longitude (DMS)"));
        assert!(table.contains(" - "));
    }
}
