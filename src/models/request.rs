//! # 转换请求数据模型
//!
//! 发往转换服务的 JSON 请求体：
//! ```text
//! {"type": "grid_to_geo", "easting": 1199601.82, "northing": 333506.23}
//! {"type": "geo_to_grid", "latitude": 5.588358, "longitude": -0.175317}
//! {"type": "geo_to_grid", "latitude_dms": "5 35 18.09 N", "longitude_dms": "0 10 31.14 W"}
//! ```
//!
//! ## 依赖关系
//! - 被 `input/builder.rs` 构造
//! - 被 `service/` 发送

use crate::models::ConversionDirection;
use serde::{Deserialize, Serialize};

/// 转换请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConversionRequest {
    #[serde(rename = "grid_to_geo")]
    GridToGeo { easting: f64, northing: f64 },

    #[serde(rename = "geo_to_grid")]
    GeoToGrid(GeographicInput),
}

/// geo-to-grid 请求的两种坐标表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeographicInput {
    Decimal { latitude: f64, longitude: f64 },
    Dms {
        latitude_dms: String,
        longitude_dms: String,
    },
}

impl ConversionRequest {
    pub fn direction(&self) -> ConversionDirection {
        match self {
            ConversionRequest::GridToGeo { .. } => ConversionDirection::GridToGeographic,
            ConversionRequest::GeoToGrid(_) => ConversionDirection::GeographicToGrid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grid_request_shape() {
        let req = ConversionRequest::GridToGeo {
            easting: 1199601.82,
            northing: 333506.23,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"type": "grid_to_geo", "easting": 1199601.82, "northing": 333506.23})
        );
        assert_eq!(req.direction(), ConversionDirection::GridToGeographic);
    }

    #[test]
    fn test_geo_request_shapes() {
        let req = ConversionRequest::GeoToGrid(GeographicInput::Decimal {
            latitude: 5.5,
            longitude: -0.25,
        });
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"type": "geo_to_grid", "latitude": 5.5, "longitude": -0.25})
        );

        let req = ConversionRequest::GeoToGrid(GeographicInput::Dms {
            latitude_dms: "5 35 18.09 N".to_string(),
            longitude_dms: "0 10 31.14 W".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "type": "geo_to_grid",
                "latitude_dms": "5 35 18.09 N",
                "longitude_dms": "0 10 31.14 W"
            })
        );
        assert_eq!(req.direction(), ConversionDirection::GeographicToGrid);
    }

    #[test]
    fn test_dms_request_reads_back() {
        let raw = r#"{"type":"geo_to_grid","latitude_dms":"5 35 18.09 N","longitude_dms":"0 10 31.14 W"}"#;
        let req: ConversionRequest = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            req,
            ConversionRequest::GeoToGrid(GeographicInput::Dms { .. })
        ));
    }
}
