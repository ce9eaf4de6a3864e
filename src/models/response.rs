//! # 转换服务响应数据模型
//!
//! 响应体为 `{success: true, data: {...}}` 或 `{success: false, error: "..."}`。
//! `data` 的内部结构对核心逻辑不透明，仅由结果展示模块读取。
//!
//! ## 依赖关系
//! - 被 `service/` 反序列化
//! - 被 `utils/presenter.rs` 读取

use crate::error::{GeoconvError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 转换服务原始响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceResponse {
    #[cfg(test)]
    pub fn ok(data: Map<String, Value>) -> Self {
        ServiceResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    #[cfg(test)]
    pub fn failed(error: impl Into<String>) -> Self {
        ServiceResponse {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// 区分成功与失败；失败时原样返回服务端错误文本
    pub fn into_result(self) -> Result<ConversionResult> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(ConversionResult(data)),
            (true, None, _) => Err(GeoconvError::InvalidResponse(
                "success without data".to_string(),
            )),
            (false, _, Some(error)) => Err(GeoconvError::Remote(error)),
            (false, _, None) => Err(GeoconvError::InvalidResponse(
                "failure without error message".to_string(),
            )),
        }
    }
}

/// 转换结果（不透明）
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult(Map<String, Value>);

impl ConversionResult {
    /// 读取数值字段
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// 读取字符串字段
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let raw = r#"{"success": true, "data": {"latitude": 5.588358, "latitude_dms": "5° 35' 18.09\" N"}}"#;
        let resp: ServiceResponse = serde_json::from_str(raw).unwrap();
        let result = resp.into_result().unwrap();
        assert_eq!(result.number("latitude"), Some(5.588358));
        assert_eq!(result.text("latitude_dms"), Some("5° 35' 18.09\" N"));
        assert_eq!(result.number("missing"), None);
    }

    #[test]
    fn test_error_response_is_verbatim() {
        let raw = r#"{"success": false, "error": "could not convert string to float: 'abc'"}"#;
        let resp: ServiceResponse = serde_json::from_str(raw).unwrap();
        match resp.into_result() {
            Err(GeoconvError::Remote(msg)) => {
                assert_eq!(msg, "could not convert string to float: 'abc'")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_responses() {
        let resp = ServiceResponse {
            success: true,
            data: None,
            error: None,
        };
        assert!(matches!(
            resp.into_result(),
            Err(GeoconvError::InvalidResponse(_))
        ));

        let resp: ServiceResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(matches!(
            resp.into_result(),
            Err(GeoconvError::InvalidResponse(_))
        ));
    }
}
