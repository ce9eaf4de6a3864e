//! # HTTP 转换服务客户端
//!
//! 通过 `POST {service_url}/convert` 调用外部转换服务。
//! 使用阻塞式客户端：整个程序是单线程事件驱动的，请求在途期间提交被禁用。
//!
//! ## 依赖关系
//! - 实现 `service/mod.rs` 中的 `ConversionService`
//! - 使用 `reqwest` (blocking)

use crate::error::{GeoconvError, Result};
use crate::models::{ConversionRequest, ServiceResponse};
use crate::service::ConversionService;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// 转换服务客户端
pub struct HttpConversionService {
    client: Client,
    endpoint: Url,
}

impl HttpConversionService {
    /// 创建客户端；`timeout` 由传输层负责
    pub fn new(service_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = convert_endpoint(service_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                GeoconvError::InvalidArgument(format!("HTTP client setup failed: {}", e))
            })?;

        Ok(HttpConversionService { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ConversionService for HttpConversionService {
    fn convert(&mut self, request: &ConversionRequest) -> anyhow::Result<ServiceResponse> {
        debug!(endpoint = %self.endpoint, ?request, "POST conversion request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .with_context(|| format!("Failed to reach {}", self.endpoint))?;

        let status = response.status();
        let body = response
            .text()
            .context("Failed to read conversion service response")?;
        debug!(%status, body_len = body.len(), "conversion service replied");

        match serde_json::from_str::<ServiceResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) if status.is_success() => {
                Err(e).context("Conversion service returned malformed JSON")
            }
            Err(_) => anyhow::bail!("Conversion service returned HTTP {}", status),
        }
    }
}

/// 由服务根地址推导 `/convert` 端点
fn convert_endpoint(service_url: &str) -> Result<Url> {
    let mut base = Url::parse(service_url.trim()).map_err(|e| {
        GeoconvError::InvalidArgument(format!("Invalid service URL '{}': {}", service_url, e))
    })?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(GeoconvError::InvalidArgument(format!(
            "Service URL must use http or https: {}",
            service_url
        )));
    }

    // 保证 join 时追加而不是替换最后一段路径
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join("convert").map_err(|e| {
        GeoconvError::InvalidArgument(format!("Invalid service URL '{}': {}", service_url, e))
    })
}
