/// 情感分析服务客户端
///
/// 封装所有与情感分析服务相关的调用逻辑
use crate::config::Config;
use crate::error::{GatewayError, FALLBACK_ERROR_MESSAGE};
use crate::models::{AnalysisResult, ApiError, HealthStatus, PredictRequest};
use crate::utils::logging::truncate_text;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// 请求网关
///
/// 提交控制器只依赖这个能力，测试时可以换成假实现。
/// 调用方保证 `text` 已通过校验；实现方仍需在序列化前去掉首尾空白。
pub trait ReviewGateway: Send + Sync + 'static {
    fn submit_review(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<AnalysisResult, GatewayError>> + Send;
}

/// 情感分析服务客户端
///
/// 无状态，单次调用只发一个请求，不重试。
#[derive(Clone)]
pub struct SentimentClient {
    http: reqwest::Client,
    predict_url: String,
    health_url: String,
}

impl SentimentClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(GatewayError::transport)?;

        Ok(Self {
            http,
            predict_url: config.predict_url(),
            health_url: config.health_url(),
        })
    }

    /// 提交评论并解析分析结果
    ///
    /// # 返回
    /// - 2xx：解析为 [`AnalysisResult`]
    /// - 非 2xx：按 [`ApiError`] 解析，取 `detail`，缺失时用统一提示
    /// - 无响应或 JSON 无法解析：传输错误
    pub async fn predict(&self, text: &str) -> Result<AnalysisResult, GatewayError> {
        let request = PredictRequest::new(text);
        debug!(
            "POST {} 评论: {}",
            self.predict_url,
            truncate_text(&request.text, 80)
        );

        let response = self
            .http
            .post(&self.predict_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("请求情感分析服务失败: {}", e);
                GatewayError::transport(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("读取响应体失败 (HTTP {}): {}", status.as_u16(), e);
            GatewayError::transport(e)
        })?;
        debug!("响应 HTTP {}: {}", status.as_u16(), truncate_text(&body, 200));

        if !status.is_success() {
            let api_error: ApiError = serde_json::from_str(&body).map_err(|e| {
                error!("错误响应不是合法 JSON (HTTP {}): {}", status.as_u16(), e);
                GatewayError::transport(e)
            })?;
            let message = api_error
                .detail_message()
                .unwrap_or(FALLBACK_ERROR_MESSAGE)
                .to_string();
            warn!("服务端拒绝评论 (HTTP {}): {}", status.as_u16(), message);
            return Err(GatewayError::Application {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = serde_json::from_str(&body).map_err(|e| {
            error!("分析结果解析失败: {}", e);
            GatewayError::transport(e)
        })?;

        info!(
            "✓ 分析完成: {} (置信度 {:.2}, 评分 {:.1})",
            result.sentiment, result.confidence, result.rating
        );

        Ok(result)
    }

    /// 健康检查
    pub async fn health(&self) -> Result<HealthStatus, GatewayError> {
        debug!("GET {}", self.health_url);

        let response = self
            .http
            .get(&self.health_url)
            .send()
            .await
            .map_err(GatewayError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Application {
                status: status.as_u16(),
                message: FALLBACK_ERROR_MESSAGE.to_string(),
            });
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(GatewayError::transport)
    }
}

impl ReviewGateway for SentimentClient {
    async fn submit_review(&self, text: &str) -> Result<AnalysisResult, GatewayError> {
        self.predict(text).await
    }
}
