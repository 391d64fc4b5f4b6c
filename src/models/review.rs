use serde::{Deserialize, Serialize};
use std::fmt;

/// 情感分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 服务端大小写不固定，反序列化时忽略大小写
impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SentimentVisitor;

        impl<'de> Visitor<'de> for SentimentVisitor {
            type Value = Sentiment;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("\"positive\" or \"negative\" (any case)")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.eq_ignore_ascii_case("positive") {
                    Ok(Sentiment::Positive)
                } else if value.eq_ignore_ascii_case("negative") {
                    Ok(Sentiment::Negative)
                } else {
                    Err(E::unknown_variant(value, &["Positive", "Negative"]))
                }
            }
        }

        deserializer.deserialize_str(SentimentVisitor)
    }
}

/// 分析结果
///
/// 只由网关成功调用产生，收到后不再修改。
/// `confidence` 约定在 [0, 1]，`rating` 约定在 [0, 10]，本层不做校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub rating: f64,
}

/// `POST /predict` 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

impl PredictRequest {
    /// 构造请求体，总是先去掉首尾空白
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
        }
    }
}

/// 服务端错误响应体
///
/// FastAPI 的参数校验错误中 `detail` 是数组，因此这里先按任意 JSON 接收。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiError {
    /// 仅当 `detail` 是非空字符串时返回
    pub fn detail_message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

/// `GET /health` 响应体
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
