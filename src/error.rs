//! 错误类型
//!
//! 三类失败最终都落到 `SubmissionState::Failed(message)`，
//! 这里只在内部区分它们，方便日志追踪。

use thiserror::Error;

/// 服务端未给出 `detail` 时使用的统一提示
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// 传输错误没有任何描述时使用的提示
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// 本地校验错误
///
/// 每个变体对应一条校验规则，`Display` 即展示给用户的固定文案。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The review cannot be empty.")]
    Empty,
    #[error("The review must contain at least one letter.")]
    NoLetters,
    #[error("The review must contain at least 10 words.")]
    TooFewWords,
    #[error("The review must contain no more than 256 words.")]
    TooManyWords,
    #[error("Each word in the review must not exceed 30 characters.")]
    WordTooLong,
}

/// 请求网关错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// 服务端拒绝了请求（非 2xx）
    #[error("服务端拒绝请求 (HTTP {status}): {message}")]
    Application { status: u16, message: String },

    /// 网络或解析失败
    #[error("传输失败: {}", .description.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE))]
    Transport { description: Option<String> },
}

impl GatewayError {
    /// 从任意底层错误构造传输错误，空描述视为无描述
    pub fn transport(source: impl std::fmt::Display) -> Self {
        let description = source.to_string();
        GatewayError::Transport {
            description: (!description.trim().is_empty()).then_some(description),
        }
    }

    /// 写入 `Failed(message)` 的文案
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Application { message, .. } => message.clone(),
            GatewayError::Transport { description } => description
                .clone()
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },

    #[error("无效的服务地址: {0}")]
    InvalidBaseUrl(String),

    #[error("请求超时必须大于 0 秒")]
    InvalidTimeout,
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("网关错误: {0}")]
    Gateway(#[from] GatewayError),

    #[error("会话已结束")]
    SessionClosed,

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
