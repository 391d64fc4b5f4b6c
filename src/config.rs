use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件名（位于工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "film_review.toml";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 情感分析服务地址
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：默认值 → TOML 文件（可选）→ 环境变量
    ///
    /// `FILM_REVIEW_CONFIG` 指定的文件必须存在；未设置时查找 `film_review.toml`，
    /// 默认文件不存在时直接使用默认值。
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let named = lookup("FILM_REVIEW_CONFIG").filter(|path| !path.trim().is_empty());
        let base = match named {
            Some(path) => Self::from_toml_file(Path::new(path.trim()))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_toml_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        base.with_env_overrides(lookup)
    }

    /// 只从环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: origin.to_string(),
            source,
        })?;
        config.validated()
    }

    /// 用环境变量覆盖已有配置
    ///
    /// `lookup` 抽出来是为了测试时不必修改进程环境。
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("REVIEW_API_URL") {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
        if let Some(value) = lookup("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", &value, "u64")?;
        }
        if let Some(value) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_env("VERBOSE_LOGGING", &value, "bool")?;
        }
        self.validated()
    }

    /// 预测接口完整地址
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_base_url.trim_end_matches('/'))
    }

    /// 健康检查接口完整地址
    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_base_url.trim_end_matches('/'))
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let url = self.api_base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(var_name: &str, value: &str, expected_type: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::EnvVarParseFailed {
        var_name: var_name.to_string(),
        value: value.to_string(),
        expected_type: expected_type.to_string(),
    })
}
