use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 程序配置文件
///
/// 加载顺序：默认值 → TOML 文件（可选） → 环境变量
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 后端 API 根地址（包含 `/elearning`）
    pub api_base_url: String,
    /// Bearer token，为空时不发送 Authorization 头
    pub token: String,
    /// 文件存储服务地址，用于拼接图片 / 音频的完整 URL
    pub storage_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 会话日志文件，记录所有提示信息
    pub output_log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:7716/elearning".to_string(),
            token: String::new(),
            storage_base_url: "http://localhost:8888/storage/files/".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
            output_log_file: None,
        }
    }
}

impl Config {
    /// 从环境变量加载（未设置的项使用默认值）
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    /// 读取 TOML 配置文件，缺失的键使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: display.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: display,
            source,
        })?;
        Ok(config)
    }

    /// 加载配置：文件（如果提供） + 环境变量覆盖
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let base = match path {
            Some(p) => Self::from_toml_file(p)?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides(|name| std::env::var(name).ok()))
    }

    /// 用环境变量覆盖已有配置
    ///
    /// `lookup` 按变量名返回值；解析失败的数值保持原值
    pub fn with_env_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: lookup("ELEARNING_API_BASE_URL").unwrap_or(self.api_base_url),
            token: lookup("ELEARNING_TOKEN").unwrap_or(self.token),
            storage_base_url: lookup("STORAGE_BASE_URL").unwrap_or(self.storage_base_url),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.request_timeout_secs),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            output_log_file: lookup("OUTPUT_LOG_FILE").or(self.output_log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_overrides_defaults() {
        let env: HashMap<&str, &str> = [
            ("ELEARNING_API_BASE_URL", "http://api.test/elearning"),
            ("ELEARNING_TOKEN", "abc"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();

        let config = Config::default().with_env_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_base_url, "http://api.test/elearning");
        assert_eq!(config.token, "abc");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.storage_base_url, Config::default().storage_base_url);
    }

    #[test]
    fn test_unparsable_env_keeps_previous_value() {
        let config = Config::default().with_env_overrides(|k| match k {
            "REQUEST_TIMEOUT_SECS" => Some("soon".to_string()),
            "VERBOSE_LOGGING" => Some("yes please".to_string()),
            _ => None,
        });
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            token = "from-file"
            verbose_logging = true
            "#,
        )
        .unwrap();
        assert_eq!(config.token, "from-file");
        assert!(config.verbose_logging);
        assert_eq!(config.api_base_url, "http://localhost:7716/elearning");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::from_toml_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Config(ConfigError::ReadFailed { .. })
        ));
    }
}
