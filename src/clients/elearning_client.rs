//! E-learning 后端 API 客户端
//!
//! 负责鉴权头、URL 拼接、状态码检查和响应信封解析，
//! 各业务接口分散在 `test_api` / `user_api` / `vocabulary_api` / `submission_api`

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult, ConfigError};
use crate::models::ApiResponse;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// E-learning 后端客户端
#[derive(Clone)]
pub struct ElearningClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl ElearningClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: config.api_base_url.clone(),
            reason,
        };
        let base_url = Url::parse(&config.api_base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("不能作为路径前缀".to_string()).into());
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// 拼接完整 URL
    ///
    /// 每个路径片段单独转义，ID 中的 `/`、`?`、`#` 不会改变路由或查询参数
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if self.token.is_empty() {
            request
        } else {
            request.bearer_auth(&self.token)
        }
    }

    /// 发送请求并解析响应信封
    ///
    /// # 参数
    /// - `method`: HTTP 方法
    /// - `segments`: 相对 `base_url` 的路径片段
    /// - `query`: 查询参数
    /// - `body`: JSON 请求体
    ///
    /// # 返回
    /// 信封中的 `data`；响应体为空（例如 DELETE）时返回 `None`
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> AppResult<Option<T>> {
        let endpoint = format!("{} /{}", method, segments.join("/"));
        debug!("请求 {} query={:?}", endpoint, query);

        let mut request = self.authorize(self.http.request(method, self.url(segments)));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            debug!("请求 Payload: {}", body);
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.clone(), e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.clone(), e))?;

        if !status.is_success() {
            return Err(ApiError::BadStatus {
                endpoint,
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        if text.trim().is_empty() {
            return Ok(None);
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&text)?;
        if !envelope.is_ok() {
            return Err(AppError::bad_response(endpoint, envelope.message));
        }

        Ok(envelope.data)
    }

    /// 发送请求，要求响应中必须带有 `data`
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> AppResult<T> {
        self.send(method.clone(), segments, query, body)
            .await?
            .ok_or_else(|| AppError::empty_response(format!("{} /{}", method, segments.join("/"))))
    }

    /// 发送请求，只关心成功与否
    pub(crate) async fn execute(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> AppResult<()> {
        self.send::<Value>(method, segments, query, body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> ElearningClient {
        let config = Config {
            api_base_url: base.to_string(),
            ..Config::default()
        };
        ElearningClient::new(&config).unwrap()
    }

    #[test]
    fn test_url_joining() {
        let client = client_for("http://localhost:7716/elearning/");
        assert_eq!(client.base_url(), "http://localhost:7716/elearning");
        assert_eq!(
            client.url(&["tests", "3"]).as_str(),
            "http://localhost:7716/elearning/tests/3"
        );
        assert_eq!(
            client.url(&["part-two", "swap"]).as_str(),
            "http://localhost:7716/elearning/part-two/swap"
        );
        assert_eq!(client_for("http://host").url(&["tests"]).as_str(), "http://host/tests");
    }

    #[test]
    fn test_text_ids_are_escaped_as_one_segment() {
        let client = client_for("http://localhost:7716/elearning");
        let url = client.url(&["part-one", "a/b?x=1#frag"]);

        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        let segments: Vec<&str> = url.path_segments().map(|s| s.collect()).unwrap_or_default();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], "part-one");
        assert!(segments[2].starts_with("a%2Fb%3F"));
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = Config {
            api_base_url: "localhost:7716 elearning".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            ElearningClient::new(&config),
            Err(AppError::Config(ConfigError::InvalidBaseUrl { .. }))
        ));
    }
}
