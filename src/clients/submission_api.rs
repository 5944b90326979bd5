//! 提交记录与统计接口

use crate::clients::ElearningClient;
use crate::error::AppResult;
use crate::models::{AttemptSummary, PageData};
use reqwest::Method;
use serde_json::Value;

impl ElearningClient {
    /// 分页获取提交记录
    pub async fn list_submissions(&self, page: u32, size: u32) -> AppResult<PageData<AttemptSummary>> {
        let query = [("page", page.to_string()), ("size", size.to_string())];
        self.fetch(Method::GET, &["attempts"], &query, None).await
    }

    /// 仪表盘统计数据（字段由后端决定，原样返回）
    pub async fn dashboard_stats(&self) -> AppResult<Value> {
        self.fetch(Method::GET, &["dashboard", "stats"], &[], None).await
    }
}
