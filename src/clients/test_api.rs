//! 试卷与各 Part 题目相关接口

use crate::clients::ElearningClient;
use crate::error::AppResult;
use crate::models::{ItemId, PageData, PartKey, TestDetail};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

impl ElearningClient {
    /// 分页获取试卷列表
    ///
    /// # 参数
    /// - `page`: 页码（从 0 开始）
    /// - `size`: 每页数量
    /// - `keyword`: 搜索关键字
    pub async fn list_tests(
        &self,
        page: u32,
        size: u32,
        keyword: &str,
    ) -> AppResult<PageData<TestDetail>> {
        let query = [
            ("pageNumber", page.to_string()),
            ("pageSize", size.to_string()),
            ("keyword", keyword.to_string()),
        ];
        self.fetch(Method::GET, &["tests"], &query, None).await
    }

    /// 获取试卷详情（包含七个 Part）
    pub async fn get_test(&self, test_id: &ItemId) -> AppResult<TestDetail> {
        self.fetch(Method::GET, &["tests", &test_id.to_string()], &[], None)
            .await
    }

    /// 新建试卷
    pub async fn create_test(&self, body: &Value) -> AppResult<Option<Value>> {
        self.send(Method::POST, &["tests"], &[], Some(body)).await
    }

    /// 更新试卷基本信息
    pub async fn update_test(&self, test_id: &ItemId, body: &Value) -> AppResult<Option<Value>> {
        self.send(Method::PUT, &["tests", &test_id.to_string()], &[], Some(body))
            .await
    }

    /// 删除试卷
    pub async fn delete_test(&self, test_id: &ItemId) -> AppResult<()> {
        self.execute(Method::DELETE, &["tests", &test_id.to_string()], &[], None)
            .await
    }

    /// 获取一次作答的完整详情
    pub async fn attempt_details(&self, attempt_id: &ItemId) -> AppResult<Value> {
        self.fetch(
            Method::GET,
            &["attempt-result", &attempt_id.to_string(), "full-details"],
            &[],
            None,
        )
        .await
    }

    /// 交换同一 Part 中两道题的位置（服务端交换题号）
    pub async fn swap_part_items(
        &self,
        part: PartKey,
        first: &ItemId,
        second: &ItemId,
    ) -> AppResult<()> {
        debug!("交换 {} 中的 {} 与 {}", part.route(), first, second);
        let query = [("firstId", first.to_string()), ("secondId", second.to_string())];
        self.execute(Method::PUT, &[part.route(), "swap"], &query, None)
            .await
    }

    /// 在试卷的某个 Part 下新增题目
    pub async fn create_part_item(
        &self,
        test_id: &ItemId,
        part: PartKey,
        body: &Value,
    ) -> AppResult<()> {
        self.execute(
            Method::POST,
            &["tests", &test_id.to_string(), part.route()],
            &[],
            Some(body),
        )
        .await
    }

    /// 更新某个 Part 下的题目
    pub async fn update_part_item(&self, part: PartKey, id: &ItemId, body: &Value) -> AppResult<()> {
        self.execute(
            Method::PUT,
            &[part.route(), &id.to_string()],
            &[],
            Some(body),
        )
        .await
    }

    /// 删除某个 Part 下的题目
    pub async fn delete_part_item(&self, part: PartKey, id: &ItemId) -> AppResult<()> {
        self.execute(Method::DELETE, &[part.route(), &id.to_string()], &[], None)
            .await
    }
}
