//! 有序集合后端能力 - 业务能力层
//!
//! 排序核心只依赖这里的几个操作，真实实现是 [`ElearningClient`]，
//! 测试中可以替换为内存实现

use crate::clients::ElearningClient;
use crate::error::AppResult;
use crate::models::{DisplayList, ItemId, PartKey, TestDetail};
use async_trait::async_trait;
use serde_json::Value;

/// 排序 / 删除 / 增改所需的后端能力
#[async_trait]
pub trait PartBackend: Send + Sync {
    /// 获取试卷（权威顺序）
    async fn fetch_test(&self, test_id: &ItemId) -> AppResult<TestDetail>;

    /// 获取单个 Part 的权威顺序
    async fn fetch_ordered_list(&self, test_id: &ItemId, part: PartKey) -> AppResult<DisplayList> {
        let mut test = self.fetch_test(test_id).await?;
        Ok(DisplayList::new(part, test.take_part(part)))
    }

    /// 交换两道题的题号；不保证幂等，每个步骤只能调用一次
    async fn swap_adjacent(&self, part: PartKey, first: &ItemId, second: &ItemId) -> AppResult<()>;

    async fn delete_item(&self, part: PartKey, id: &ItemId) -> AppResult<()>;

    async fn create_item(&self, test_id: &ItemId, part: PartKey, body: &Value) -> AppResult<()>;

    async fn update_item(&self, part: PartKey, id: &ItemId, body: &Value) -> AppResult<()>;
}

#[async_trait]
impl PartBackend for ElearningClient {
    async fn fetch_test(&self, test_id: &ItemId) -> AppResult<TestDetail> {
        self.get_test(test_id).await
    }

    async fn swap_adjacent(&self, part: PartKey, first: &ItemId, second: &ItemId) -> AppResult<()> {
        self.swap_part_items(part, first, second).await
    }

    async fn delete_item(&self, part: PartKey, id: &ItemId) -> AppResult<()> {
        self.delete_part_item(part, id).await
    }

    async fn create_item(&self, test_id: &ItemId, part: PartKey, body: &Value) -> AppResult<()> {
        self.create_part_item(test_id, part, body).await
    }

    async fn update_item(&self, part: PartKey, id: &ItemId, body: &Value) -> AppResult<()> {
        self.update_part_item(part, id, body).await
    }
}
