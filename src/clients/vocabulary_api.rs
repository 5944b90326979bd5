//! 词汇主题与单词接口

use crate::clients::ElearningClient;
use crate::error::AppResult;
use crate::models::{ItemId, VocabCategory};
use reqwest::Method;
use serde_json::Value;

const CATEGORIES: &str = "vocab-categories";
const WORDS: &str = "vocabularies";

impl ElearningClient {
    /// 获取全部主题
    pub async fn list_categories(&self) -> AppResult<Vec<VocabCategory>> {
        Ok(self
            .send(Method::GET, &[CATEGORIES], &[], None)
            .await?
            .unwrap_or_default())
    }

    /// 获取主题详情（含单词）
    pub async fn category_details(&self, category_id: &ItemId) -> AppResult<VocabCategory> {
        self.fetch(Method::GET, &[CATEGORIES, &category_id.to_string()], &[], None)
            .await
    }

    pub async fn create_category(&self, body: &Value) -> AppResult<()> {
        self.execute(Method::POST, &[CATEGORIES], &[], Some(body)).await
    }

    pub async fn update_category(&self, category_id: &ItemId, body: &Value) -> AppResult<()> {
        self.execute(
            Method::PUT,
            &[CATEGORIES, &category_id.to_string()],
            &[],
            Some(body),
        )
        .await
    }

    pub async fn delete_category(&self, category_id: &ItemId) -> AppResult<()> {
        self.execute(Method::DELETE, &[CATEGORIES, &category_id.to_string()], &[], None)
            .await
    }

    /// 向主题添加单词
    pub async fn add_word(&self, category_id: &ItemId, body: &Value) -> AppResult<()> {
        self.execute(
            Method::POST,
            &[CATEGORIES, &category_id.to_string()],
            &[],
            Some(body),
        )
        .await
    }

    pub async fn update_word(&self, word_id: &ItemId, body: &Value) -> AppResult<()> {
        self.execute(Method::PUT, &[WORDS, &word_id.to_string()], &[], Some(body))
            .await
    }

    pub async fn delete_word(&self, word_id: &ItemId) -> AppResult<()> {
        self.execute(Method::DELETE, &[WORDS, &word_id.to_string()], &[], None)
            .await
    }
}
