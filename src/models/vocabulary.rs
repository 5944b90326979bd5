use crate::models::item::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 词汇主题
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabCategory {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// 只有详情接口会带上单词列表
    #[serde(default, alias = "vocabularies", alias = "vocabularyList")]
    pub words: Vec<VocabWord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 单词
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabWord {
    pub id: ItemId,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
