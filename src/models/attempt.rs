use crate::models::item::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 提交记录（一次作答）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptSummary {
    pub id: ItemId,
    #[serde(default)]
    pub test_name: Option<String>,
    #[serde(default, alias = "userName")]
    pub username: Option<String>,
    #[serde(default, alias = "totalScore")]
    pub score: Option<f64>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
