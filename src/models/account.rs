use crate::models::item::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 平台用户
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ItemId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// 角色，例如 `ROLE_USER` / `ROLE_ADMIN`
    #[serde(default)]
    pub roles: Option<String>,
    /// 禁用即"删除"
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// 显示名称：全名 → 用户名 → 邮箱 → ID
    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| self.id.to_string())
    }

    /// 后端未返回时视为启用
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }
}
