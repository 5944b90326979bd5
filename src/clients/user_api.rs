//! 用户管理接口

use crate::clients::ElearningClient;
use crate::error::AppResult;
use crate::models::{ItemId, PageData, User};
use reqwest::Method;

impl ElearningClient {
    /// 分页获取用户列表
    pub async fn list_users(&self, page: u32, size: u32, keyword: &str) -> AppResult<PageData<User>> {
        let query = [
            ("pageNumber", page.to_string()),
            ("pageSize", size.to_string()),
            ("keyword", keyword.to_string()),
        ];
        self.fetch(Method::GET, &["users"], &query, None).await
    }

    /// 启用 / 禁用用户（后台的"删除"就是禁用）
    pub async fn set_user_enabled(&self, user_id: &ItemId, enabled: bool) -> AppResult<()> {
        self.execute(
            Method::PATCH,
            &["users", &user_id.to_string(), "status"],
            &[("enabled", enabled.to_string())],
            None,
        )
        .await
    }

    /// 修改用户角色
    pub async fn set_user_role(&self, user_id: &ItemId, role: &str) -> AppResult<()> {
        self.execute(
            Method::PATCH,
            &["users", &user_id.to_string(), "role"],
            &[("role", role.to_string())],
            None,
        )
        .await
    }
}
