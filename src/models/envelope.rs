//! 后端统一响应格式

use serde::Deserialize;

/// 响应信封 `{ success | isSuccess, message, data }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, rename = "isSuccess")]
    pub is_success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 两个标志任意一个为 true 即视为成功
    pub fn is_ok(&self) -> bool {
        self.success || self.is_success
    }
}

/// 分页数据
///
/// 不同接口的分页字段名不统一：试卷用 `data` + `totalElement`，
/// 提交记录用 `content` + `totalElements`，用户用 `users` + `total-elements`
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawPage<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub total: u64,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawPage<T> {
    #[serde(default)]
    data: Option<Vec<T>>,
    #[serde(default)]
    content: Option<Vec<T>>,
    #[serde(default)]
    users: Option<Vec<T>>,
    #[serde(
        default,
        rename = "totalElement",
        alias = "totalElements",
        alias = "total-elements"
    )]
    total: Option<u64>,
}

impl<T> From<RawPage<T>> for PageData<T> {
    fn from(raw: RawPage<T>) -> Self {
        let items = raw
            .data
            .or(raw.content)
            .or(raw.users)
            .unwrap_or_default();
        let total = raw.total.unwrap_or(items.len() as u64);
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_either_success_flag() {
        let a: ApiResponse<Value> = serde_json::from_value(json!({"success": true})).unwrap();
        let b: ApiResponse<Value> = serde_json::from_value(json!({"isSuccess": true, "data": 1})).unwrap();
        let c: ApiResponse<Value> =
            serde_json::from_value(json!({"success": false, "message": "denied"})).unwrap();
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert!(!c.is_ok());
        assert_eq!(c.message.as_deref(), Some("denied"));
    }

    #[test]
    fn test_page_shapes() {
        let tests: PageData<Value> =
            serde_json::from_value(json!({"data": [1, 2], "totalElement": 12})).unwrap();
        assert_eq!((tests.items.len(), tests.total), (2, 12));

        let attempts: PageData<Value> =
            serde_json::from_value(json!({"content": [1], "totalElements": 5})).unwrap();
        assert_eq!((attempts.items.len(), attempts.total), (1, 5));

        let users: PageData<Value> =
            serde_json::from_value(json!({"users": [1, 2, 3], "total-elements": 40})).unwrap();
        assert_eq!((users.items.len(), users.total), (3, 40));

        let bare: PageData<Value> = serde_json::from_value(json!({"content": [1, 2]})).unwrap();
        assert_eq!(bare.total, 2);
    }
}
