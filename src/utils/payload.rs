use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// 从 JSON 文件读取请求体
///
/// 必须是 JSON 对象，题目 / 试卷 / 单词的表单都是对象
pub async fn load_json_payload(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取JSON文件: {}", path.display()))?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("无法解析JSON文件: {}", path.display()))?;

    if !value.is_object() {
        anyhow::bail!("JSON文件内容必须是对象: {}", path.display());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_object() {
        let path = std::env::temp_dir().join(format!("payload_array_{}.json", std::process::id()));
        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(load_json_payload(&path).await.is_err());

        std::fs::write(&path, r#"{"questionNo": 101}"#).unwrap();
        let value = load_json_payload(&path).await.unwrap();
        assert_eq!(value["questionNo"], 101);

        let _ = std::fs::remove_file(&path);
    }
}
