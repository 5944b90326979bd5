//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use crate::config::Config;
use crate::models::PartKey;
use crate::utils::media::resolve_media_url;
use crate::workflow::TestBoard;
use anyhow::Result;
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化 tracing
///
/// 优先使用 `RUST_LOG`；未设置时按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    // 重复初始化（例如测试中）直接忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化会话日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n试卷管理会话日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷管理后台");
    info!("🌐 后端地址: {}", config.api_base_url);
    if config.token.is_empty() {
        warn!("⚠️ 未配置 token，请求将不带 Authorization 头");
    }
    info!("{}", "=".repeat(60));
}

/// 打印整张试卷看板
///
/// # 参数
/// - `board`: 试卷看板
/// - `storage_base_url`: 文件存储地址，用于显示媒体完整 URL
pub fn log_board(board: &TestBoard, storage_base_url: &str) {
    if let Some(reason) = board.load_error() {
        warn!("⚠️ 试卷 {} 加载失败: {}", board.test_id(), reason);
        return;
    }

    let header = board.header();
    info!("\n{}", "=".repeat(60));
    info!("📄 {} (ID: {})", header.test_name, board.test_id());
    if let Some(minutes) = header.timer_in_minutes {
        info!("⏱️ 时长: {} 分钟", minutes);
    }
    if let Some(count) = header.num_of_participants {
        info!("👥 参与人数: {}", count);
    }
    if let Some(start) = header.start_time_display() {
        info!("📅 开始时间: {}", start);
    }
    info!("{}", "=".repeat(60));

    for part in PartKey::ALL {
        log_part(board, part, storage_base_url);
    }
}

/// 打印单个 Part
pub fn log_part(board: &TestBoard, part: PartKey, storage_base_url: &str) {
    let list = board.list(part);
    let selection = board.selection(part);
    let unit = if part.is_grouped() { "组" } else { "题" };

    info!("\n{}", "─".repeat(60));
    info!("{} ({} {})", part, list.len(), unit);
    info!("{}", "─".repeat(60));

    for (index, item) in list.items().iter().enumerate() {
        let mark = if selection.contains(&item.id) { "☑" } else { "☐" };
        let preview = item
            .preview_text()
            .map(|t| truncate_text(t, 50))
            .unwrap_or_default();
        info!("{} [{}] {} (ID: {}) {}", mark, index, item.label(), item.id, preview);

        for key in ["image", "audio"] {
            if let Some(url) = item
                .media_path(key)
                .and_then(|p| resolve_media_url(storage_base_url, p))
            {
                info!("      {}: {}", key, url);
            }
        }
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("短文本", 5), "短文本");
        assert_eq!(truncate_text("这是一段很长的题干内容", 4), "这是一段...");
    }

    #[test]
    fn test_init_log_file_writes_header() {
        let path = std::env::temp_dir().join(format!("session_header_{}.log", std::process::id()));
        init_log_file(&path.to_string_lossy()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("试卷管理会话日志"));
        let _ = fs::remove_file(&path);
    }
}
