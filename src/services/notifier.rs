//! 提示服务 - 业务能力层
//!
//! 用户可见的成功 / 失败提示（界面上的 toast）

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::{info, warn};

/// 提示输出
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// 通过 tracing 输出提示，可选追加到会话日志文件
pub struct TracingNotifier {
    log_file_path: Option<String>,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self {
            log_file_path: None,
        }
    }

    /// 同时把提示追加写入文件
    pub fn with_log_file(path: impl Into<String>) -> Self {
        Self {
            log_file_path: Some(path.into()),
        }
    }

    fn append(&self, marker: &str, message: &str) -> Result<()> {
        let Some(path) = &self.log_file_path else {
            return Ok(());
        };
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let line = format!(
            "[{}] {} {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            marker,
            message
        );
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!("✓ {}", message);
        if let Err(e) = self.append("✓", message) {
            warn!("写入会话日志失败: {}", e);
        }
    }

    fn failure(&self, message: &str) {
        warn!("⚠️ {}", message);
        if let Err(e) = self.append("✗", message) {
            warn!("写入会话日志失败: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_are_appended_to_log_file() {
        let path = std::env::temp_dir().join(format!("notifier_test_{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let notifier = TracingNotifier::with_log_file(path.to_string_lossy());
        notifier.success("已删除 2 道题目");
        notifier.failure("排序失败");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("✓ 已删除 2 道题目"));
        assert!(lines[1].ends_with("✗ 排序失败"));

        let _ = std::fs::remove_file(&path);
    }
}
