//! 批量删除
//!
//! 删除之间互不依赖，所有请求并发发出，全部返回后再汇总

use crate::error::AppError;
use crate::models::{ItemId, PartKey};
use crate::services::PartBackend;
use futures::future::join_all;
use tracing::warn;

/// 批量删除结果
#[derive(Debug, Default)]
pub struct BulkDeleteReport {
    pub deleted: Vec<ItemId>,
    pub failed: Vec<(ItemId, AppError)>,
}

impl BulkDeleteReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }
}

/// 对每个 ID 发出一次删除请求（并发）
pub async fn delete_many(
    backend: &dyn PartBackend,
    part: PartKey,
    ids: &[ItemId],
) -> BulkDeleteReport {
    let results = join_all(ids.iter().map(|id| async move {
        let result = backend.delete_item(part, id).await;
        (id.clone(), result)
    }))
    .await;

    let mut report = BulkDeleteReport::default();
    for (id, result) in results {
        match result {
            Ok(()) => report.deleted.push(id),
            Err(e) => {
                warn!("[{}] 删除 {} 失败: {}", part.route(), id, e);
                report.failed.push((id, e));
            }
        }
    }
    report
}
