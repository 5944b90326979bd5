//! 试卷看板 - 流程层
//!
//! 对应"试卷详情编辑"界面：一份试卷头信息 + 七个 Part 的显示列表 + 七份多选状态。
//!
//! 核心策略：服务端是唯一的事实来源。任何变更（排序、删除、新增、修改）
//! 结束后都整体重新拉取试卷；失败时不做补偿操作，直接丢弃本地状态并重新拉取。
//!
//! 所有变更方法都需要 `&mut self`，同一看板上不会有两个操作同时进行。

use crate::error::{AppResult, BoardError};
use crate::models::{DisplayList, ItemId, PartKey, TestDetail};
use crate::reorder::{execute_swaps, plan_move, PendingReorder};
use crate::services::{Notifier, PartBackend};
use crate::workflow::bulk_delete::delete_many;
use crate::workflow::selection::Selection;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

const REORDER_FAILED: &str = "排序失败，已从服务器重新加载";
const DELETE_FAILED: &str = "删除失败，已从服务器重新加载";

/// 拖拽排序结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// 位置未变，没有发出请求
    Unchanged,
    /// 全部交换成功
    Applied { swaps: usize },
    /// 中途失败，已重新拉取（`completed` 次交换已在服务端生效）
    Reverted { completed: usize, total: usize },
    /// 请求被拒绝（索引越界 / 试卷未加载），没有发出请求
    Rejected(BoardError),
}

/// 批量删除结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkDeleteOutcome {
    /// 没有选中任何条目
    NothingSelected,
    /// 全部删除成功
    Deleted { count: usize },
    /// 至少一个删除失败（可能全部失败），已重新拉取
    Failed { deleted: usize, failed: usize },
    Rejected(BoardError),
}

/// 单条新增 / 修改 / 删除结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Saved,
    Failed,
    Rejected(BoardError),
}

/// 试卷看板
pub struct TestBoard {
    backend: Arc<dyn PartBackend>,
    notifier: Arc<dyn Notifier>,
    test_id: ItemId,
    /// 试卷头信息（七个 Part 已移入 `lists`）
    header: TestDetail,
    lists: Vec<DisplayList>,
    selections: Vec<Selection>,
    load_error: Option<String>,
    /// 有操作在等待服务端时被中断，本地状态不可信
    dirty: bool,
}

impl TestBoard {
    /// 拉取试卷并创建看板
    ///
    /// 拉取失败时看板进入"加载失败"状态（所有列表为空），不会重试
    pub async fn load(
        backend: Arc<dyn PartBackend>,
        notifier: Arc<dyn Notifier>,
        test_id: ItemId,
    ) -> Self {
        let mut board = Self {
            backend,
            notifier,
            test_id,
            header: TestDetail::default(),
            lists: PartKey::ALL.iter().map(|&p| DisplayList::empty(p)).collect(),
            selections: vec![Selection::new(); PartKey::ALL.len()],
            load_error: None,
            dirty: false,
        };
        board.refetch().await;
        board
    }

    /// 重新拉取试卷，整体替换本地状态
    ///
    /// # 返回
    /// 是否拉取成功
    pub async fn refetch(&mut self) -> bool {
        match self.backend.fetch_test(&self.test_id).await {
            Ok(mut test) => {
                for part in PartKey::ALL {
                    let idx = part.index();
                    self.lists[idx].replace(test.take_part(part));
                    self.selections[idx].retain_present(&self.lists[idx]);
                }
                self.header = test;
                self.load_error = None;
                self.dirty = false;
                true
            }
            Err(e) => {
                error!("❌ 拉取试卷 {} 失败: {}", self.test_id, e);
                for list in &mut self.lists {
                    list.clear();
                }
                for selection in &mut self.selections {
                    selection.clear();
                }
                self.load_error = Some(e.to_string());
                self.dirty = false;
                false
            }
        }
    }

    // ========== 只读访问 ==========

    pub fn test_id(&self) -> &ItemId {
        &self.test_id
    }

    pub fn header(&self) -> &TestDetail {
        &self.header
    }

    pub fn list(&self, part: PartKey) -> &DisplayList {
        &self.lists[part.index()]
    }

    pub fn selection(&self, part: PartKey) -> &Selection {
        &self.selections[part.index()]
    }

    pub fn is_loaded(&self) -> bool {
        self.load_error.is_none()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// 新增题目时建议的题号
    pub fn suggested_question_no(&self, part: PartKey) -> i64 {
        self.list(part).suggested_question_no()
    }

    /// 预填了建议题号的空白表单
    pub fn blank_form(&self, part: PartKey) -> Value {
        part.blank_form(self.suggested_question_no(part))
    }

    // ========== 多选 ==========

    /// 切换选中状态；条目不在列表中时返回 `None`
    pub fn toggle_selection(&mut self, part: PartKey, id: &ItemId) -> Option<bool> {
        let idx = part.index();
        if !self.lists[idx].contains(id) {
            return None;
        }
        Some(self.selections[idx].toggle(id))
    }

    /// 选中条目（不切换）；条目不在列表中时返回 `false`
    pub fn select_item(&mut self, part: PartKey, id: &ItemId) -> bool {
        let idx = part.index();
        if !self.lists[idx].contains(id) {
            return false;
        }
        self.selections[idx].select(id);
        true
    }

    pub fn select_all(&mut self, part: PartKey) {
        let idx = part.index();
        self.selections[idx].select_all(&self.lists[idx]);
    }

    pub fn clear_selection(&mut self, part: PartKey) {
        self.selections[part.index()].clear();
    }

    // ========== 变更操作 ==========

    /// 拖拽排序
    ///
    /// 1. 生成计划并立即在本地应用新顺序
    /// 2. 按顺序逐个调用交换接口
    /// 3. 成功：重新拉取以获取服务端重新计算的题号
    /// 4. 失败：提示一次，重新拉取一次，丢弃本地顺序
    pub async fn reorder(&mut self, part: PartKey, old_index: usize, new_index: usize) -> ReorderOutcome {
        if let Err(e) = self.ensure_ready().await {
            return ReorderOutcome::Rejected(e);
        }

        let idx = part.index();
        let gesture = PendingReorder::new(old_index, new_index);
        let plan = match plan_move(self.lists[idx].items(), gesture) {
            Ok(Some(plan)) => plan,
            Ok(None) => return ReorderOutcome::Unchanged,
            Err(e) => {
                warn!("[{}] ⚠️ 忽略无效拖拽: {}", part.route(), e);
                return ReorderOutcome::Rejected(e);
            }
        };

        let total = plan.swaps.len();
        info!(
            "[{}] 🔀 拖拽 {} → {}，需要 {} 次交换",
            part.route(),
            old_index,
            new_index,
            total
        );

        // 乐观更新：请求发出前先显示新顺序
        self.lists[idx].replace(plan.reordered);
        self.dirty = true;
        let result = execute_swaps(self.backend.as_ref(), part, &plan.swaps).await;

        match result {
            Ok(swaps) => {
                self.refetch().await;
                ReorderOutcome::Applied { swaps }
            }
            Err(failure) => {
                self.notifier.failure(REORDER_FAILED);
                self.refetch().await;
                ReorderOutcome::Reverted {
                    completed: failure.step,
                    total,
                }
            }
        }
    }

    /// 删除某个 Part 中所有选中的条目
    pub async fn bulk_delete(&mut self, part: PartKey) -> BulkDeleteOutcome {
        if let Err(e) = self.ensure_ready().await {
            return BulkDeleteOutcome::Rejected(e);
        }

        let idx = part.index();
        let ids = self.selections[idx].ids();
        if ids.is_empty() {
            return BulkDeleteOutcome::NothingSelected;
        }

        info!("[{}] 🗑️ 批量删除 {} 道题目", part.route(), ids.len());
        self.dirty = true;
        let report = delete_many(self.backend.as_ref(), part, &ids).await;

        let outcome = if report.all_succeeded() {
            self.selections[idx].clear();
            self.notifier
                .success(&format!("已删除 {} 道题目", report.deleted.len()));
            BulkDeleteOutcome::Deleted {
                count: report.deleted.len(),
            }
        } else {
            self.notifier.failure(DELETE_FAILED);
            BulkDeleteOutcome::Failed {
                deleted: report.deleted.len(),
                failed: report.failed.len(),
            }
        };

        self.refetch().await;
        outcome
    }

    /// 在某个 Part 下新增题目
    pub async fn add_item(&mut self, part: PartKey, body: &Value) -> MutationOutcome {
        if let Err(e) = self.ensure_ready().await {
            return MutationOutcome::Rejected(e);
        }
        self.dirty = true;
        let result = self.backend.create_item(&self.test_id, part, body).await;
        self.finish_mutation(part, result, "已添加题目", "添加题目失败")
            .await
    }

    /// 修改某个 Part 下的题目
    pub async fn update_item(&mut self, part: PartKey, id: &ItemId, body: &Value) -> MutationOutcome {
        if let Err(e) = self.ensure_ready().await {
            return MutationOutcome::Rejected(e);
        }
        self.dirty = true;
        let result = self.backend.update_item(part, id, body).await;
        self.finish_mutation(part, result, "已保存题目", "保存题目失败")
            .await
    }

    /// 删除单个题目
    pub async fn delete_item(&mut self, part: PartKey, id: &ItemId) -> MutationOutcome {
        if let Err(e) = self.ensure_ready().await {
            return MutationOutcome::Rejected(e);
        }
        self.dirty = true;
        let result = self.backend.delete_item(part, id).await;
        self.finish_mutation(part, result, "已删除题目", "删除题目失败")
            .await
    }

    // ========== 内部辅助 ==========

    /// 上一次操作被中断时先重新同步；未加载时拒绝操作
    async fn ensure_ready(&mut self) -> Result<(), BoardError> {
        if self.dirty {
            warn!("⚠️ 上一次操作未完成，先从服务器重新同步");
            self.refetch().await;
        }
        match &self.load_error {
            Some(reason) => Err(BoardError::NotLoaded {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn finish_mutation(
        &mut self,
        part: PartKey,
        result: AppResult<()>,
        success: &str,
        failure: &str,
    ) -> MutationOutcome {
        let outcome = match result {
            Ok(()) => {
                self.notifier.success(success);
                MutationOutcome::Saved
            }
            Err(e) => {
                warn!("[{}] {}: {}", part.route(), failure, e);
                self.notifier.failure(failure);
                MutationOutcome::Failed
            }
        };
        self.refetch().await;
        outcome
    }
}
