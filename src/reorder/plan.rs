//! 拖拽排序规划（纯函数）
//!
//! 后端只支持"交换两道题"，不支持"移动到第 K 位"。
//! 一次拖拽只会把单个条目从 `old_index` 移到 `new_index`，
//! 等价于把它与沿途经过的每个条目依次交换，共 `|old - new|` 次，这是最少的相邻交换次数。

use crate::error::BoardError;
use crate::models::{ItemId, OrderedItem};

/// 一次拖拽手势，生成计划后即丢弃
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReorder {
    pub old_index: usize,
    pub new_index: usize,
}

impl PendingReorder {
    pub fn new(old_index: usize, new_index: usize) -> Self {
        Self {
            old_index,
            new_index,
        }
    }

    pub fn distance(&self) -> usize {
        self.old_index.abs_diff(self.new_index)
    }
}

/// 一次交换：被拖动的条目与它越过的条目
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapStep {
    pub moved: ItemId,
    pub passed: ItemId,
}

/// 排序计划：本地新顺序 + 有序的交换序列
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderPlan<T> {
    pub reordered: Vec<T>,
    pub swaps: Vec<SwapStep>,
}

/// 为一次拖拽生成排序计划
///
/// # 返回
/// - `Ok(None)`: 位置未变，不需要任何请求
/// - `Ok(Some(plan))`: 本地新顺序和交换序列
/// - `Err`: 索引越界
pub fn plan_move<T>(items: &[T], gesture: PendingReorder) -> Result<Option<ReorderPlan<T>>, BoardError>
where
    T: OrderedItem + Clone,
{
    let len = items.len();
    for index in [gesture.old_index, gesture.new_index] {
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
    }

    let PendingReorder {
        old_index: old,
        new_index: new,
    } = gesture;
    if old == new {
        return Ok(None);
    }

    let mut reordered = items.to_vec();
    let moved = reordered.remove(old);
    reordered.insert(new, moved);

    // 交换目标基于已经在本地重排后的列表计算
    let moved_id = reordered[new].item_id().clone();
    let step = |i: usize| SwapStep {
        moved: moved_id.clone(),
        passed: reordered[i].item_id().clone(),
    };
    let swaps: Vec<SwapStep> = if old < new {
        (old..new).map(step).collect()
    } else {
        (new + 1..=old).rev().map(step).collect()
    };

    Ok(Some(ReorderPlan { reordered, swaps }))
}

/// 在列表上回放交换序列，模拟服务端的执行结果
pub fn apply_swaps<T>(items: &[T], swaps: &[SwapStep]) -> Vec<T>
where
    T: OrderedItem + Clone,
{
    let mut result = items.to_vec();
    for swap in swaps {
        let a = result.iter().position(|x| x.item_id() == &swap.moved);
        let b = result.iter().position(|x| x.item_id() == &swap.passed);
        if let (Some(a), Some(b)) = (a, b) {
            result.swap(a, b);
        }
    }
    result
}
