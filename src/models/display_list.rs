//! 某个 Part 的显示列表
//!
//! 只是服务端顺序的本地缓存，下一次变更完成（或失败）后即失效

use crate::models::item::{ItemId, PartItem};
use crate::models::part::PartKey;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    part: PartKey,
    items: Vec<PartItem>,
}

impl DisplayList {
    pub fn new(part: PartKey, items: Vec<PartItem>) -> Self {
        Self { part, items }
    }

    pub fn empty(part: PartKey) -> Self {
        Self::new(part, Vec::new())
    }

    pub fn part(&self) -> PartKey {
        self.part
    }

    pub fn items(&self) -> &[PartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.items.iter().map(|item| &item.id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// 整体替换（乐观更新或重新拉取）
    pub fn replace(&mut self, items: Vec<PartItem>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// 新增题目时建议的题号
    ///
    /// 当前最大题号 + 1；空列表时取该 Part 官方起始题号
    pub fn suggested_question_no(&self) -> i64 {
        self.items
            .iter()
            .filter_map(PartItem::max_question_no)
            .max()
            .map(|n| n + 1)
            .unwrap_or_else(|| *self.part.question_range().start())
    }
}
